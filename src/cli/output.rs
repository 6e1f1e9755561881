//! Output formatting for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, tictactoe::Grid};

/// Create a spinner for long-running computations
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render grids next to each other, each under its label
pub fn render_side_by_side(grids: &[(String, Grid)]) -> String {
    const WIDTH: usize = 11;
    const GAP: &str = "    ";

    let columns: Vec<Vec<String>> = grids
        .iter()
        .map(|(label, grid)| {
            let mut lines = vec![format!("{label:<WIDTH$}")];
            lines.extend(grid.to_string().lines().map(str::to_string));
            lines
        })
        .collect();

    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|col| {
                    let cell = col.get(row).map(String::as_str).unwrap_or("");
                    format!("{cell:<WIDTH$}")
                })
                .collect::<Vec<_>>()
                .join(GAP)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(765), "765");
        assert_eq!(format_number(19683), "19,683");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_side_by_side_rendering() {
        let rendered = render_side_by_side(&[
            ("a".to_string(), Grid::decode("x")),
            ("b".to_string(), Grid::decode("  o")),
        ]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "a              b");
        assert_eq!(lines[1], " x |   |          |   | o");
    }
}
