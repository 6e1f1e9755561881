//! CLI infrastructure for the `xo` binary
//!
//! Commands are thin adapters over the library: they parse grids and tokens,
//! call into the engine, search or arena, and print the answer.

pub mod commands;
pub mod config;
pub mod output;

use anyhow::{Result, ensure};
use tracing_subscriber::EnvFilter;

use crate::tictactoe::{CELLS, Grid};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this crate with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,xo=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse a grid given on the command line.
///
/// Case-insensitive; `.`, `_` and anything else besides x/o mean an empty
/// cell. Shorter inputs are padded with empty cells.
pub fn parse_grid(input: &str) -> Result<Grid> {
    let len = input.chars().count();
    ensure!(
        len <= CELLS,
        "grid '{input}' has {len} cells, expected at most {CELLS}"
    );
    Ok(Grid::decode(&input.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Position, Token};

    #[test]
    fn test_parse_grid_accepts_placeholders() {
        let grid = parse_grid("X.o__x").unwrap();
        assert_eq!(grid.encode(), "x o  x   ");
        assert_eq!(grid.get(Position::new(1, 1)).unwrap(), Token::X);
    }

    #[test]
    fn test_parse_grid_rejects_long_input() {
        assert!(parse_grid("xoxoxoxoxo").is_err());
    }
}
