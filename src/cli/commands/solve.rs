//! Solve command - solve the game tree and report on the score table

use std::{collections::BTreeMap, fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::{DRAW, LOSS, ScoreTable, WIN},
    cli::{
        commands::moves::describe_score,
        output::{create_spinner, format_number, print_kv, print_section},
    },
    tictactoe::Grid,
};

#[derive(Parser, Debug)]
#[command(about = "Solve tic-tac-toe and summarize the symmetry-reduced score table")]
pub struct SolveArgs {
    /// Export every canonical grid with its score (from X's side) as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let spinner = create_spinner("Solving game tree...")?;
    let table = ScoreTable::build()?;
    spinner.finish_and_clear();

    let count = |target: i32| table.iter().filter(|&(_, score)| score == target).count();
    let root = table.score(&Grid::new()).unwrap_or(DRAW);

    print_section("Tic-tac-toe solved");
    print_kv("Symmetry classes", &format_number(table.len()));
    print_kv("Game value", describe_score(root));
    print_kv("X wins", &format_number(count(WIN)));
    print_kv("Draws", &format_number(count(DRAW)));
    print_kv("O wins", &format_number(count(LOSS)));

    if let Some(path) = args.export {
        let scores: BTreeMap<&str, i32> = table
            .iter()
            .map(|(key, score)| (key.as_str(), score))
            .collect();
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &scores)?;
        println!("\nScore table exported to: {}", path.display());
    }
    Ok(())
}
