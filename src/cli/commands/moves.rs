//! Moves command - optimal moves for the player to move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    ai::MinimaxSearch,
    cli::{
        output::{print_kv, print_section},
        parse_grid,
    },
    tictactoe::{Position, Token},
};

#[derive(Parser, Debug)]
#[command(about = "Show every optimal move for the player to move")]
pub struct MovesArgs {
    /// Grid in the 9-character encoding, row-major (x, o; '.', '_' or ' ' for empty)
    pub grid: String,

    /// Player to move (`x` or `o`)
    #[arg(long, short = 't')]
    pub turn: Token,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MovesReport {
    grid: String,
    turn: Token,
    score: i32,
    moves: Vec<Position>,
}

pub fn execute(args: MovesArgs) -> Result<()> {
    let grid = parse_grid(&args.grid)?;
    let search = MinimaxSearch::build()?;
    let moves = search.moves(&grid, args.turn)?;
    let score = search.score(&grid, args.turn)?;

    if args.json {
        let report = MovesReport {
            grid: grid.encode(),
            turn: args.turn,
            score,
            moves,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Optimal moves for {}", args.turn));
    println!("{grid}\n");
    print_kv("Value", describe_score(score));
    if moves.is_empty() {
        print_kv("Moves", "none (the game is over)");
    } else {
        let listed: Vec<String> = moves.iter().map(Position::to_string).collect();
        print_kv("Moves", &listed.join(" "));
    }
    Ok(())
}

pub(crate) fn describe_score(score: i32) -> &'static str {
    match score.signum() {
        1 => "forced win",
        -1 => "forced loss",
        _ => "draw with best play",
    }
}
