//! Analyze command - classify a grid after a move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        output::{print_kv, print_section},
        parse_grid,
    },
    tictactoe::{Evaluation, Evaluator, GameOver, Token, WinningLine},
};

#[derive(Parser, Debug)]
#[command(about = "Classify a grid as ongoing, finished or impossible")]
pub struct AnalyzeArgs {
    /// Grid in the 9-character encoding, row-major
    pub grid: String,

    /// Player who made the last move (`x` or `o`)
    #[arg(long, short = 'l')]
    pub last_mover: Token,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let grid = parse_grid(&args.grid)?;
    let evaluation = Evaluator::analyze(&grid, args.last_mover)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    print_section(&format!("Evaluation after {} moved", args.last_mover));
    println!("{grid}\n");
    print_kv("X tokens", &grid.count(Token::X).to_string());
    print_kv("O tokens", &grid.count(Token::O).to_string());
    print_kv("Result", &evaluation.to_string());

    let lines: &[WinningLine] = match &evaluation {
        Evaluation::GameOver(GameOver::Winner(lines) | GameOver::Loser(lines)) => lines.as_slice(),
        _ => &[],
    };
    for line in lines {
        print_kv("Line", &describe_line(line));
    }
    Ok(())
}

fn describe_line(line: &WinningLine) -> String {
    let cells: Vec<String> = line.positions.iter().map(ToString::to_string).collect();
    format!("{:?} {}: {}", line.kind, line.index, cells.join(" "))
}
