//! xo CLI - tic-tac-toe adjudication and minimax analysis
//!
//! This CLI provides:
//! - Optimal move queries for any grid
//! - Grid classification and symmetry analysis
//! - Solving the full game tree
//! - Self-play matches between difficulty levels

use anyhow::Result;
use clap::{Parser, Subcommand};
use xo::cli::{
    commands::{analyze, moves, play, solve, symmetry},
    config::CommonConfig,
    init_tracing,
};

#[derive(Parser)]
#[command(name = "xo")]
#[command(
    version,
    about = "Tic-tac-toe engine with a symmetry-reduced minimax opponent",
    long_about = None
)]
struct Cli {
    /// Debug logging from the engine and search (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimal moves for the player to move
    Moves(moves::MovesArgs),

    /// Classify a grid after a move
    Analyze(analyze::AnalyzeArgs),

    /// Canonical form and orbit of a grid
    Symmetry(symmetry::SymmetryArgs),

    /// Solve the game tree
    Solve(solve::SolveArgs),

    /// Self-play matches between automated players
    Play(play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let common = CommonConfig {
        verbose: cli.verbose,
        ..CommonConfig::default()
    };

    match cli.command {
        Commands::Moves(args) => moves::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Symmetry(args) => symmetry::execute(args),
        Commands::Solve(args) => solve::execute(args),
        Commands::Play(args) => play::execute(args, &common),
    }
}
