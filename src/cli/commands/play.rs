//! Play command - self-play matches between automated players

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    ai::{Difficulty, MinimaxSearch},
    cli::{
        config::CommonConfig,
        output::{format_number, print_kv, print_section, print_subsection},
    },
    pipeline::{Arena, MatchConfig, ProgressObserver, TranscriptObserver},
    tictactoe::Token,
};

#[derive(Parser, Debug)]
#[command(about = "Play automated players against each other")]
pub struct PlayArgs {
    /// Difficulty of the X player
    #[arg(long, value_enum, default_value_t = Difficulty::Expert)]
    pub x: Difficulty,

    /// Difficulty of the O player
    #[arg(long, value_enum, default_value_t = Difficulty::Expert)]
    pub o: Difficulty,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Who moves first (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Token,

    /// Swap the first player after every game
    #[arg(long)]
    pub alternate: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the match result to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write one JSON line per game with its event transcript
    #[arg(long)]
    pub transcript: Option<PathBuf>,
}

impl PlayArgs {
    fn common(&self, base: &CommonConfig) -> CommonConfig {
        CommonConfig {
            seed: self.seed.or(base.seed),
            progress: base.progress && !self.no_progress,
            verbose: base.verbose,
        }
    }

    fn match_config(&self, common: &CommonConfig) -> MatchConfig {
        let config = MatchConfig::new(self.x, self.o)
            .with_games(self.games)
            .with_first_player(self.first)
            .with_alternate_first(self.alternate);
        match common.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

pub fn execute(args: PlayArgs, base: &CommonConfig) -> Result<()> {
    let common = args.common(base);
    let config = args.match_config(&common);
    let search = MinimaxSearch::build()?;

    let mut arena = Arena::new(config, &search);
    if common.progress {
        arena = arena.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.transcript {
        arena = arena.with_observer(Box::new(TranscriptObserver::new(path)?));
    }
    let result = arena.run()?;

    if common.verbose {
        print_subsection("Games");
        for game in &result.games {
            let winner = game
                .winner
                .map_or_else(|| "squashed".to_string(), |t| format!("{t} wins"));
            println!(
                "  #{:<4} {} first, {} moves, {winner}: {:?}",
                game.game_num + 1,
                game.first_player,
                game.moves(),
                game.final_grid
            );
        }
    }

    print_section(&format!("{} (X) vs {} (O)", args.x, args.o));
    print_kv("Games", &format_number(result.total_games()));
    print_kv("X wins", &format_number(result.wins(Token::X)));
    print_kv("O wins", &format_number(result.wins(Token::O)));
    print_kv("Squashed", &format_number(result.squashed));
    if let Some(seed) = common.seed {
        print_kv("Seed", &seed.to_string());
    }

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nMatch result exported to: {}", path.display());
    }
    Ok(())
}
