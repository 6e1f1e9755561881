//! Observers for self-play matches
//!
//! Observers collect data while the arena plays without coupling the game
//! loop to terminals or files.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};

use super::{GameRecord, MatchResult};
use crate::{Error, Result, ports::MatchObserver, tictactoe::Token};

/// Progress bar observer - shows the running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    hidden: bool,
    x_wins: usize,
    o_wins: usize,
    squashed: usize,
}

impl ProgressObserver {
    /// Create a progress observer drawing to stderr
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            hidden: false,
            x_wins: 0,
            o_wins: 0,
            squashed: 0,
        }
    }

    /// A progress observer that keeps the tally but never draws
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::new()
        }
    }

    fn tally(&self) -> String {
        format!("X:{} O:{} draw:{}", self.x_wins, self.o_wins, self.squashed)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_games as u64)
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        match record.winner {
            Some(Token::X) => self.x_wins += 1,
            Some(_) => self.o_wins += 1,
            None => self.squashed += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Transcript observer - writes one JSON line per finished game
pub struct TranscriptObserver {
    writer: BufWriter<File>,
}

impl TranscriptObserver {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create transcript {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl MatchObserver for TranscriptObserver {
    fn on_game_end(&mut self, _game_num: usize, record: &GameRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
