//! Observer port - abstraction for watching self-play matches
//!
//! Observers collect data while the arena plays games without coupling
//! the game loop to progress bars, transcripts or summaries.

use crate::{
    Result,
    pipeline::{GameRecord, MatchResult},
};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once
/// 2. `on_game_end(game_num, record)` - after every game
/// 3. `on_match_end(result)` - once
///
/// Every method defaults to doing nothing.
pub trait MatchObserver: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called with the full transcript of a finished game (`game_num` is 0-based)
    fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        Ok(())
    }
}
