//! Self-play arena driving the engine with two automated players

use std::{fs::File, io::BufReader, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    Error, Result,
    adapters::{EventLog, TracingListener},
    ai::{Difficulty, MinimaxSearch, Strategy},
    engine::{EngineState, Event, GameEngine, Outcome},
    ports::MatchObserver,
    tictactoe::{Grid, Token},
};

/// Match configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Difficulty of the X player
    pub x: Difficulty,

    /// Difficulty of the O player
    pub o: Difficulty,

    /// Number of games to play
    pub games: usize,

    /// Who moves first in the first game
    pub first_player: Token,

    /// Swap the first player after every game
    pub alternate_first: bool,

    /// RNG seed; `None` draws one from the operating system
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// One game, X first, unseeded
    pub fn new(x: Difficulty, o: Difficulty) -> Self {
        Self {
            x,
            o,
            games: 1,
            first_player: Token::X,
            alternate_first: false,
            seed: None,
        }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_first_player(mut self, first_player: Token) -> Self {
        self.first_player = first_player;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_alternate_first(mut self, alternate_first: bool) -> Self {
        self.alternate_first = alternate_first;
        self
    }

    /// Who opens game `game_num` (0-based)
    pub fn first_player_for(&self, game_num: usize) -> Token {
        if self.alternate_first && game_num % 2 == 1 {
            self.first_player.other()
        } else {
            self.first_player
        }
    }

    pub fn difficulty_of(&self, token: Token) -> Option<Difficulty> {
        match token {
            Token::X => Some(self.x),
            Token::O => Some(self.o),
            Token::Empty => None,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Difficulty::Expert, Difficulty::Expert)
    }
}

/// Transcript of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 0-based game number within the match
    pub game_num: usize,

    pub first_player: Token,

    /// `None` for a squashed game
    pub winner: Option<Token>,

    /// Final grid in the 9-character encoding
    pub final_grid: String,

    /// Every event the engine emitted during the game, starting with `game_started`
    pub events: Vec<Event>,
}

impl GameRecord {
    pub fn is_squashed(&self) -> bool {
        self.winner.is_none()
    }

    /// Number of moves played
    pub fn moves(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.last_move().is_some())
            .count()
    }

    pub fn grid(&self) -> Grid {
        Grid::decode(&self.final_grid)
    }
}

/// Result of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub config: MatchConfig,
    pub x_wins: usize,
    pub o_wins: usize,
    pub squashed: usize,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    fn new(config: MatchConfig) -> Self {
        Self {
            config,
            x_wins: 0,
            o_wins: 0,
            squashed: 0,
            games: Vec::new(),
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.winner {
            Some(Token::X) => self.x_wins += 1,
            Some(_) => self.o_wins += 1,
            None => self.squashed += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> usize {
        self.games.len()
    }

    pub fn wins(&self, token: Token) -> usize {
        match token {
            Token::X => self.x_wins,
            Token::O => self.o_wins,
            Token::Empty => 0,
        }
    }

    /// Save result to a pretty-printed JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(BufReader::new(file))?;
        Ok(result)
    }
}

/// Plays a match between two strategies through one [`GameEngine`].
///
/// The first game is opened with `start`, later games with
/// `continue_playing`, and the engine is stopped when the match ends.
pub struct Arena<'a> {
    config: MatchConfig,
    search: &'a MinimaxSearch,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl<'a> Arena<'a> {
    pub fn new(config: MatchConfig, search: &'a MinimaxSearch) -> Self {
        Self {
            config,
            search,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the arena
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every game of the match.
    ///
    /// # Errors
    ///
    /// Fails if the configured first player is not X or O, or if an observer
    /// fails.
    #[instrument(
        skip(self),
        fields(x = %self.config.x, o = %self.config.o, games = self.config.games)
    )]
    pub fn run(&mut self) -> Result<MatchResult> {
        self.config.first_player.require_player()?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let x_player = Strategy::new(self.search, self.config.x);
        let o_player = Strategy::new(self.search, self.config.o);
        let mut engine = GameEngine::new(TracingListener::new(EventLog::new()));

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        let mut result = MatchResult::new(self.config.clone());
        for game_num in 0..self.config.games {
            let first_player = self.config.first_player_for(game_num);
            if engine.state() == EngineState::Init {
                engine.start(first_player)?;
            } else {
                engine.continue_playing(first_player)?;
            }

            while engine.state() == EngineState::Playing {
                let Some(turn) = engine.turn() else { break };
                let player = if turn == Token::X { &x_player } else { &o_player };
                let Some(pos) = player.choose_move(&engine.grid(), turn, &mut rng)? else {
                    break;
                };
                engine.play(pos.row, pos.col)?;
            }

            let events = engine.listener_mut().inner_mut().take();
            let winner = events.iter().rev().find_map(|event| match event {
                Event::GameOver {
                    outcome: Outcome::Winner { .. },
                    last_move,
                } => Some(last_move.turn),
                _ => None,
            });
            let game = GameRecord {
                game_num,
                first_player,
                winner,
                final_grid: engine.grid().encode(),
                events,
            };
            debug!(game_num, winner = ?game.winner, grid = %game.final_grid, "game finished");

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &game)?;
            }
            result.record(game);
        }

        if engine.state() != EngineState::Init {
            engine.stop()?;
        }

        info!(
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            squashed = result.squashed,
            "match finished"
        );
        for observer in &mut self.observers {
            observer.on_match_end(&result)?;
        }
        Ok(result)
    }
}
