//! Events emitted by the engine, one per action outcome

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Position, Token, WinningLine};

/// The move that triggered a `next_turn` or `game_over` event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    pub turn: Token,
    pub row: usize,
    pub col: usize,
}

impl LastMove {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Distinguishes a continued session from a fresh start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartKind {
    ContinuePlaying,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Winner { details: Vec<WinningLine> },
    Squashed,
}

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidMove {
    OutOfBounds,
    Occupied,
}

/// The complete engine event vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Event {
    GameStarted {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<StartKind>,
    },
    GameStopped,
    NextTurn {
        last_move: LastMove,
    },
    GameOver {
        #[serde(flatten)]
        outcome: Outcome,
        last_move: LastMove,
    },
    InvalidMove {
        #[serde(rename = "type")]
        reason: InvalidMove,
    },
}

impl Event {
    /// The event's name in the vocabulary, e.g. `game_over`
    pub fn name(&self) -> &'static str {
        match self {
            Event::GameStarted { .. } => "game_started",
            Event::GameStopped => "game_stopped",
            Event::NextTurn { .. } => "next_turn",
            Event::GameOver { .. } => "game_over",
            Event::InvalidMove { .. } => "invalid_move",
        }
    }

    /// The move carried by `next_turn` and `game_over` events
    pub fn last_move(&self) -> Option<&LastMove> {
        match self {
            Event::NextTurn { last_move } | Event::GameOver { last_move, .. } => Some(last_move),
            _ => None,
        }
    }
}
