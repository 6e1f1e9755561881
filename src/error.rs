//! Error types for the xo crate

use thiserror::Error;

use crate::{
    engine::{Action, EngineState},
    tictactoe::{InvalidReason, Token},
};

/// Main error type for the xo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is off the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("{token} is not a player token (expected X or O)")]
    NotAPlayer { token: Token },

    #[error("cannot {action} while the engine is {state}")]
    IllegalState { action: Action, state: EngineState },

    #[error("grid '{grid}' cannot have {turn} to move: X={x_count}, O={o_count}")]
    InvalidTurn {
        grid: String,
        turn: Token,
        x_count: usize,
        o_count: usize,
    },

    #[error("grid '{grid}' cannot arise from legal play: {reason}")]
    IllegalGrid { grid: String, reason: InvalidReason },

    #[error("grid '{grid}' has no solved score")]
    UnsolvedPosition { grid: String },

    #[error("engine evaluated '{grid}' as {evaluation} after a legal move")]
    UnexpectedEvaluation { grid: String, evaluation: String },

    #[error("invalid token '{input}' (expected 'x' or 'o')")]
    ParseToken { input: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
