//! Tic-tac-toe adjudication engine with a symmetry-reduced minimax opponent
//!
//! This crate provides:
//! - Grid representation, winning lines and position evaluation
//! - D4 symmetry canonicalization of grids
//! - A minimax search that solves the game once and answers best-move queries
//! - A state-machine game engine that reports outcomes as events
//! - A self-play arena and the `xo` command-line tool

pub mod adapters;
pub mod ai;
pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use ai::{Difficulty, MinimaxSearch, Strategy};
pub use engine::{Event, GameEngine};
pub use error::{Error, Result};
pub use tictactoe::{Evaluation, Evaluator, Grid, Position, Token};
