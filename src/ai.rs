//! Automated opponent
//!
//! The minimax search solves the game once and answers best-move queries;
//! strategies pick among its answers according to a difficulty level.

pub mod minimax;
pub mod strategy;

pub use minimax::{DRAW, LOSS, MinimaxSearch, ScoreTable, WIN};
pub use strategy::{Difficulty, INTERMEDIATE_SMART_PROBABILITY, Strategy};
