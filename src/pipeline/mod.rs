//! Self-play pipeline
//!
//! This module provides:
//! - An [`Arena`] that pits two [`crate::ai::Strategy`] players against each
//!   other through the game engine
//! - Match configuration and results that round-trip through JSON
//! - Observers that watch a match as it is played

pub mod arena;
pub mod observers;

pub use arena::{Arena, GameRecord, MatchConfig, MatchResult};
pub use observers::{ProgressObserver, TranscriptObserver};

pub use crate::ports::MatchObserver;
