//! Subcommands of the `xo` binary

pub mod analyze;
pub mod moves;
pub mod play;
pub mod solve;
pub mod symmetry;
