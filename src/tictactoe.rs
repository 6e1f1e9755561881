//! Tic-Tac-Toe grid, adjudication and symmetry

pub mod evaluator;
pub mod grid;
pub mod lines;
pub mod symmetry;

pub use evaluator::{Evaluation, Evaluator, GameOver, InvalidReason};
pub use grid::{CELLS, COLS, Grid, Position, ROWS, Token};
pub use lines::{LineKind, WINNING_LINES, WinningLine};
pub use symmetry::{
    CanonicalContext, CanonicalKey, D4Transform, canonical, canonical_context, equivalent, orbit,
    reflect, rotate,
};
