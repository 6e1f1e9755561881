//! Winning line descriptors for the 3x3 grid

use serde::{Deserialize, Serialize};

use super::{Grid, Position, Token};

/// Where on the grid a line runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// One of the 8 lines that win the game when a player fills it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    #[serde(rename = "where")]
    pub kind: LineKind,
    /// 1-based index within its kind; diagonal 1 runs from (1, 1), diagonal 2 from (1, 3)
    pub index: usize,
    pub positions: [Position; 3],
}

const fn line(kind: LineKind, index: usize, cells: [(usize, usize); 3]) -> WinningLine {
    WinningLine {
        kind,
        index,
        positions: [
            Position::new(cells[0].0, cells[0].1),
            Position::new(cells[1].0, cells[1].1),
            Position::new(cells[2].0, cells[2].1),
        ],
    }
}

/// Rows, then columns, then diagonals
pub const WINNING_LINES: [WinningLine; 8] = [
    line(LineKind::Row, 1, [(1, 1), (1, 2), (1, 3)]),
    line(LineKind::Row, 2, [(2, 1), (2, 2), (2, 3)]),
    line(LineKind::Row, 3, [(3, 1), (3, 2), (3, 3)]),
    line(LineKind::Column, 1, [(1, 1), (2, 1), (3, 1)]),
    line(LineKind::Column, 2, [(1, 2), (2, 2), (3, 2)]),
    line(LineKind::Column, 3, [(1, 3), (2, 3), (3, 3)]),
    line(LineKind::Diagonal, 1, [(1, 1), (2, 2), (3, 3)]),
    line(LineKind::Diagonal, 2, [(1, 3), (2, 2), (3, 1)]),
];

impl WinningLine {
    /// The player token filling all three cells, if any
    pub fn occupant(&self, grid: &Grid) -> Option<Token> {
        let cells = grid.cells();
        let tokens = self.positions.map(|pos| pos.index().map(|idx| cells[idx]));
        match tokens {
            [Some(a), Some(b), Some(c)] if a.is_player() && a == b && b == c => Some(a),
            _ => None,
        }
    }
}
