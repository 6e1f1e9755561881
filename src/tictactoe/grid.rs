//! Grid representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of rows on the grid
pub const ROWS: usize = 3;
/// Number of columns on the grid
pub const COLS: usize = 3;
/// Number of cells on the grid
pub const CELLS: usize = ROWS * COLS;

/// A token occupying a cell of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    X,
    O,
    #[default]
    Empty,
}

impl Token {
    /// Whether the token belongs to a player (X or O)
    pub fn is_player(self) -> bool {
        matches!(self, Token::X | Token::O)
    }

    /// The opposing player's token. Empty maps to itself.
    pub fn other(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
            Token::Empty => Token::Empty,
        }
    }

    /// Character used by the grid encoding
    pub fn to_char(self) -> char {
        match self {
            Token::X => 'x',
            Token::O => 'o',
            Token::Empty => ' ',
        }
    }

    /// Decode a single encoding character. Anything but 'x'/'o' is Empty.
    pub fn from_char(c: char) -> Token {
        match c {
            'x' => Token::X,
            'o' => Token::O,
            _ => Token::Empty,
        }
    }

    /// Ensure the token is a player token
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotAPlayer`] for [`Token::Empty`].
    pub fn require_player(self) -> crate::Result<Token> {
        if self.is_player() {
            Ok(self)
        } else {
            Err(crate::Error::NotAPlayer { token: self })
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::X => write!(f, "X"),
            Token::O => write!(f, "O"),
            Token::Empty => write!(f, "empty"),
        }
    }
}

impl FromStr for Token {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Token::X),
            "o" => Ok(Token::O),
            _ => Err(crate::Error::ParseToken {
                input: s.to_string(),
            }),
        }
    }
}

/// A (row, column) position, both 1-based.
///
/// Positions order in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Whether both coordinates lie on the grid
    pub fn contains(&self) -> bool {
        (1..=ROWS).contains(&self.row) && (1..=COLS).contains(&self.col)
    }

    /// Row-major cell index (0-8), if the position is on the grid
    ///
    /// ```text
    ///    c  1   2   3
    ///  r
    ///  1    0 | 1 | 2
    ///      ---+---+---
    ///  2    3 | 4 | 5
    ///      ---+---+---
    ///  3    6 | 7 | 8
    /// ```
    pub fn index(&self) -> Option<usize> {
        self.contains()
            .then(|| COLS * (self.row - 1) + (self.col - 1))
    }

    /// Inverse of [`Position::index`]; `None` when `idx` is not below [`CELLS`]
    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < CELLS).then(|| Position::new(idx / COLS + 1, idx % COLS + 1))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 tic-tac-toe grid in row-major order.
///
/// `Grid` is `Copy`, so every value handed out is already a private copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Token; CELLS],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Grid {
            cells: [Token::Empty; CELLS],
        }
    }

    pub fn from_cells(cells: [Token; CELLS]) -> Self {
        Grid { cells }
    }

    pub fn cells(&self) -> &[Token; CELLS] {
        &self.cells
    }

    /// Whether `pos` lies on the grid
    pub fn contains(pos: Position) -> bool {
        pos.contains()
    }

    fn index_of(pos: Position) -> crate::Result<usize> {
        pos.index().ok_or(crate::Error::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })
    }

    /// Read the token at `pos`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `pos` is off the grid.
    pub fn get(&self, pos: Position) -> crate::Result<Token> {
        Ok(self.cells[Self::index_of(pos)?])
    }

    /// Write `token` at `pos`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `pos` is off the grid.
    pub fn set(&mut self, pos: Position, token: Token) -> crate::Result<()> {
        self.cells[Self::index_of(pos)?] = token;
        Ok(())
    }

    /// Copy of the grid with `token` placed at `pos`
    pub fn with_move(&self, pos: Position, token: Token) -> crate::Result<Grid> {
        let mut next = *self;
        next.set(pos, token)?;
        Ok(next)
    }

    /// Whether the cell at `pos` holds no player token
    pub fn is_open(&self, pos: Position) -> crate::Result<bool> {
        Ok(!self.get(pos)?.is_player())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Token::Empty);
    }

    /// True iff no cell holds a player token
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|t| !t.is_player())
    }

    /// True iff every cell holds a player token
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|t| t.is_player())
    }

    /// Number of cells holding `token`
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().filter(|&&t| t == token).count()
    }

    /// Every cell as (position, token), in row-major order
    pub fn each(&self) -> impl Iterator<Item = (Position, Token)> + Clone + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, &token)| Some((Position::from_index(idx)?, token)))
    }

    /// Open cells only, in row-major order
    pub fn each_open(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        self.each()
            .filter(|(_, token)| !token.is_player())
            .map(|(pos, _)| pos)
    }

    /// Copy of the grid with X and O swapped
    pub fn inverted(&self) -> Grid {
        Grid {
            cells: self.cells.map(Token::other),
        }
    }

    /// 9-character encoding: 'x', 'o' and ' ' in row-major order
    pub fn encode(&self) -> String {
        self.cells.iter().map(|t| t.to_char()).collect()
    }

    /// Decode an encoding, padding with spaces or truncating to 9 characters.
    ///
    /// Never fails: any character other than 'x' or 'o' is Empty.
    pub fn decode(s: &str) -> Grid {
        let mut cells = [Token::Empty; CELLS];
        for (cell, c) in cells.iter_mut().zip(s.chars()) {
            *cell = Token::from_char(c);
        }
        Grid { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Grid::decode(s))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.encode())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(COLS).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = cells.iter().map(|t| format!(" {} ", t.to_char())).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert!(!grid.is_full());
        assert_eq!(grid.each().count(), 9);
        assert!(grid.each().all(|(_, t)| t == Token::Empty));
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = Grid::new();
        grid.set(Position::new(2, 3), Token::X).unwrap();
        assert_eq!(grid.get(Position::new(2, 3)).unwrap(), Token::X);
        assert_eq!(grid.cells()[5], Token::X);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new();
        for pos in [(0, 1), (1, 0), (4, 1), (1, 4)] {
            let pos = Position::from(pos);
            assert!(!Grid::contains(pos));
            let err = grid.get(pos).unwrap_err();
            assert!(err.to_string().contains("off the grid"));
            assert!(grid.set(pos, Token::O).is_err());
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_each_is_row_major_and_restartable() {
        let grid = Grid::decode("xo");
        let cells = grid.each();
        let first: Vec<_> = cells.clone().take(3).collect();
        assert_eq!(
            first,
            vec![
                (Position::new(1, 1), Token::X),
                (Position::new(1, 2), Token::O),
                (Position::new(1, 3), Token::Empty),
            ]
        );
        assert_eq!(cells.count(), 9);
        assert_eq!(grid.each_open().count(), 7);
        assert_eq!(grid.each_open().next(), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_full_and_clear() {
        let mut grid = Grid::decode("xoxxooxxo");
        assert!(grid.is_full());
        assert_eq!(grid.each_open().count(), 0);
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_decode_pads_and_truncates() {
        assert_eq!(Grid::decode("x").encode(), "x        ");
        assert_eq!(Grid::decode("xoxoxoxoxoxo").encode(), "xoxoxoxox");
        assert_eq!(Grid::decode("X.o_-o").encode(), "  o  o   ");
        assert_eq!(Grid::decode("").encode(), " ".repeat(9));
    }

    #[test]
    fn test_inverted_swaps_players() {
        let grid = Grid::decode("xx oo");
        assert_eq!(grid.inverted().encode(), "oo xx    ");
        assert_eq!(grid.inverted().inverted(), grid);
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!("x".parse::<Token>().unwrap(), Token::X);
        assert_eq!(" O ".parse::<Token>().unwrap(), Token::O);
        assert!("e".parse::<Token>().is_err());
        assert_eq!(Token::Empty.other(), Token::Empty);
        assert!(Token::Empty.require_player().is_err());
    }

    #[test]
    fn test_display() {
        let grid = Grid::decode("xo      x");
        let expected = " x | o |   \n---+---+---\n   |   |   \n---+---+---\n   |   | x ";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_position_index_roundtrip_and_order() {
        for idx in 0..CELLS {
            assert_eq!(Position::from_index(idx).and_then(|p| p.index()), Some(idx));
        }
        assert!(Position::new(1, 3) < Position::new(2, 1));
        assert_eq!(Position::new(0, 2).index(), None);
    }

    #[test]
    fn test_from_index_rejects_off_grid_indices() {
        assert_eq!(Position::from_index(8), Some(Position::new(3, 3)));
        assert_eq!(Position::from_index(CELLS), None);
        assert_eq!(Position::from_index(12), None);
        assert_eq!(Grid::new().each().count(), CELLS);
    }
}
