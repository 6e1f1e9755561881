//! Symmetry-reduced minimax over the full tic-tac-toe game tree

use std::{collections::HashMap, sync::OnceLock};

use tracing::{info, instrument, trace};

use crate::{
    Error, Result,
    tictactoe::{CanonicalKey, Evaluation, Evaluator, GameOver, Grid, Position, Token, canonical},
};

/// Score of a won game, from the winner's side
pub const WIN: i32 = 1;
/// Score of a squashed game
pub const DRAW: i32 = 0;
/// Score of a lost game
pub const LOSS: i32 = -1;

/// Game values of every reachable position, one entry per symmetry class.
///
/// Built once by solving the tree rooted at the empty grid with X to move.
/// Scores are from X's side: X maximizes, O minimizes. Because X always
/// moves first here, the piece counts of a key determine who is to move.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    scores: HashMap<CanonicalKey, i32>,
}

impl ScoreTable {
    /// Solve the whole game tree.
    ///
    /// # Errors
    ///
    /// Only fails if the evaluator rejects a grid reached by alternating play,
    /// which would be a bug in the evaluator.
    #[instrument]
    pub fn build() -> Result<Self> {
        let mut table = ScoreTable {
            scores: HashMap::new(),
        };
        let root_score = table.solve(Grid::new(), Token::X)?;
        info!(
            classes = table.len(),
            root_score, "solved tic-tac-toe game tree"
        );
        Ok(table)
    }

    fn solve(&mut self, grid: Grid, mover: Token) -> Result<i32> {
        let key = canonical(&grid);
        if let Some(&score) = self.scores.get(&key) {
            return Ok(score);
        }

        let score = match Evaluator::analyze(&grid, Token::X)? {
            Evaluation::GameOver(GameOver::Winner(_)) => WIN,
            Evaluation::GameOver(GameOver::Loser(_)) => LOSS,
            Evaluation::GameOver(GameOver::Squashed) => DRAW,
            Evaluation::Invalid { reason } => {
                return Err(Error::IllegalGrid {
                    grid: grid.encode(),
                    reason,
                });
            }
            Evaluation::Ok => {
                let mut best = match mover {
                    Token::X => i32::MIN,
                    _ => i32::MAX,
                };
                for pos in grid.each_open() {
                    let child = grid.with_move(pos, mover)?;
                    let child_score = self.solve(child, mover.other())?;
                    best = match mover {
                        Token::X => best.max(child_score),
                        _ => best.min(child_score),
                    };
                }
                best
            }
        };

        self.scores.insert(key, score);
        Ok(score)
    }

    /// Number of solved symmetry classes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of `grid` from X's side, if its class was reached while solving
    pub fn score(&self, grid: &Grid) -> Option<i32> {
        self.scores.get(&canonical(grid)).copied()
    }

    /// Every solved class with its score
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, i32)> {
        self.scores.iter().map(|(key, &score)| (key, score))
    }
}

/// Answers "which moves are best from here" against a solved [`ScoreTable`].
///
/// Construct once and reuse; queries never modify the table.
///
/// # Examples
///
/// ```
/// use xo::ai::MinimaxSearch;
/// use xo::tictactoe::{Grid, Position, Token};
///
/// let search = MinimaxSearch::build()?;
/// let moves = search.moves(&Grid::decode("xx oo"), Token::X)?;
/// assert_eq!(moves, vec![Position::new(1, 3)]);
/// # Ok::<(), xo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    table: ScoreTable,
}

impl MinimaxSearch {
    pub fn new(table: ScoreTable) -> Self {
        Self { table }
    }

    /// Solve the game tree and wrap the result
    pub fn build() -> Result<Self> {
        Ok(Self::new(ScoreTable::build()?))
    }

    /// Process-wide search, solved on first use and reused afterwards
    pub fn shared() -> Result<&'static MinimaxSearch> {
        static SHARED: OnceLock<MinimaxSearch> = OnceLock::new();

        if let Some(search) = SHARED.get() {
            return Ok(search);
        }
        let search = Self::build()?;
        Ok(SHARED.get_or_init(|| search))
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Map (grid, turn) onto the X-moves-first tree the table was built from.
    ///
    /// Equal counts mean the mover should be X; otherwise the mover is O with
    /// X one token ahead. When the roles are swapped the grid is inverted.
    ///
    /// # Errors
    ///
    /// [`Error::NotAPlayer`] for an empty turn token, [`Error::InvalidTurn`]
    /// when `turn` is the side that is already ahead.
    pub fn normalize(grid: &Grid, turn: Token) -> Result<(Grid, Token)> {
        let turn = turn.require_player()?;
        let x_count = grid.count(Token::X);
        let o_count = grid.count(Token::O);

        let (mine, theirs) = match turn {
            Token::X => (x_count, o_count),
            _ => (o_count, x_count),
        };

        if mine > theirs {
            return Err(Error::InvalidTurn {
                grid: grid.encode(),
                turn,
                x_count,
                o_count,
            });
        }

        let normalized = match (turn, mine == theirs) {
            (Token::X, true) | (Token::O, false) => (*grid, turn),
            _ => (grid.inverted(), turn.other()),
        };
        Ok(normalized)
    }

    fn lookup(&self, grid: &Grid) -> Result<i32> {
        self.table
            .score(grid)
            .ok_or_else(|| Error::UnsolvedPosition {
                grid: grid.encode(),
            })
    }

    /// Classify the normalized grid from the side that just moved
    fn classify(grid: &Grid, turn: Token) -> Result<Evaluation> {
        match Evaluator::analyze(grid, turn.other())? {
            Evaluation::Invalid { reason } => Err(Error::IllegalGrid {
                grid: grid.encode(),
                reason,
            }),
            evaluation => Ok(evaluation),
        }
    }

    /// Every optimal move for `turn`, in row-major order.
    ///
    /// All moves tied for the best score are returned; the result is empty
    /// iff the position is already decided.
    ///
    /// # Errors
    ///
    /// Fails on an empty turn token, an impossible grid/turn combination, or
    /// a grid the evaluator rejects.
    pub fn moves(&self, grid: &Grid, turn: Token) -> Result<Vec<Position>> {
        let (grid, turn) = Self::normalize(grid, turn)?;
        if Self::classify(&grid, turn)?.is_game_over() {
            return Ok(Vec::new());
        }

        let best = self.lookup(&grid)?;
        let mut moves = Vec::new();
        for pos in grid.each_open() {
            let child = grid.with_move(pos, turn)?;
            if self.lookup(&child)? == best {
                moves.push(pos);
            }
        }

        trace!(grid = %grid.encode(), %turn, best, ?moves, "optimal moves");
        Ok(moves)
    }

    /// Value of the position for the player whose turn it is: 1 is a forced
    /// win, 0 a draw with best play, -1 a forced loss.
    pub fn score(&self, grid: &Grid, turn: Token) -> Result<i32> {
        let (grid, turn) = Self::normalize(grid, turn)?;
        let for_mover = match Self::classify(&grid, turn)? {
            // the side that just moved won, so the mover has lost
            Evaluation::GameOver(GameOver::Winner(_)) => return Ok(LOSS),
            Evaluation::GameOver(GameOver::Loser(_)) => return Ok(WIN),
            Evaluation::GameOver(GameOver::Squashed) => return Ok(DRAW),
            _ => self.lookup(&grid)?,
        };
        Ok(match turn {
            Token::X => for_mover,
            _ => -for_mover,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_entry_per_reachable_class() {
        let table = ScoreTable::build().unwrap();
        assert_eq!(table.len(), 765);
    }

    #[test]
    fn test_perfect_play_is_a_draw() {
        let table = ScoreTable::build().unwrap();
        assert_eq!(table.score(&Grid::new()), Some(DRAW));
    }

    #[test]
    fn test_normalize() {
        let grid = Grid::decode("x");
        let (normalized, turn) = MinimaxSearch::normalize(&grid, Token::O).unwrap();
        assert_eq!((normalized, turn), (grid, Token::O));

        let grid = Grid::decode("o");
        let (normalized, turn) = MinimaxSearch::normalize(&grid, Token::X).unwrap();
        assert_eq!(normalized.encode(), "x        ");
        assert_eq!(turn, Token::O);

        let (normalized, turn) = MinimaxSearch::normalize(&Grid::new(), Token::O).unwrap();
        assert_eq!((normalized, turn), (Grid::new(), Token::X));
    }

    #[test]
    fn test_normalize_rejects_side_that_is_ahead() {
        let err = MinimaxSearch::normalize(&Grid::decode("x"), Token::X).unwrap_err();
        assert!(matches!(err, Error::InvalidTurn { .. }));
        let err = MinimaxSearch::normalize(&Grid::decode("o"), Token::O).unwrap_err();
        assert!(matches!(err, Error::InvalidTurn { .. }));
        let err = MinimaxSearch::normalize(&Grid::new(), Token::Empty).unwrap_err();
        assert!(matches!(err, Error::NotAPlayer { .. }));
    }

    #[test]
    fn test_scores_from_mover_side() {
        let search = MinimaxSearch::build().unwrap();
        assert_eq!(search.score(&Grid::decode("xx oo"), Token::X).unwrap(), WIN);
        assert_eq!(
            search.score(&Grid::decode("xxxoo"), Token::O).unwrap(),
            LOSS
        );
        assert_eq!(search.score(&Grid::new(), Token::O).unwrap(), DRAW);
    }
}
