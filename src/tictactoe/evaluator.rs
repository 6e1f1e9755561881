//! Grid classification: valid or not, and if valid, whether the game is over

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Grid, Token, WINNING_LINES, WinningLine};

/// Why a grid cannot arise from alternating play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// One player has two or more tokens more than the other
    TooManyMovesAhead,
    /// Both players fill a winning line
    TwoWinners,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::TooManyMovesAhead => write!(f, "too many moves ahead"),
            InvalidReason::TwoWinners => write!(f, "two winners"),
        }
    }
}

/// How a finished game ended, seen from the last mover
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum GameOver {
    /// The last mover fills the listed lines
    Winner(Vec<WinningLine>),
    /// The other player fills the listed lines
    Loser(Vec<WinningLine>),
    /// Full grid, no winning line
    Squashed,
}

/// Result of [`Evaluator::analyze`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// The game continues
    Ok,
    GameOver(GameOver),
    Invalid { reason: InvalidReason },
}

impl Evaluation {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Evaluation::GameOver(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Evaluation::Invalid { .. })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Ok => write!(f, "in progress"),
            Evaluation::GameOver(GameOver::Winner(lines)) => {
                write!(f, "won on {} line(s)", lines.len())
            }
            Evaluation::GameOver(GameOver::Loser(lines)) => {
                write!(f, "lost on {} line(s)", lines.len())
            }
            Evaluation::GameOver(GameOver::Squashed) => write!(f, "squashed"),
            Evaluation::Invalid { reason } => write!(f, "invalid ({reason})"),
        }
    }
}

/// The single place that decides whether and how a game is over.
///
/// Both the engine and the minimax search classify grids through here.
pub struct Evaluator;

impl Evaluator {
    /// Classify `grid` assuming `last_mover` placed the most recent token.
    ///
    /// Steps, in order: reject grids where one player is two or more moves
    /// ahead, collect every filled line per player, reject grids with two
    /// winners, then report a win for `last_mover`, a loss to the other
    /// player, a squashed (full) grid, or a game in progress.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotAPlayer`] if `last_mover` is [`Token::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xo::tictactoe::{Evaluation, Evaluator, GameOver, Grid, Token};
    ///
    /// let grid = Grid::decode("xxxoo");
    /// let result = Evaluator::analyze(&grid, Token::X)?;
    /// assert!(matches!(result, Evaluation::GameOver(GameOver::Winner(_))));
    /// # Ok::<(), xo::Error>(())
    /// ```
    pub fn analyze(grid: &Grid, last_mover: Token) -> crate::Result<Evaluation> {
        let last_mover = last_mover.require_player()?;

        if Self::moves_ahead(grid) > 1 {
            return Ok(Evaluation::Invalid {
                reason: InvalidReason::TooManyMovesAhead,
            });
        }

        let mut x_lines = Vec::new();
        let mut o_lines = Vec::new();
        for line in &WINNING_LINES {
            match line.occupant(grid) {
                Some(Token::X) => x_lines.push(*line),
                Some(Token::O) => o_lines.push(*line),
                _ => {}
            }
        }

        if !x_lines.is_empty() && !o_lines.is_empty() {
            return Ok(Evaluation::Invalid {
                reason: InvalidReason::TwoWinners,
            });
        }

        let (mine, theirs) = match last_mover {
            Token::X => (x_lines, o_lines),
            _ => (o_lines, x_lines),
        };

        let evaluation = if !mine.is_empty() {
            Evaluation::GameOver(GameOver::Winner(mine))
        } else if !theirs.is_empty() {
            Evaluation::GameOver(GameOver::Loser(theirs))
        } else if grid.is_full() {
            Evaluation::GameOver(GameOver::Squashed)
        } else {
            Evaluation::Ok
        };

        Ok(evaluation)
    }

    /// Absolute difference between the X and O counts
    pub fn moves_ahead(grid: &Grid) -> usize {
        grid.count(Token::X).abs_diff(grid.count(Token::O))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{LineKind, Position};

    #[test]
    fn test_empty_grid_is_in_progress() {
        assert_eq!(
            Evaluator::analyze(&Grid::new(), Token::X).unwrap(),
            Evaluation::Ok
        );
        assert_eq!(
            Evaluator::analyze(&Grid::new(), Token::O).unwrap(),
            Evaluation::Ok
        );
    }

    #[test]
    fn test_rejects_empty_last_mover() {
        let err = Evaluator::analyze(&Grid::new(), Token::Empty).unwrap_err();
        assert!(matches!(err, crate::Error::NotAPlayer { .. }));
    }

    #[test]
    fn test_too_many_moves_ahead() {
        let grid = Grid::decode("xx");
        assert_eq!(
            Evaluator::analyze(&grid, Token::X).unwrap(),
            Evaluation::Invalid {
                reason: InvalidReason::TooManyMovesAhead
            }
        );
        assert_eq!(Evaluator::moves_ahead(&Grid::decode("ooo")), 3);
    }

    #[test]
    fn test_two_winners() {
        let grid = Grid::decode("xxxooo");
        assert_eq!(
            Evaluator::analyze(&grid, Token::O).unwrap(),
            Evaluation::Invalid {
                reason: InvalidReason::TwoWinners
            }
        );
    }

    #[test]
    fn test_winner_and_loser_perspectives() {
        let grid = Grid::decode("xxxoo");
        let expected_line = WinningLine {
            kind: LineKind::Row,
            index: 1,
            positions: [
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
            ],
        };
        assert_eq!(
            Evaluator::analyze(&grid, Token::X).unwrap(),
            Evaluation::GameOver(GameOver::Winner(vec![expected_line]))
        );
        assert_eq!(
            Evaluator::analyze(&grid, Token::O).unwrap(),
            Evaluation::GameOver(GameOver::Loser(vec![expected_line]))
        );
    }

    #[test]
    fn test_double_line_win_reports_both_lines() {
        // x o x
        // o x o
        // x o x
        let grid = Grid::decode("xoxoxoxox");
        let Evaluation::GameOver(GameOver::Winner(lines)) =
            Evaluator::analyze(&grid, Token::X).unwrap()
        else {
            panic!("expected a win for X");
        };
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.kind == LineKind::Diagonal));
        assert_eq!(lines[0].index, 1);
        assert_eq!(lines[1].index, 2);
    }

    #[test]
    fn test_squashed() {
        // x o x
        // x o o
        // o x x
        let grid = Grid::decode("xoxxooox");
        assert_eq!(Evaluator::analyze(&grid, Token::O).unwrap(), Evaluation::Ok);
        let grid = Grid::decode("xoxxoooxx");
        assert_eq!(
            Evaluator::analyze(&grid, Token::X).unwrap(),
            Evaluation::GameOver(GameOver::Squashed)
        );
    }
}
