//! Difficulty levels layered on top of the minimax search

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::MinimaxSearch;
use crate::{
    Error, Result,
    tictactoe::{Grid, Position, Token},
};

/// Probability that an intermediate player sticks to optimal moves
pub const INTERMEDIATE_SMART_PROBABILITY: f64 = 0.75;

/// How hard an automated player tries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Any open cell
    Novice,
    /// Optimal most of the time, occasionally not
    Intermediate,
    /// Always optimal
    #[default]
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Novice,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Novice => "novice",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == input)
            .ok_or_else(|| Error::ParseDifficulty {
                input: s.to_string(),
                expected: Difficulty::ALL.map(|d| d.as_str()).join(", "),
            })
    }
}

/// A move-suggestion service for one difficulty level
#[derive(Debug, Clone, Copy)]
pub struct Strategy<'a> {
    search: &'a MinimaxSearch,
    difficulty: Difficulty,
}

impl<'a> Strategy<'a> {
    pub fn new(search: &'a MinimaxSearch, difficulty: Difficulty) -> Self {
        Self { search, difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Candidate moves for `turn`, in row-major order.
    ///
    /// Empty iff the position is decided.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MinimaxSearch::moves`].
    pub fn suggest_moves<R: Rng>(
        &self,
        grid: &Grid,
        turn: Token,
        rng: &mut R,
    ) -> Result<Vec<Position>> {
        let smart = self.search.moves(grid, turn)?;
        if smart.is_empty() {
            return Ok(smart);
        }

        let moves = match self.difficulty {
            Difficulty::Expert => smart,
            Difficulty::Novice => grid.each_open().collect(),
            Difficulty::Intermediate => {
                let dumb: Vec<Position> = grid
                    .each_open()
                    .filter(|pos| !smart.contains(pos))
                    .collect();
                if dumb.is_empty() || rng.random_bool(INTERMEDIATE_SMART_PROBABILITY) {
                    smart
                } else {
                    dumb
                }
            }
        };
        Ok(moves)
    }

    /// One move drawn uniformly from [`Strategy::suggest_moves`]
    pub fn choose_move<R: Rng>(
        &self,
        grid: &Grid,
        turn: Token,
        rng: &mut R,
    ) -> Result<Option<Position>> {
        let moves = self.suggest_moves(grid, turn, rng)?;
        Ok(moves.choose(rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("Expert".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!(" novice".parse::<Difficulty>().unwrap(), Difficulty::Novice);
        let err = "grandmaster".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("novice, intermediate, expert"));
    }

    #[test]
    fn test_expert_only_suggests_optimal_moves() {
        let search = MinimaxSearch::build().unwrap();
        let strategy = Strategy::new(&search, Difficulty::Expert);
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::decode("x   o x");
        for _ in 0..20 {
            let mv = strategy.choose_move(&grid, Token::O, &mut rng).unwrap();
            assert_eq!(mv, Some(Position::new(2, 1)));
        }
    }

    #[test]
    fn test_novice_suggests_every_open_cell() {
        let search = MinimaxSearch::build().unwrap();
        let strategy = Strategy::new(&search, Difficulty::Novice);
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::decode("x   o x");
        let moves = strategy.suggest_moves(&grid, Token::O, &mut rng).unwrap();
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn test_intermediate_mixes_smart_and_dumb_moves() {
        let search = MinimaxSearch::build().unwrap();
        let strategy = Strategy::new(&search, Difficulty::Intermediate);
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::decode("x   o x");
        let mut smart = 0;
        let mut dumb = 0;
        for _ in 0..400 {
            let moves = strategy.suggest_moves(&grid, Token::O, &mut rng).unwrap();
            if moves == vec![Position::new(2, 1)] {
                smart += 1;
            } else {
                assert!(!moves.contains(&Position::new(2, 1)));
                dumb += 1;
            }
        }
        assert!(smart > dumb);
        assert!(dumb > 0);
    }

    #[test]
    fn test_decided_positions_have_no_moves() {
        let search = MinimaxSearch::build().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in Difficulty::ALL {
            let strategy = Strategy::new(&search, difficulty);
            let mv = strategy
                .choose_move(&Grid::decode("xxxoo"), Token::O, &mut rng)
                .unwrap();
            assert_eq!(mv, None);
        }
    }
}
