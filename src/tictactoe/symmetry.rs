//! D4 symmetry group operations for grid canonicalization

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CELLS, Grid, Position, Token};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Clockwise rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to reflect in the vertical axis before rotating
    pub reflection: bool,
}

impl D4Transform {
    pub const IDENTITY: D4Transform = D4Transform {
        rotation: 0,
        reflection: false,
    };

    /// All 8 transforms: id, r, r², r³, then reflect, r∘reflect, r²∘reflect, r³∘reflect
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [Self::IDENTITY; 8];
        for (i, transform) in transforms.iter_mut().enumerate() {
            transform.rotation = (i % 4) as u16 * 90;
            transform.reflection = i >= 4;
        }
        transforms
    }

    /// Where the cell at `pos` lands under this transform
    pub fn transform_position(&self, pos: Position) -> Position {
        let (mut row, mut col) = (pos.row, pos.col);

        if self.reflection {
            col = 4 - col;
        }

        for _ in 0..(self.rotation / 90) {
            (row, col) = (col, 4 - row);
        }

        Position::new(row, col)
    }

    /// Apply the transform to every cell of `grid`
    pub fn apply(&self, grid: &Grid) -> Grid {
        let mut cells = [Token::Empty; CELLS];
        for (pos, token) in grid.each() {
            if let Some(idx) = self.transform_position(pos).index() {
                cells[idx] = token;
            }
        }
        Grid::from_cells(cells)
    }

    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate is an involution for every rotation
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl fmt::Display for D4Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rotation, self.reflection) {
            (0, false) => write!(f, "identity"),
            (0, true) => write!(f, "reflect"),
            (r, false) => write!(f, "rotate {r}°"),
            (r, true) => write!(f, "reflect, rotate {r}°"),
        }
    }
}

/// Rotate 90° clockwise: cell (r, c) of the result is cell (4 - c, r) of `grid`.
///
/// ```text
///    0 | 1 | 2          6 | 3 | 0
///   ---+---+---        ---+---+---
///    3 | 4 | 5    =>    7 | 4 | 1
///   ---+---+---        ---+---+---
///    6 | 7 | 8          8 | 5 | 2
/// ```
pub fn rotate(grid: &Grid) -> Grid {
    D4Transform {
        rotation: 90,
        reflection: false,
    }
    .apply(grid)
}

/// Mirror in the vertical axis: cell (r, c) of the result is cell (r, 4 - c) of `grid`.
pub fn reflect(grid: &Grid) -> Grid {
    D4Transform {
        rotation: 0,
        reflection: true,
    }
    .apply(grid)
}

/// The 8 images of `grid`, counted with multiplicity, in [`D4Transform::all`] order
pub fn orbit(grid: &Grid) -> [Grid; 8] {
    D4Transform::all().map(|t| t.apply(grid))
}

/// Key of a grid's symmetry class: the smallest encoding in its orbit.
///
/// Equal keys mean equivalent grids. Kept apart from [`Grid`]'s own
/// `Eq`/`Hash`, which compare cells literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The representative grid of the class
    pub fn grid(&self) -> Grid {
        Grid::decode(&self.0)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Canonical form together with the transform that produces it
#[derive(Debug, Clone)]
pub struct CanonicalContext {
    pub key: CanonicalKey,
    pub transform: D4Transform,
}

impl CanonicalContext {
    pub fn grid(&self) -> Grid {
        self.key.grid()
    }

    /// Map a position on the original grid to the canonical grid
    pub fn map_to_canonical(&self, pos: Position) -> Position {
        self.transform.transform_position(pos)
    }

    /// Map a position on the canonical grid back to the original grid
    pub fn map_to_original(&self, pos: Position) -> Position {
        self.transform.inverse().transform_position(pos)
    }
}

/// Canonical form of `grid`, keeping the first transform (in [`D4Transform::all`]
/// order) that reaches the smallest encoding
pub fn canonical_context(grid: &Grid) -> CanonicalContext {
    let mut best_transform = D4Transform::IDENTITY;
    let mut best_encoding = grid.encode();

    for transform in D4Transform::all().into_iter().skip(1) {
        let encoding = transform.apply(grid).encode();
        if encoding < best_encoding {
            best_encoding = encoding;
            best_transform = transform;
        }
    }

    CanonicalContext {
        key: CanonicalKey(best_encoding),
        transform: best_transform,
    }
}

/// Smallest encoding among the orbit of `grid`
pub fn canonical(grid: &Grid) -> CanonicalKey {
    canonical_context(grid).key
}

/// Whether one grid is a rotation or reflection of the other
pub fn equivalent(a: &Grid, b: &Grid) -> bool {
    canonical(a) == canonical(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rotation() {
        let grid = Grid::decode("xoooxxoxo");
        assert_eq!(rotate(&grid).encode(), "ooxxxooxo");
    }

    #[test]
    fn test_rotation_index_table() {
        // each cell holds a distinct marker so we can follow it
        let grid = Grid::decode("x        ");
        assert_eq!(rotate(&grid).encode(), "  x      ");
        let grid = Grid::decode("      x  ");
        assert_eq!(rotate(&grid).encode(), "x        ");
    }

    #[test]
    fn test_single_reflection() {
        let grid = Grid::decode("xo  x o  ");
        assert_eq!(reflect(&grid).encode(), " ox x   o");
    }

    #[test]
    fn test_all_transforms_are_distinct() {
        let all = D4Transform::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(all[0], D4Transform::IDENTITY);
        assert!(all[4].reflection && all[4].rotation == 0);
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let grid = Grid::decode("xo x  o x");
        for t in D4Transform::all() {
            assert_eq!(t.inverse().apply(&t.apply(&grid)), grid);
        }
    }

    #[test]
    fn test_orbit_of_asymmetric_grid_has_eight_distinct_members() {
        let grid = Grid::decode("xo       ");
        let mut encodings: Vec<String> = orbit(&grid).iter().map(Grid::encode).collect();
        encodings.sort();
        encodings.dedup();
        assert_eq!(encodings.len(), 8);
    }

    #[test]
    fn test_canonical_context_maps_positions() {
        let grid = Grid::decode("        x");
        let ctx = canonical_context(&grid);
        assert_eq!(ctx.grid().encode(), "        x");
        let grid = Grid::decode("x        ");
        let ctx = canonical_context(&grid);
        assert_eq!(ctx.key.as_str(), "        x");
        let mapped = ctx.map_to_canonical(Position::new(1, 1));
        assert_eq!(ctx.grid().get(mapped).unwrap(), Token::X);
        assert_eq!(ctx.map_to_original(mapped), Position::new(1, 1));
    }

    #[test]
    fn test_equivalent_corners() {
        let corners = ["x        ", "  x      ", "      x  ", "        x"];
        for a in corners {
            for b in corners {
                assert!(equivalent(&Grid::decode(a), &Grid::decode(b)));
            }
        }
        assert!(!equivalent(
            &Grid::decode("x        "),
            &Grid::decode(" x       ")
        ));
    }
}
