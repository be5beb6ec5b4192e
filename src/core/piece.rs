//! Piece module - tetromino shape matrices and the active piece
//!
//! Shapes are small binary matrices (at most 4x4) stored as one bitmask per
//! row for cache-friendly, zero-allocation handling. Rotation is the naive
//! matrix rotation (transpose of the row-reversed matrix); no wall kicks,
//! validity is checked by the model, not here.

use crate::types::{Color, ShapeKind, GRID_WIDTH};

/// Binary occupancy matrix of a tetromino, `rows` x `cols`, each <= 4.
///
/// Bit `c` of `bits[r]` is set when cell (row r, col c) is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [u8; 4],
}

impl ShapeMatrix {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) is occupied. Out-of-range cells are empty.
    #[inline(always)]
    pub fn is_set(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && (self.bits[row as usize] >> col) & 1 == 1
    }

    /// Iterate over occupied (row, col) cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_set(r, c))
    }

    /// The matrix rotated 90 degrees clockwise.
    ///
    /// Equivalent to reversing the rows and transposing: the cell at
    /// (r, c) moves to (c, rows - 1 - r), and the dimensions swap.
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            bits: [0; 4],
        };
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.is_set(r, c) {
                    out.bits[c as usize] |= 1 << (self.rows - 1 - r);
                }
            }
        }
        out
    }

    /// Build a matrix from explicit rows (nonzero = occupied), for tests
    /// and spawn tables. Panics on more than 4 rows/cols or ragged input.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= 4);
        let cols = rows[0].len();
        assert!(cols >= 1 && cols <= 4);

        let mut bits = [0u8; 4];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "all rows must have equal width");
            for (c, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    bits[r] |= 1 << c;
                }
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }
}

impl ShapeKind {
    /// Spawn orientation of this tetromino
    pub fn base_matrix(self) -> ShapeMatrix {
        match self {
            ShapeKind::I => ShapeMatrix {
                rows: 1,
                cols: 4,
                bits: [0b1111, 0, 0, 0],
            },
            ShapeKind::O => ShapeMatrix {
                rows: 2,
                cols: 2,
                bits: [0b11, 0b11, 0, 0],
            },
            ShapeKind::T => ShapeMatrix {
                rows: 2,
                cols: 3,
                bits: [0b010, 0b111, 0, 0],
            },
            ShapeKind::L => ShapeMatrix {
                rows: 2,
                cols: 3,
                bits: [0b001, 0b111, 0, 0],
            },
            ShapeKind::J => ShapeMatrix {
                rows: 2,
                cols: 3,
                bits: [0b100, 0b111, 0, 0],
            },
            ShapeKind::S => ShapeMatrix {
                rows: 2,
                cols: 3,
                bits: [0b110, 0b011, 0, 0],
            },
            ShapeKind::Z => ShapeMatrix {
                rows: 2,
                cols: 3,
                bits: [0b011, 0b110, 0, 0],
            },
        }
    }
}

/// The falling piece: shape matrix, top-left grid anchor, color identity.
///
/// The color is fixed at creation and uncorrelated with the shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
    pub color: Color,
}

impl Piece {
    /// Create a piece horizontally centered at the top of the grid:
    /// `x = W/2 - shape_width/2` (integer division), `y = 0`.
    pub fn spawn(kind: ShapeKind, color: Color) -> Self {
        let shape = kind.base_matrix();
        Self {
            shape,
            x: (GRID_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
            color,
        }
    }

    /// Rotate the shape 90 degrees clockwise in place. Position is untouched
    /// and no validity check happens here; the model reverts bad rotations.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }
}
