//! Board module - the locked-cell grid
//!
//! A fixed 10x20 grid stored as a flat array for cache locality; dimensions
//! never change after creation. Cells hold the color identity of whichever
//! piece locked there. Coordinates are (x, y) with x in 0..10 left to right
//! and y in 0..20 top to bottom.

use arrayvec::ArrayVec;

use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

#[cfg(test)]
use crate::types::Color;

/// Total number of cells on the board
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y), `None` when out of bounds
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and empty.
    ///
    /// Negative coordinates count as occupied, so callers can treat
    /// `!is_free` uniformly as "collision" with no special casing.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Whether (x, y) is inside the grid and holds a locked cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether every cell of row `y` is non-empty
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and insert as many empty rows at the top,
    /// keeping the relative order of the surviving rows.
    ///
    /// Two-pointer compaction over the flat array, no allocation. Returns
    /// the cleared row indices in top-to-bottom order; at most 4 rows can
    /// fill on one lock since a piece spans at most 4 rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        // Scan from the bottom, copying surviving rows down over the gaps.
        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Whatever remains above the write cursor becomes fresh empty rows.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Immutable view of the flat cell array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill an entire row with one color. For tests.
    #[cfg(test)]
    pub fn fill_row(&mut self, y: usize, color: Color) {
        let start = y * GRID_WIDTH as usize;
        for cell in &mut self.cells[start..start + GRID_WIDTH as usize] {
            *cell = Some(color);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
