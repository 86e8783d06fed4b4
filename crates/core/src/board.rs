//! Board module - manages the game grid
//!
//! The board is a 13x20 grid where each cell holds a [`CellTag`]: `0` for empty,
//! `1..=7` for a committed block of that palette color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..12 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{CellTag, EMPTY, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices removed by one [`Board::clear_full_rows`] call, top to bottom
pub type ClearedRows = ArrayVec<u8, { GRID_HEIGHT as usize }>;

/// The game board - 13 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellTag; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellTag> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is blocked
    ///
    /// Anything outside the grid counts as blocked, so a single query covers
    /// both the bounds and the overlap rule.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        match self.get(x, y) {
            Some(tag) => tag != EMPTY,
            None => true,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Check if no empty cell remains anywhere
    ///
    /// Not consulted by the game-over path, which detects top-out at spawn.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != EMPTY)
    }

    /// Write `color` into every filled cell of `shape` anchored at (x, y)
    ///
    /// Placement must already be validated; cells falling outside the grid are skipped.
    pub fn commit(&mut self, shape: &Shape, x: i8, y: i8, color: CellTag) {
        for (dx, dy) in shape.filled_cells() {
            if let Some(idx) = Self::index(x + dx, y + dy) {
                self.cells[idx] = color;
            }
        }
    }

    /// Clear all full rows and return the row indices that were cleared (top to bottom)
    ///
    /// Full rows are detected in one scan before anything moves, then a
    /// two-pointer pass compacts the survivors downward in their original order
    /// and blanks the rows freed at the top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        for y in 0..GRID_HEIGHT as usize {
            if self.is_row_full(y) {
                cleared_rows.push(y as u8);
            }
        }
        if cleared_rows.is_empty() {
            return cleared_rows;
        }

        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if cleared_rows.contains(&(read_y as u8)) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                // copy_within handles overlap
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(EMPTY);

        cleared_rows
    }

    /// Borrow one row of cells
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[CellTag] {
        let width = GRID_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellTag]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellTag] {
        &self.cells
    }

    /// Copy the grid into a 2-D array (used by snapshots)
    pub fn write_grid(&self, out: &mut [[CellTag; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Create from a 2D vector of tags (for tests and fixtures)
    ///
    /// Panics if the dimensions do not match the grid.
    pub fn from_rows(rows: &[Vec<CellTag>]) -> Self {
        assert_eq!(rows.len(), GRID_HEIGHT as usize);
        assert!(rows.iter().all(|row| row.len() == GRID_WIDTH as usize));

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * GRID_WIDTH as usize;
            board.cells[start..start + GRID_WIDTH as usize].copy_from_slice(row);
        }
        board
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<CellTag>> {
        self.rows().map(<[CellTag]>::to_vec).collect()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: i8, y: i8, cell: CellTag) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a row with a tag (for tests)
    #[cfg(test)]
    pub(crate) fn fill_row(&mut self, y: usize, tag: CellTag) {
        let width = GRID_WIDTH as usize;
        self.cells[y * width..(y + 1) * width].fill(tag);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
