//! Board module - manages the settled-block grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was frozen there. Coordinates are (x, y) with x in 0..10 (left to
//! right) and y in 0..20 (top to bottom).
//!
//! Only two operations mutate a board during play: [`Board::freeze`] copies a
//! piece's cells in, and [`Board::clear_lines`] compacts full rows away.

use crate::pieces::PieceMatrix;
use crate::types::{cell_id, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 20 rows of 10 cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True iff `(x, y)` addresses a cell of the grid
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check if position is inside the grid and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) => row.iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) => row.iter().all(|cell| cell.is_none()),
            None => false,
        }
    }

    /// Remove row `y`: every row above moves down by one and row 0 is emptied.
    fn collapse_row(&mut self, y: usize) {
        for yy in (1..=y).rev() {
            self.rows[yy] = self.rows[yy - 1];
        }
        self.rows[0] = [None; WIDTH];
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a collapse the same row index is examined
    /// again, since the row that slid into it may be full as well.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Copy every filled cell of `matrix`, with its box origin at `(x, y)`, into
    /// the board.
    ///
    /// Callers validate the placement first; cells that would land outside the
    /// grid are skipped rather than written.
    pub fn freeze(&mut self, matrix: &PieceMatrix, x: i8, y: i8) {
        for (dx, dy, kind) in matrix.filled() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Fill a whole row with `kind` except for the listed columns.
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Write numeric cell ids (0 empty, 1..=7 piece id) into `out`
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = cell_id(*s);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [[None; WIDTH]; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
