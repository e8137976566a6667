//! CanvasView: maps a `GameSnapshot` onto rectangle draw calls.
//!
//! This module is pure (no I/O). Cell pixel size is the surface size divided
//! by the grid dimensions; each occupied cell is filled and then outlined one
//! pixel short of its slot, which leaves a visible grid line between blocks.

use crate::core::{Board, GameSnapshot};
use crate::surface::{DrawSurface, PixelRect, Rgb, GREY, WHITE};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Rectangle renderer for the board and falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasView {
    fill: Rgb,
    stroke: Rgb,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            fill: WHITE,
            stroke: GREY,
        }
    }
}

impl CanvasView {
    /// Pixel size of one grid cell on a surface of `size`
    pub fn cell_size(size: (u32, u32)) -> (u32, u32) {
        (size.0 / BOARD_WIDTH as u32, size.1 / BOARD_HEIGHT as u32)
    }

    /// Rectangle drawn for grid cell `(x, y)`
    pub fn block_rect(cell: (u32, u32), x: u32, y: u32) -> PixelRect {
        PixelRect::new(
            cell.0 * x,
            cell.1 * y,
            cell.0.saturating_sub(1),
            cell.1.saturating_sub(1),
        )
    }

    /// Draw the whole frame: clear, settled blocks, then the falling piece.
    pub fn draw(&self, snap: &GameSnapshot, surface: &mut dyn DrawSurface) {
        let size = surface.size();
        surface.clear_rect(PixelRect::new(0, 0, size.0, size.1));

        let cell = Self::cell_size(size);

        for x in 0..BOARD_WIDTH as usize {
            for (y, row) in snap.board.iter().enumerate() {
                if row[x] != 0 {
                    self.draw_block(surface, cell, x as u32, y as u32);
                }
            }
        }

        for (x, y) in snap.active.cells() {
            if Board::in_bounds(x, y) {
                self.draw_block(surface, cell, x as u32, y as u32);
            }
        }
    }

    fn draw_block(&self, surface: &mut dyn DrawSurface, cell: (u32, u32), x: u32, y: u32) {
        let rect = Self::block_rect(cell, x, y);
        surface.fill_rect(rect, self.fill);
        surface.stroke_rect(rect, self.stroke);
    }
}
