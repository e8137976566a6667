//! TerminalRenderer: flushes a pixel framebuffer to a real terminal.
//!
//! Two vertically stacked pixels share one terminal cell: the cell prints an
//! upper half block with the top pixel as foreground and the bottom pixel as
//! background. Frames after the first are sent as runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::Rgb;
use crate::fb::FrameBuffer;

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left cell that centers a framebuffer in this viewport
    pub fn origin_for(&self, fb: &FrameBuffer) -> (u16, u16) {
        let (cols, rows) = term_size(fb);
        (
            self.width.saturating_sub(cols) / 2,
            self.height.saturating_sub(rows) / 2,
        )
    }
}

/// Terminal cells needed to show a framebuffer (columns, rows)
pub fn term_size(fb: &FrameBuffer) -> (u16, u16) {
    (fb.width(), fb.height().div_ceil(2))
}

/// Colors of terminal cell `(col, row)`: (top pixel, bottom pixel)
pub fn term_cell(fb: &FrameBuffer, col: u16, row: u16) -> (Rgb, Rgb) {
    let top = fb
        .get(col as u32, row as u32 * 2)
        .unwrap_or(fb.background());
    let bottom = fb
        .get(col as u32, row as u32 * 2 + 1)
        .unwrap_or(fb.background());
    (top, bottom)
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    viewport: Viewport,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            viewport,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Change the viewport (terminal resize). Forces a full redraw.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.invalidate();
        }
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let origin = self.viewport.origin_for(fb);
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(0, 0),
        };
        let needs_full = prev.width() != fb.width() || prev.height() != fb.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(fb, origin, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, origin, &mut self.buf)?;
        }
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, origin: (u16, u16), out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = term_size(fb);
    let mut current: Option<(Rgb, Rgb)> = None;
    for row in 0..rows {
        out.queue(cursor::MoveTo(origin.0, origin.1.saturating_add(row)))?;
        for col in 0..cols {
            let colors = term_cell(fb, col, row);
            if current != Some(colors) {
                apply_colors_into(out, colors)?;
                current = Some(colors);
            }
            out.queue(Print(HALF_BLOCK))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    origin: (u16, u16),
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<(Rgb, Rgb)> = None;

    for_each_changed_run(prev, next, |col, row, len| {
        out.queue(cursor::MoveTo(
            origin.0.saturating_add(col),
            origin.1.saturating_add(row),
        ))?;
        for dc in 0..len {
            let colors = term_cell(next, col + dc, row);
            if current != Some(colors) {
                apply_colors_into(out, colors)?;
                current = Some(colors);
            }
            out.queue(Print(HALF_BLOCK))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_colors_into(out: &mut Vec<u8>, (top, bottom): (Rgb, Rgb)) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(top)))?;
    out.queue(SetBackgroundColor(rgb_to_color(bottom)))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let (cols, rows) = term_size(next);

    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..rows {
            f(0, row, cols)?;
        }
        return Ok(());
    }

    for row in 0..rows {
        let mut col = 0;
        while col < cols {
            if term_cell(prev, col, row) == term_cell(next, col, row) {
                col += 1;
                continue;
            }

            let start = col;
            col += 1;
            while col < cols && term_cell(prev, col, row) != term_cell(next, col, row) {
                col += 1;
            }
            f(start, row, col - start)?;
        }
    }

    Ok(())
}
