//! Terminal drawing backend.
//!
//! The engine draws rectangles onto a [`FrameBuffer`] of RGB pixels; the
//! [`TerminalRenderer`] turns that framebuffer into crossterm commands, two
//! pixels per character cell.
//!
//! Goals:
//! - Keep the engine free of any terminal code
//! - Square pixels on typical terminal fonts (half-block cells)
//! - Send only changed cells after the first frame

pub mod fb;
pub mod renderer;

pub use canvas_tetris_engine as engine;

pub use fb::FrameBuffer;
pub use renderer::{encode_diff_into, encode_full_into, term_size, TerminalRenderer, Viewport};
