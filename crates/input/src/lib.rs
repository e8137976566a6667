//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Keys that
//! do not name a game command are ignored; quitting is a host concern and is
//! checked separately with [`should_quit`].

pub mod map;

pub use canvas_tetris_types as types;

pub use map::{handle_key_event, should_quit};
