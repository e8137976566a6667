//! Canvas Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one roof so binaries, tests and
//! benches can write `canvas_tetris::{core,engine,input,term,types}`.

pub mod logging;

pub use canvas_tetris_core as core;
pub use canvas_tetris_engine as engine;
pub use canvas_tetris_input as input;
pub use canvas_tetris_term as term;
pub use canvas_tetris_types as types;
