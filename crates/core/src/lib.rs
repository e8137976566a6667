//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the game rules and state. It has **no dependencies** on
//! drawing, timers or input devices:
//!
//! - **Deterministic**: a seeded game replays identically
//! - **Testable**: every rule is a plain method call
//! - **Portable**: any host can drive it (terminal, canvas, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 settled-block grid with line clearing
//! - [`pieces`]: shape templates and the 4x4 rotation transform
//! - [`rng`]: uniform, seedable piece selection
//! - [`game_state`]: active piece, legality test, tick rules, loss/restart
//! - [`snapshot`]: copyable read model for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn with their 4x4 box origin at (5, 0)
//! - Each gravity tick moves the piece down one row, or freezes it
//! - Full rows are removed and everything above slides down
//! - A piece that cannot leave row 0 ends the game, which restarts at once
//! - No wall kicks, no hold, no preview, no scoring
//!
//! # Example
//!
//! ```
//! use canvas_tetris_core::{GameState, TickOutcome};
//! use canvas_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // The board is empty, so the first tick just moves the piece down.
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use canvas_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, TickOutcome, Tetromino};
pub use pieces::{get_shape, rotate, PieceMatrix};
pub use rng::PieceRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
