//! Engine module - scheduling and rendering around the core game.
//!
//! - [`scheduler`]: one ordered queue for gravity ticks, redraw ticks and key
//!   commands
//! - [`engine`]: owns a `GameState`, exposes the command surface
//!   (`move_left`, `move_right`, `soft_drop`, `rotate`, `tick`, `render`)
//! - [`surface`]: the `DrawSurface` trait every backend implements
//! - [`view`]: snapshot to rectangle draw calls
//! - [`config`]: host settings from the environment
//!
//! # Example
//!
//! ```
//! use canvas_tetris_engine::{Engine, RecordingSurface};
//! use canvas_tetris_core::GameState;
//! use canvas_tetris_types::{GameAction, SURFACE_HEIGHT, SURFACE_WIDTH};
//!
//! let mut surface = RecordingSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
//! let mut engine = Engine::new(GameState::new(7), 30, 0);
//!
//! engine.key(GameAction::MoveLeft, 5);
//! let report = engine.advance(250, Some(&mut surface));
//! assert_eq!(report.ticks, 1);
//! assert!(report.rendered);
//!
//! engine.stop();
//! assert_eq!(engine.next_due_ms(), None);
//! ```

pub mod config;
pub mod engine;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use canvas_tetris_core as core;
pub use canvas_tetris_types as types;

pub use config::Config;
pub use engine::{Engine, StepReport};
pub use scheduler::{Due, Event, Scheduler, TimerId, TimerKind};
pub use surface::{DrawCall, DrawSurface, PixelRect, RecordingSurface, Rgb};
pub use view::CanvasView;
