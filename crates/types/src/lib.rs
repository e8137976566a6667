//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the game logic, the engine/scheduler and any drawing backend.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (5, 0), the top-left corner of the piece's 4x4 box
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 250 | Gravity tick period (fixed, no leveling) |
//! | `REDRAW_MS` | 30 | Default redraw period |
//!
//! # Examples
//!
//! ```
//! use canvas_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::T.id(), 7);
//! assert_ne!(GameAction::Rotate, GameAction::SoftDrop);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square box every piece matrix lives in
pub const PIECE_SIZE: usize = 4;

/// Spawn column of the piece box origin
pub const SPAWN_X: i8 = 5;

/// Spawn row of the piece box origin
pub const SPAWN_Y: i8 = 0;

/// Gravity tick period in milliseconds
pub const GRAVITY_MS: u64 = 250;

/// Default redraw period in milliseconds
pub const REDRAW_MS: u64 = 30;

/// Reference drawing surface width in pixels (30px cells)
pub const SURFACE_WIDTH: u32 = 300;

/// Reference drawing surface height in pixels (30px cells)
pub const SURFACE_HEIGHT: u32 = 600;


/// The seven piece kinds, in template order.
///
/// The numeric id written into the board is the 1-based template index:
///
/// | Kind | Id | Template (4 columns per row) |
/// |------|----|------------------------------|
/// | I | 1 | `XXXX` |
/// | L | 2 | `XXX.` / `X...` |
/// | J | 3 | `XXX.` / `..X.` |
/// | O | 4 | `XX..` / `XX..` |
/// | Z | 5 | `XX..` / `.XX.` |
/// | S | 6 | `.XX.` / `XX..` |
/// | T | 7 | `.X..` / `XXX.` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds in template order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
    ];

    /// 0-based template index
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::L => 1,
            PieceKind::J => 2,
            PieceKind::O => 3,
            PieceKind::Z => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
        }
    }

    /// Color/id tag written into board cells (1..=7)
    pub fn id(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
        }
    }
}

/// Commands a keyboard source can deliver to the engine.
///
/// Each one is validated against the collision test before it is applied;
/// a rejected command is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate the piece's 4x4 box by 90°
    Rotate,
}

/// A cell on the game board or in a piece matrix
///
/// - `None`: Empty cell (id 0)
/// - `Some(PieceKind)`: Cell filled by that kind (id 1..=7)
pub type Cell = Option<PieceKind>;

/// Numeric id of a cell (0 for empty)
#[inline]
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, |kind| kind.id())
}
