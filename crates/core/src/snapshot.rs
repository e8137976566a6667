use crate::game_state::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_SIZE, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: [[u8; PIECE_SIZE]; PIECE_SIZE],
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of every filled matrix cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, id)| **id != 0)
                .map(move |(dx, _)| (self.x + dx as i8, self.y + dy as i8))
        })
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix.to_u8(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Read model handed to renderers. Plain `Copy` data, no references into the
/// live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub lost: bool,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                matrix: [[0u8; PIECE_SIZE]; PIECE_SIZE],
                x: SPAWN_X,
                y: SPAWN_Y,
            },
            lost: false,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
