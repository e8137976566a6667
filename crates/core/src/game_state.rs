//! Game state module - board, falling piece, legality test and the tick rules
//!
//! All movement legality goes through one test, [`GameState::can_place`].
//! The gravity tick, the keyboard commands and the loss check are built on it.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{get_shape, rotate, PieceMatrix};
use crate::rng::PieceRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create an unrotated tetromino with its box origin at `(x, y)`
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            matrix: get_shape(kind),
            x,
            y,
        }
    }
}

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece froze, `lines` rows were cleared and a new piece spawned
    Locked { lines: usize },
    /// The piece froze on a topped-out board and a fresh game started
    Restarted { lines: usize },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    rng: PieceRng,
    lose: bool,
    /// Monotonic game counter (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces within the process.
    piece_id: u32,
}

impl GameState {
    /// Start a game whose pieces come from a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PieceRng::new(seed))
    }

    /// Start a game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(PieceRng::from_entropy())
    }

    /// Start a game on an empty board with the first piece drawn from `rng`
    pub fn with_rng(mut rng: PieceRng) -> Self {
        let active = Tetromino::new(rng.next_kind());
        Self::from_parts(Board::new(), active, rng)
    }

    /// Assemble a running game from an existing board and piece.
    ///
    /// Useful for puzzles and replays; the piece is taken as-is.
    pub fn from_parts(board: Board, active: Tetromino, rng: PieceRng) -> Self {
        trace!(kind = active.kind.as_str(), x = active.x, y = active.y, "piece spawned");
        Self {
            board,
            active,
            rng,
            lose: false,
            episode_id: 0,
            piece_id: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    /// True once a piece has come to rest at the very top
    pub fn lost(&self) -> bool {
        self.lose
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Pure legality test: would `matrix`, with its origin at the active
    /// position shifted by `(dx, dy)`, keep every filled cell on the grid and
    /// off settled blocks?
    pub fn fits(&self, dx: i8, dy: i8, matrix: &PieceMatrix) -> bool {
        let ox = self.active.x + dx;
        let oy = self.active.y + dy;
        matrix
            .filled()
            .iter()
            .all(|&(mx, my, _)| self.board.is_free(ox + mx, oy + my))
    }

    /// Legality test used by every move.
    ///
    /// A failed "down by one with the current matrix" probe while the piece is
    /// still in row 0 means the stack reached the top: the loss flag is set
    /// before returning `false`. No other rejection touches the flag.
    pub fn can_place(&mut self, dx: i8, dy: i8, matrix: &PieceMatrix) -> bool {
        if self.fits(dx, dy, matrix) {
            return true;
        }

        if dx == 0 && dy == 1 && *matrix == self.active.matrix && self.active.y == 0 {
            if !self.lose {
                info!(episode = self.episode_id, "game over");
            }
            self.lose = true;
        }
        false
    }

    /// [`GameState::can_place`] with the current matrix
    pub fn can_move(&mut self, dx: i8, dy: i8) -> bool {
        let matrix = self.active.matrix;
        self.can_place(dx, dy, &matrix)
    }

    /// Move the active piece if the target is legal
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_move(dx, dy) {
            return false;
        }
        self.active.x += dx;
        self.active.y += dy;
        if dy > 0 {
            // The piece left row 0, so it did not top out after all.
            self.lose = false;
        }
        true
    }

    /// Replace the active matrix by its rotation if the result is legal
    pub fn try_rotate(&mut self) -> bool {
        let rotated = rotate(&self.active.matrix);
        if !self.can_place(0, 0, &rotated) {
            return false;
        }
        self.active.matrix = rotated;
        true
    }

    /// Apply a keyboard command; returns whether the piece changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Gravity tick.
    ///
    /// Moves the piece down when possible. Otherwise the piece is frozen, full
    /// rows are cleared, and either a fresh game starts (loss flagged by the
    /// failed probe) or the next piece spawns.
    pub fn tick(&mut self) -> TickOutcome {
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        self.freeze();
        let lines = self.board.clear_lines();
        if lines > 0 {
            debug!(lines, episode = self.episode_id, "lines cleared");
        }

        if self.lose {
            self.restart();
            return TickOutcome::Restarted { lines };
        }

        self.spawn_piece();
        TickOutcome::Locked { lines }
    }

    /// Commit the active piece's cells into the board
    pub fn freeze(&mut self) {
        let piece = self.active;
        self.board.freeze(&piece.matrix, piece.x, piece.y);
    }

    /// Replace the active piece with a fresh random one at the spawn position
    pub fn spawn_piece(&mut self) {
        let kind = self.rng.next_kind();
        self.active = Tetromino::new(kind);
        self.piece_id = self.piece_id.wrapping_add(1);
        trace!(kind = kind.as_str(), piece_id = self.piece_id, "piece spawned");
    }

    /// Start a new game: empty board, cleared loss flag, new piece
    pub fn restart(&mut self) {
        self.board.clear();
        self.lose = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "new game");
        self.spawn_piece();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.lost = self.lose;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(kind: PieceKind, x: i8, y: i8) -> GameState {
        GameState::from_parts(Board::new(), Tetromino::at(kind, x, y), PieceRng::new(1))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.lost());
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.piece_id(), 1);
        assert_eq!(state.active().x, SPAWN_X);
        assert_eq!(state.active().y, SPAWN_Y);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.seed(), Some(12345));
    }

    #[test]
    fn test_try_move() {
        let mut state = game_with(PieceKind::O, 4, 0);

        assert!(state.try_move(1, 0));
        assert_eq!(state.active().x, 5);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active().x, 4);

        // Can't move up out of the grid
        assert!(!state.try_move(0, -1));
    }

    #[test]
    fn test_try_move_hits_walls() {
        let mut state = game_with(PieceKind::I, 5, 3);

        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        assert_eq!(moved, 5);
        assert_eq!(state.active().x, 0);

        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(1, 0) {
                moved += 1;
            }
        }
        // I bar is 4 wide: rightmost origin is column 6
        assert_eq!(moved, 6);
        assert_eq!(state.active().x, 6);
    }

    #[test]
    fn test_side_rejection_never_sets_loss() {
        let mut state = game_with(PieceKind::I, 0, 0);
        assert!(!state.try_move(-1, 0));
        assert!(!state.lost());
    }

    #[test]
    fn test_rotation_rejection_never_sets_loss() {
        // Settle a block under the first cell of the rotated bar.
        let mut state = game_with(PieceKind::I, 5, 0);
        let rotated = rotate(&state.active().matrix);
        let (dx, dy, _) = rotated.filled()[0];
        state.board.set(5 + dx, dy, Some(PieceKind::O));

        assert!(!state.try_rotate());
        assert!(!state.lost());
    }

    #[test]
    fn test_down_probe_below_row_zero_does_not_set_loss() {
        let mut state = game_with(PieceKind::O, 4, 18);
        assert!(!state.can_move(0, 1));
        assert!(!state.lost());
    }

    #[test]
    fn test_successful_drop_clears_stale_loss() {
        let mut state = game_with(PieceKind::I, 0, 0);
        // Block only the cells under the bar at columns 0..3
        for x in 0..4 {
            state.board.set(x, 1, Some(PieceKind::O));
        }
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert!(state.lost());

        // Slide over to open columns and fall
        for _ in 0..4 {
            assert!(state.apply_action(GameAction::MoveRight));
        }
        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(!state.lost());
    }

    #[test]
    fn test_tick_fell_then_locked() {
        let mut state = game_with(PieceKind::O, 4, 17);
        assert_eq!(state.tick(), TickOutcome::Fell);
        assert_eq!(state.active().y, 18);
        assert_eq!(state.tick(), TickOutcome::Locked { lines: 0 });
        assert_eq!(state.board().get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.piece_id(), 2);
        assert_eq!(state.active().y, SPAWN_Y);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = game_with(PieceKind::O, 4, 5);
        state.board.set(0, 19, Some(PieceKind::I));
        state.restart();
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.board().filled_count(), 0);
        assert!(!state.lost());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut state = game_with(PieceKind::T, 2, 3);
        state.board.set(1, 19, Some(PieceKind::S));
        let snap = state.snapshot();

        assert_eq!(snap.board[19][1], PieceKind::S.id());
        assert_eq!(snap.active.kind, PieceKind::T);
        assert_eq!((snap.active.x, snap.active.y), (2, 3));
        assert_eq!(snap.active.matrix[1], [7, 7, 7, 0]);
        assert!(!snap.lost);
    }
}
