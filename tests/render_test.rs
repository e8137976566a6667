//! Render tests - rectangle calls and the pixel framebuffer

use canvas_tetris::core::{Board, GameState, PieceRng, Tetromino};
use canvas_tetris::engine::{
    CanvasView, Config, DrawCall, DrawSurface, PixelRect, RecordingSurface,
};
use canvas_tetris::engine::surface::{GREY, WHITE};
use canvas_tetris::term::fb::BACKGROUND;
use canvas_tetris::term::FrameBuffer;
use canvas_tetris::types::{PieceKind, SURFACE_HEIGHT, SURFACE_WIDTH};

fn state_with_block() -> GameState {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::L));
    GameState::from_parts(board, Tetromino::at(PieceKind::O, 4, 0), PieceRng::new(1))
}

#[test]
fn test_frame_is_clear_then_blocks() {
    let snap = state_with_block().snapshot();
    let mut surface = RecordingSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    CanvasView::default().draw(&snap, &mut surface);

    let calls = surface.calls();
    assert_eq!(
        calls[0],
        DrawCall::Clear(PixelRect::new(0, 0, SURFACE_WIDTH, SURFACE_HEIGHT))
    );
    // One settled block plus four active cells, each filled then stroked.
    assert_eq!(calls.len(), 1 + 2 * 5);

    assert_eq!(calls[1], DrawCall::Fill(PixelRect::new(0, 570, 29, 29), WHITE));
    assert_eq!(calls[2], DrawCall::Stroke(PixelRect::new(0, 570, 29, 29), GREY));

    let fills: Vec<PixelRect> = surface.fills().collect();
    assert!(fills.contains(&PixelRect::new(120, 0, 29, 29)));
    assert!(fills.contains(&PixelRect::new(150, 30, 29, 29)));
}

#[test]
fn test_active_cells_off_grid_are_skipped() {
    let state = GameState::from_parts(
        Board::new(),
        Tetromino::at(PieceKind::I, 8, 5),
        PieceRng::new(1),
    );
    let mut surface = RecordingSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    CanvasView::default().draw(&state.snapshot(), &mut surface);

    // Bar spans columns 8..=11; only 8 and 9 are on the grid.
    assert_eq!(surface.fills().count(), 2);
}

#[test]
fn test_framebuffer_receives_blocks() {
    let snap = state_with_block().snapshot();
    let mut fb = FrameBuffer::new(40, 80);
    assert_eq!(fb.size(), (40, 80));
    CanvasView::default().draw(&snap, &mut fb);

    // 4x4 pixel cells: the settled block at (0, 19) starts at pixel (0, 76).
    assert_eq!(fb.get(0, 76), Some(GREY));
    assert_eq!(fb.get(1, 77), Some(WHITE));
    // The gap pixel to the right of the block is background.
    assert_eq!(fb.get(3, 77), Some(BACKGROUND));
    // Active O at (4, 0) covers pixels 16..24 in x.
    assert_eq!(fb.get(17, 1), Some(WHITE));
    assert_eq!(fb.get(30, 40), Some(BACKGROUND));
}

#[test]
fn test_redraw_replaces_previous_frame() {
    let mut fb = FrameBuffer::new(40, 80);
    fb.fill_rect(PixelRect::new(0, 0, 40, 80), WHITE);

    let empty = GameState::from_parts(
        Board::new(),
        Tetromino::at(PieceKind::O, 4, 0),
        PieceRng::new(1),
    );
    CanvasView::default().draw(&empty.snapshot(), &mut fb);
    assert_eq!(fb.get(39, 79), Some(BACKGROUND));
}

#[test]
fn test_smallest_configured_surface_still_shows_blocks() {
    let config = Config::from_lookup(|key| match key {
        "TETRIS_SURFACE_WIDTH" | "TETRIS_SURFACE_HEIGHT" => Some("3".to_string()),
        _ => None,
    });
    let mut fb = FrameBuffer::new(config.surface_width as u16, config.surface_height as u16);

    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::J, &[0]);
    let state = GameState::from_parts(board, Tetromino::at(PieceKind::O, 4, 0), PieceRng::new(1));
    CanvasView::default().draw(&state.snapshot(), &mut fb);

    let (w, h) = fb.size();
    let lit = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y) != Some(BACKGROUND))
        .count();
    // Nine settled blocks plus four active ones, one pixel each.
    assert_eq!(lit, 13);
}
