//! Pieces tests - templates and the box rotation

use canvas_tetris::core::{get_shape, rotate, PieceMatrix};
use canvas_tetris::types::PieceKind;

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        assert_eq!(shape.filled_count(), 4, "{:?}", kind);
        assert!(shape.filled().iter().all(|&(_, _, k)| k == kind));
    }
}

#[test]
fn test_templates_are_row_major() {
    // [0,1,0,0, 1,1,1]: a T with the nub on top.
    let t = get_shape(PieceKind::T).to_u8();
    assert_eq!(t[0], [0, 7, 0, 0]);
    assert_eq!(t[1], [7, 7, 7, 0]);
    assert_eq!(t[2], [0, 0, 0, 0]);

    let i = get_shape(PieceKind::I).to_u8();
    assert_eq!(i[0], [1, 1, 1, 1]);
}

#[test]
fn test_rotate_formula() {
    let m = get_shape(PieceKind::L);
    let r = rotate(&m);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(r.get(x, y), m.get(y, 3 - x));
        }
    }
}

#[test]
fn test_horizontal_bar_becomes_vertical() {
    let r = rotate(&get_shape(PieceKind::I));
    let cols: Vec<i8> = r.filled().iter().map(|&(x, _, _)| x).collect();
    assert_eq!(cols, vec![3, 3, 3, 3]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let m = get_shape(kind);
        let back = rotate(&rotate(&rotate(&rotate(&m))));
        assert_eq!(back, m, "{:?}", kind);
    }
}

#[test]
fn test_rotating_empty_box_stays_empty() {
    assert_eq!(rotate(&PieceMatrix::EMPTY), PieceMatrix::EMPTY);
}
