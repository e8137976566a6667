//! Pieces module - shape templates and the 4x4 rotation transform
//!
//! Every piece lives in a 4x4 box. A template marks which cells of the box are
//! filled, read row-major with missing trailing entries treated as empty.
//! Rotation is a plain 90° turn of the whole box, `new[y][x] = old[3 - x][y]`;
//! there are no wall kicks and no per-piece pivots.

use arrayvec::ArrayVec;

use crate::types::{cell_id, Cell, PieceKind, PIECE_SIZE};

/// Shape templates in id order (index 0 is id 1)
pub const TEMPLATES: [&[u8]; 7] = [
    &[1, 1, 1, 1],
    &[1, 1, 1, 0, 1],
    &[1, 1, 1, 0, 0, 0, 1],
    &[1, 1, 0, 0, 1, 1],
    &[1, 1, 0, 0, 0, 1, 1],
    &[0, 1, 1, 0, 1, 1],
    &[0, 1, 0, 0, 1, 1, 1],
];

/// Offset of a filled cell inside the box plus the kind stamped on it
pub type FilledCell = (i8, i8, PieceKind);

/// A 4x4 piece box; filled cells carry the owning piece's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    cells: [[Cell; PIECE_SIZE]; PIECE_SIZE],
}

impl PieceMatrix {
    /// An all-empty box
    pub const EMPTY: PieceMatrix = PieceMatrix {
        cells: [[None; PIECE_SIZE]; PIECE_SIZE],
    };

    /// Build a box from rows of cells
    pub fn from_cells(cells: [[Cell; PIECE_SIZE]; PIECE_SIZE]) -> Self {
        Self { cells }
    }

    /// Build the box for `kind` from its template.
    pub fn from_template(kind: PieceKind) -> Self {
        let template = TEMPLATES[kind.index()];
        let mut cells = [[None; PIECE_SIZE]; PIECE_SIZE];
        for (i, &mark) in template.iter().enumerate() {
            if mark != 0 {
                cells[i / PIECE_SIZE][i % PIECE_SIZE] = Some(kind);
            }
        }
        Self { cells }
    }

    /// Cell at box coordinates; out-of-box reads are empty
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
    }

    /// Filled cells as `(dx, dy, kind)`, row-major. Stack-only.
    pub fn filled(&self) -> ArrayVec<FilledCell, 16> {
        let mut out = ArrayVec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    out.push((x as i8, y as i8, *kind));
                }
            }
        }
        out
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Numeric ids of the box (0 empty)
    pub fn to_u8(&self) -> [[u8; PIECE_SIZE]; PIECE_SIZE] {
        let mut out = [[0u8; PIECE_SIZE]; PIECE_SIZE];
        for (dst, src) in out.iter_mut().zip(self.cells.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = cell_id(*s);
            }
        }
        out
    }
}

/// Get the spawn box for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceMatrix {
    PieceMatrix::from_template(kind)
}

/// Rotate a box by 90°.
///
/// The transform covers the whole 4x4 box regardless of the piece footprint,
/// so four applications give back the starting matrix.
pub fn rotate(matrix: &PieceMatrix) -> PieceMatrix {
    let mut cells = [[None; PIECE_SIZE]; PIECE_SIZE];
    for (y, row) in cells.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = matrix.cells[PIECE_SIZE - 1 - x][y];
        }
    }
    PieceMatrix { cells }
}
