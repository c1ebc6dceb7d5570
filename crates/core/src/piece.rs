//! Piece module - shape grids, piece instances and SRS-style rotation
//!
//! A shape is an N×N boolean grid (N ∈ {2, 3, 4}). Rotation is a matrix
//! transform of that grid; wall kicks try a fixed list of offsets per
//! `(from rotation, direction)` pair.
//! Reference: https://tetris.wiki/SRS

use arrayvec::ArrayVec;

use crate::catalog::base_shape;
use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Largest supported grid edge
pub const MAX_GRID: usize = 4;

/// Upper bound on occupied cells of any shape
pub const MAX_BLOCKS: usize = MAX_GRID * MAX_GRID;

/// Absolute board coordinates occupied by a piece
pub type Blocks = ArrayVec<(i8, i8), MAX_BLOCKS>;

/// Square occupancy grid, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_GRID]; MAX_GRID],
}

impl Shape {
    /// Build from the first `N` rows/columns of a 0/1 matrix
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_GRID);
        let mut cells = [[false; MAX_GRID]; MAX_GRID];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Grid edge length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether grid cell `(x, y)` is filled. Out-of-grid reads are empty.
    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.cells[y][x]
    }

    /// Quarter-turn of the grid.
    ///
    /// Clockwise maps old `(y, x)` to new `(x, n-1-y)`; counter-clockwise maps
    /// old `(y, x)` to new `(n-1-x, y)`.
    pub fn rotated(&self, clockwise: bool) -> Shape {
        let n = self.size as usize;
        let mut cells = [[false; MAX_GRID]; MAX_GRID];
        for y in 0..n {
            for x in 0..n {
                if clockwise {
                    cells[x][n - 1 - y] = self.cells[y][x];
                } else {
                    cells[n - 1 - x][y] = self.cells[y][x];
                }
            }
        }
        Shape {
            size: self.size,
            cells,
        }
    }

    /// Filled cells as `(x, y)` offsets inside the grid, row-major
    pub fn offsets(&self) -> Blocks {
        let n = self.size as usize;
        let mut out = Blocks::new();
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// A falling, next, or held piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered on row 0
    pub fn new(kind: PieceKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(shape.size()),
            y: 0,
            rotation: Rotation::North,
        }
    }

    /// Board coordinates of every filled cell
    pub fn blocks(&self) -> Blocks {
        self.shape
            .offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Shape this piece would have after a quarter-turn
    pub fn rotate(&self, clockwise: bool) -> Shape {
        self.shape.rotated(clockwise)
    }

    /// Same piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Spawn column for a grid of the given size
pub fn spawn_x(grid_size: u8) -> i8 {
    ((BOARD_WIDTH - grid_size) / 2) as i8
}

/// Kick candidates for one rotation transition
pub type KickList = [(i8, i8); 5];

/// Kick table indexed by `[from_rotation][direction]`, direction 0 = CW, 1 = CCW
pub type KickTable = [[KickList; 2]; 4];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // from 0
    [
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0->1
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 0->3
    ],
    // from 1
    [
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)], // 1->2
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)], // 1->0
    ],
    // from 2
    [
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 2->3
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 2->1
    ],
    // from 3
    [
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)], // 3->0
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)], // 3->2
    ],
];

/// I piece kick table (different from JLSTZ)
const I_KICKS: KickTable = [
    [
        [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // 0->1
        [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // 0->3
    ],
    [
        [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // 1->2
        [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // 1->0
    ],
    [
        [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // 2->3
        [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // 2->1
    ],
    [
        [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // 3->0
        [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // 3->2
    ],
];

/// O piece never kicks
const O_KICKS: [(i8, i8); 1] = [(0, 0)];

/// Ordered kick offsets for rotating `kind` out of `from`
pub fn kick_offsets(kind: PieceKind, from: Rotation, clockwise: bool) -> &'static [(i8, i8)] {
    let dir = if clockwise { 0 } else { 1 };
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS[from.index()][dir],
        _ => &JLSTZ_KICKS[from.index()][dir],
    }
}

/// Try to rotate a piece with wall kicks
///
/// Returns the rotated piece and the kick offset that made it fit, or `None`
/// when every candidate is rejected by `is_valid`. The input piece is never
/// modified.
pub fn try_rotate(
    piece: &Piece,
    clockwise: bool,
    is_valid: impl Fn(&Piece) -> bool,
) -> Option<(Piece, (i8, i8))> {
    let rotation = if clockwise {
        piece.rotation.rotate_cw()
    } else {
        piece.rotation.rotate_ccw()
    };
    let rotated = Piece {
        shape: piece.rotate(clockwise),
        rotation,
        ..*piece
    };

    kick_offsets(piece.kind, piece.rotation, clockwise)
        .iter()
        .map(|&(dx, dy)| (rotated.shifted(dx, dy), (dx, dy)))
        .find(|(candidate, _)| is_valid(candidate))
}
