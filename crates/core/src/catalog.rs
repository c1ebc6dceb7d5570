//! Piece catalog - base shapes and display colors for the seven kinds.

use crate::piece::Shape;
use crate::types::{PieceKind, Rgb};

const I_SHAPE: Shape = Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const T_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);

/// Spawn-orientation grid for a kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Display color for a kind
pub fn color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::from_hex(0x00f5ff),
        PieceKind::O => Rgb::from_hex(0xffd700),
        PieceKind::T => Rgb::from_hex(0xff00ff),
        PieceKind::S => Rgb::from_hex(0x00ff00),
        PieceKind::Z => Rgb::from_hex(0xff0000),
        PieceKind::J => Rgb::from_hex(0x0000ff),
        PieceKind::L => Rgb::from_hex(0xff8800),
    }
}
