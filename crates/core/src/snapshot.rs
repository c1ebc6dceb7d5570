//! Plain-value view of a session for renderers.

use crate::piece::{Blocks, Piece, Shape};
use crate::types::{Cell, Phase, PieceKind, Rotation, BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
}

impl ActiveSnapshot {
    /// Board coordinates covered by the piece
    pub fn blocks(&self) -> Blocks {
        self.shape
            .offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            shape: value.shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub phase: Phase,
    /// Rows waiting to be removed, flagged per board row
    pub clearing_rows: [bool; BOARD_ROWS],
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub pieces_placed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clearing(&self) -> bool {
        self.clearing_rows.iter().any(|&r| r)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            next: PieceKind::I,
            hold: None,
            can_hold: true,
            phase: Phase::Ready,
            clearing_rows: [false; BOARD_ROWS],
            score: 0,
            lines: 0,
            level: 1,
            pieces_placed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_snapshot_blocks_follow_position() {
        let snap = ActiveSnapshot::from(Piece::new(PieceKind::I).shifted(0, 4));
        assert_eq!(
            snap.blocks().as_slice(),
            &[(3, 5), (4, 5), (5, 5), (6, 5)]
        );
    }

    #[test]
    fn default_snapshot_is_ready_and_empty() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.phase, Phase::Ready);
        assert!(!snap.is_clearing());
        assert!(!snap.phase.is_playing());
        assert!(snap.board.iter().flatten().all(|c| c.is_none()));
    }
}
