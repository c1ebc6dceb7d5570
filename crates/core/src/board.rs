//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are open space: pieces may spawn partially there.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Row indices, at most one per board row
pub type RowList = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single cell can hold a falling block.
    ///
    /// Columns must be on the board and rows above the bottom edge; anything
    /// above the top edge is open.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Whether `piece` shifted by `(dx, dy)` fits
    pub fn is_valid_position(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece
            .blocks()
            .iter()
            .all(|&(x, y)| self.is_open(x + dx, y + dy))
    }

    /// Write the piece's kind into every covered on-board cell.
    ///
    /// Placement is not re-validated; cells above the board are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.blocks() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of all full rows, scanned bottom to top
    pub fn full_rows(&self) -> RowList {
        (0..BOARD_ROWS).rev().filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and pad the top with empty rows.
    ///
    /// Remaining rows keep their relative order. Out-of-range and duplicate
    /// indices are ignored. Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let mut remove = [false; BOARD_ROWS];
        for &y in rows {
            if y < BOARD_ROWS {
                remove[y] = true;
            }
        }

        // Two-pointer compaction from the bottom up; copy_within handles overlap.
        let mut write_y = BOARD_ROWS;
        for read_y in (0..BOARD_ROWS).rev() {
            if remove[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * BOARD_COLS;
                self.cells
                    .copy_within(src..src + BOARD_COLS, write_y * BOARD_COLS);
            }
        }

        self.cells[..write_y * BOARD_COLS].fill(None);
        write_y
    }

    /// Copy rows into a 2D array (row 0 = top)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_COLS;
            row.copy_from_slice(&self.cells[start..start + BOARD_COLS]);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty and a piece letter fills the cell with that kind; missing
    /// leading rows are empty. Panics on malformed input.
    pub fn from_ascii(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_ROWS, "too many rows");
        let mut board = Self::new();
        let offset = BOARD_ROWS - rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), BOARD_COLS, "row {} has wrong width", i);
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string())
                            .unwrap_or_else(|| panic!("unknown cell {:?}", other)),
                    ),
                };
                board.set(x as i8, (offset + i) as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_open_above_board() {
        let board = Board::new();
        assert!(board.is_open(0, -3));
        assert!(!board.is_open(-1, -3));
        assert!(!board.is_open(10, -1));
        assert!(!board.is_open(0, 20));
    }

    #[test]
    fn test_from_ascii_bottom_aligned() {
        let board = Board::from_ascii(&["IIIIIIIII.", "T........."]);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(8, 18), Some(Some(PieceKind::I)));
        assert_eq!(board.get(9, 18), Some(None));
    }

    #[test]
    fn test_clear_rows_ignores_duplicates_and_out_of_range() {
        let mut board = Board::from_ascii(&["OOOOOOOOOO", "T........."]);
        assert_eq!(board.clear_rows(&[18, 18, 40]), 1);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_write_grid() {
        let mut board = Board::new();
        board.set(3, 7, Some(PieceKind::Z));
        let mut grid = [[None; BOARD_COLS]; BOARD_ROWS];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][3], Some(PieceKind::Z));
        assert_eq!(grid[7][4], None);
    }
}
