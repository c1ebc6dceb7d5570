//! Board tests: occupancy, collision and row clearing through the facade

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "({}, {})", x, y);
            assert!(board.is_open(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
}

#[test]
fn test_space_above_board_is_open() {
    let board = Board::new();
    assert!(board.is_open(0, -1));
    assert!(board.is_open(9, -4));
    assert!(!board.is_open(-1, -1));
    assert!(!board.is_open(10, -1));
    assert!(!board.is_open(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_piece_partially_above_board_is_valid() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::T).shifted(0, -1);
    assert!(board.is_valid_position(&piece, 0, 0));
    assert!(board.is_valid_position(&piece, 0, -3));
}

#[test]
fn test_valid_position_respects_walls_floor_and_blocks() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::O);

    assert!(board.is_valid_position(&piece, 0, 0));
    assert!(!board.is_valid_position(&piece, -5, 0));
    assert!(!board.is_valid_position(&piece, 5, 0));
    assert!(board.is_valid_position(&piece, 0, 18));
    assert!(!board.is_valid_position(&piece, 0, 19));

    board.set(4, 10, Some(PieceKind::Z));
    assert!(!board.is_valid_position(&piece, 0, 9));
    assert!(board.is_valid_position(&piece, 0, 8));
}

#[test]
fn test_lock_writes_kind_and_drops_cells_above_board() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::O).shifted(0, -1);

    board.lock(&piece);
    let filled: Vec<_> = board.cells().iter().filter(|c| c.is_some()).collect();
    assert_eq!(filled.len(), 2);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
}

#[test]
fn test_full_rows_bottom_to_top() {
    let board = Board::from_ascii(&[
        "IIIIIIIIII",
        "I.........",
        "ZZZZZZZZZZ",
    ]);
    assert_eq!(board.full_rows().as_slice(), &[19, 17]);
    assert!(board.is_row_full(17));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_rows_shifts_remaining_down() {
    let mut board = Board::from_ascii(&[
        "..T.......",
        "IIIIIIIIII",
        "J.........",
        "ZZZZZZZZZZ",
    ]);
    let rows = board.full_rows();
    assert_eq!(board.clear_rows(&rows), 2);

    let expected = Board::from_ascii(&["..T.......", "J........."]);
    assert_eq!(board, expected);
}

#[test]
fn test_clear_rows_ignores_duplicates_and_out_of_range() {
    let mut board = Board::from_ascii(&["LLLLLLLLLL"]);
    assert_eq!(board.clear_rows(&[19, 19, 25]), 1);
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_everything() {
    let mut board = Board::from_ascii(&["OOOOOOOOOO"; 20]);
    let rows = board.full_rows();
    assert_eq!(rows.len(), 20);
    assert_eq!(board.clear_rows(&rows), 20);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::from_ascii(&["S........."]);
    board.clear();
    assert_eq!(board, Board::default());
}
