use super::*;
use crate::connect_four_position;

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(board.get(row, col), None);
        }
    }
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_apply_move_settles_at_bottom() {
    let mut board = Board::new();

    assert_eq!(board.apply_move(3, Side::Human).unwrap(), (5, 3));
    assert_eq!(board.get(5, 3), Some(Side::Human));

    assert_eq!(board.apply_move(3, Side::Computer).unwrap(), (4, 3));
    assert_eq!(board.get(4, 3), Some(Side::Computer));
    assert_eq!(board.piece_count(), 2);
}

#[test]
fn test_apply_move_on_full_column_is_rejected() {
    let mut board = Board::new();
    for _ in 0..ROWS {
        board.apply_move(0, Side::Human).unwrap();
    }
    let before = board;

    assert_eq!(
        board.apply_move(0, Side::Computer),
        Err(BoardError::ColumnFull { column: 0 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_out_of_range() {
    let mut board = Board::new();
    assert_eq!(
        board.apply_move(COLS, Side::Human),
        Err(BoardError::ColumnOutOfRange { column: COLS })
    );
}

#[test]
fn test_undo_move_removes_topmost_piece() {
    let mut board = Board::new();
    board.apply_move(2, Side::Human).unwrap();
    board.apply_move(2, Side::Computer).unwrap();

    assert_eq!(board.undo_move(2).unwrap(), 4);
    assert_eq!(board.get(4, 2), None);
    assert_eq!(board.get(5, 2), Some(Side::Human));
}

#[test]
fn test_undo_move_on_empty_column_is_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.undo_move(4),
        Err(BoardError::ColumnEmpty { column: 4 })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_then_undo_restores_every_column() {
    let mut board = connect_four_position! {
        .......
        ...O...
        ...X...
        ..OO...
        .XXOX..
        OXOXXO.
    };

    for column in board.legal_moves() {
        for side in Side::ALL {
            let before = board;
            board.apply_move(column, side).unwrap();
            assert!(board.floating_column().is_none());
            board.undo_move(column).unwrap();
            assert_eq!(board, before, "column {} did not round trip", column);
        }
    }
}

#[test]
fn test_legal_moves_ascending() {
    let board = connect_four_position! {
        ..X...O
        ..O...X
        ..X...O
        ..O...X
        ..X...O
        ..O...X
    };
    assert_eq!(board.legal_moves().as_slice(), &[0, 1, 3, 4, 5]);
    assert!(!board.is_legal(2));
    assert!(!board.is_legal(6));
    assert!(!board.is_legal(COLS));
}

#[test]
fn test_legal_moves_shrink_by_at_most_one() {
    let mut board = Board::new();
    let mut side = Side::Human;
    // Fill the board column by column and watch the legal move count.
    for column in 0..COLS {
        for _ in 0..ROWS {
            let before = board.legal_moves().len();
            board.apply_move(column, side).unwrap();
            let after = board.legal_moves().len();
            assert!(before - after <= 1);
            side = side.opposite();
        }
    }
    assert!(board.legal_moves().is_empty());
    assert!(board.is_full());
}

#[test]
fn test_floating_column_detected() {
    let mut board = Board::new();
    board.put(3, 5, Some(Side::Human));
    assert_eq!(board.floating_column(), Some(5));
}
