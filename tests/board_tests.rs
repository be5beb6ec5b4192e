//! Board tests - grid storage, bounds, and line compaction

use term_tetris::core::Board;
use term_tetris::types::{Color, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..GRID_WIDTH as i8 {
        assert!(board.set(x, y, Some(color)));
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), GRID_WIDTH);
    assert_eq!(board.height(), GRID_HEIGHT);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
            assert!(board.is_free(x, y));
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, GRID_HEIGHT as i8), None);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));

    // Overwrite and clear.
    assert!(board.set(5, 10, Some(Color::Cyan)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Cyan)));
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    // Out of bounds writes are rejected.
    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, GRID_HEIGHT as i8, Some(Color::Red)));
}

#[test]
fn test_is_free_and_is_occupied() {
    let mut board = Board::new();

    assert!(board.is_free(3, 3));
    assert!(!board.is_occupied(3, 3));

    board.set(3, 3, Some(Color::Green));
    assert!(!board.is_free(3, 3));
    assert!(board.is_occupied(3, 3));

    // Out of bounds is neither free nor occupied.
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    fill_row(&mut board, 19, Color::Blue);
    assert!(board.is_row_full(19));

    board.set(0, 19, None);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::new();
    board.set(7, 18, Some(Color::Yellow));
    fill_row(&mut board, 19, Color::Red);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    // The cell above dropped into the cleared row.
    assert_eq!(board.get(7, 19), Some(Some(Color::Yellow)));
    assert_eq!(board.get(7, 18), Some(None));
}

#[test]
fn test_clear_four_rows_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, Color::Cyan);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_clear_interleaved_rows_keeps_survivor_order() {
    let mut board = Board::new();
    board.set(0, 14, Some(Color::Cyan));
    fill_row(&mut board, 15, Color::Red);
    board.set(0, 16, Some(Color::Yellow));
    fill_row(&mut board, 17, Color::Red);
    board.set(0, 18, Some(Color::Green));
    fill_row(&mut board, 19, Color::Red);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[15, 17, 19]);

    // All three survivors shifted to the bottom in their original order.
    assert_eq!(board.get(0, 17), Some(Some(Color::Cyan)));
    assert_eq!(board.get(0, 18), Some(Some(Color::Yellow)));
    assert_eq!(board.get(0, 19), Some(Some(Color::Green)));
    for y in 0..17 {
        assert_eq!(board.get(0, y), Some(None));
    }
}

#[test]
fn test_clear_without_full_rows_changes_nothing() {
    let mut board = Board::new();
    board.set(4, 19, Some(Color::Orange));
    board.set(5, 12, Some(Color::Blue));

    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}
