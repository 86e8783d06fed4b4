//! Board tests - grid queries, commit and row clearing

use blockfall::core::{Board, Shape, ShapeKind};
use blockfall::types::{CellTag, EMPTY, GRID_HEIGHT, GRID_WIDTH};

fn empty_rows() -> Vec<Vec<CellTag>> {
    vec![vec![EMPTY; GRID_WIDTH as usize]; GRID_HEIGHT as usize]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 13);
    assert_eq!(board.height(), 20);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({}, {})", x, y);
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, GRID_HEIGHT as i8), None);

    assert!(board.is_out_of_bounds(-1, 5));
    assert!(board.is_out_of_bounds(5, 20));
    assert!(!board.is_out_of_bounds(12, 19));
}

#[test]
fn test_commit_skips_cells_outside_grid() {
    let mut board = Board::new();
    // I piece hanging two cells past the right wall.
    board.commit(&ShapeKind::I.shape(), 11, 0, 2);

    assert_eq!(board.get(11, 0), Some(2));
    assert_eq!(board.get(12, 0), Some(2));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
}

#[test]
fn test_commit_overwrites_with_color() {
    let mut board = Board::new();
    let square = Shape::from_rows(&[&[1, 1], &[1, 1]]);
    board.commit(&square, 0, 18, 5);
    board.commit(&square, 1, 18, 6);

    assert_eq!(board.row(19)[..3], [5, 6, 6]);
}

#[test]
fn test_row_full_detection() {
    let mut rows = empty_rows();
    rows[19] = vec![1; GRID_WIDTH as usize];
    rows[18] = vec![1; GRID_WIDTH as usize];
    rows[18][12] = EMPTY;
    let board = Board::from_rows(&rows);

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_full(0));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut rows = empty_rows();
    rows[2] = vec![4; GRID_WIDTH as usize];
    rows[5] = vec![4; GRID_WIDTH as usize];
    // Marker rows between and around the full ones.
    rows[1][0] = 1;
    rows[3][1] = 2;
    rows[4][2] = 3;
    rows[6][3] = 7;
    let mut board = Board::from_rows(&rows);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[2, 5]);

    // Rows above the lower clear shift down by the number of cleared rows beneath them.
    assert_eq!(board.get(0, 3), Some(1));
    assert_eq!(board.get(1, 4), Some(2));
    assert_eq!(board.get(2, 5), Some(3));
    assert_eq!(board.get(3, 6), Some(7));
    assert!(board.row(0).iter().all(|&c| c == EMPTY));
    assert!(board.row(1).iter().all(|&c| c == EMPTY));
    assert!(!board.is_row_full(2) && !board.is_row_full(5));
}

#[test]
fn test_clear_keeps_colors() {
    let mut rows = empty_rows();
    rows[19] = (0..GRID_WIDTH).map(|x| 1 + x % 7).collect();
    rows[18][4] = 6;
    let mut board = Board::from_rows(&rows);

    assert_eq!(board.clear_full_rows().len(), 1);
    assert_eq!(board.get(4, 19), Some(6));
}

#[test]
fn test_clear_entire_board() {
    let rows = vec![vec![3; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    let mut board = Board::from_rows(&rows);
    assert!(board.is_full());

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), GRID_HEIGHT as usize);
    assert_eq!(board, Board::new());
}

#[test]
fn test_rows_iterates_top_to_bottom() {
    let mut rows = empty_rows();
    rows[0][0] = 1;
    rows[19][12] = 2;
    let board = Board::from_rows(&rows);

    let collected: Vec<&[CellTag]> = board.rows().collect();
    assert_eq!(collected.len(), 20);
    assert_eq!(collected[0][0], 1);
    assert_eq!(collected[19][12], 2);
    assert_eq!(board.to_rows(), rows);
}
