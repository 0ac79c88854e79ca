use word_grid::core::cell::Cell;
use word_grid::core::grid::{Grid, EMPTY, GRID_SIZE};
use word_grid::error::GridError;

#[test]
fn neighbour_counts_match_board_position() {
    let grid = Grid::default();
    let count = |r, c| grid.neighbors_of(Cell::new(r, c)).count();
    assert_eq!(count(0, 0), 3);
    assert_eq!(count(0, 3), 3);
    assert_eq!(count(3, 3), 3);
    assert_eq!(count(0, 1), 5);
    assert_eq!(count(2, 0), 5);
    assert_eq!(count(1, 1), 8);
}

#[test]
fn adjacency_is_symmetric_and_excludes_self() {
    let grid = Grid::default();
    for a in grid.cells() {
        for b in grid.neighbors_of(a) {
            assert_ne!(a, b);
            assert!(grid.neighbors_of(b).any(|x| x == a));
        }
    }
}

#[test]
fn char_at_rejects_out_of_bounds() {
    let grid = Grid::from_lines(["CATS", "OXXX", "XXXX", "XXXX"]);
    assert_eq!(grid.char_at(Cell::new(0, 3)), Ok('S'));
    assert_eq!(
        grid.char_at(Cell::new(4, 0)),
        Err(GridError::OutOfBounds {
            row: 4,
            col: 0,
            size: GRID_SIZE
        })
    );
    assert!(grid.char_at(Cell::new(-1, 2)).is_err());
}

#[test]
fn unset_cells_hold_the_sentinel() {
    let grid = Grid::from_lines(["AB"]);
    assert_eq!(grid.char_at(Cell::new(0, 2)), Ok(EMPTY));
    assert_eq!(grid.char_at(Cell::new(3, 3)), Ok(EMPTY));
    assert_eq!(grid.cells_with('A').collect::<Vec<_>>(), vec![Cell::new(0, 0)]);
}

#[test]
fn display_marks_empty_cells() {
    let grid = Grid::from_lines(["AB"]);
    let text = grid.to_string();
    assert_eq!(text.lines().next(), Some("A B . ."));
    assert_eq!(text.lines().count(), 4);
}
