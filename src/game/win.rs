//! Four-in-a-row detection over a whole board.
//!
//! Every line family is scanned in full, so the answer depends only on the
//! board contents and not on which move was played last.

use super::board::{Board, Cell, COLS, ROWS};

const RUN: usize = 4;

/// Check whether `disc` owns four consecutive cells in any row, column or
/// diagonal. Always false for [`Cell::Empty`].
pub fn check_win(board: &Board, disc: Cell) -> bool {
    if disc == Cell::Empty {
        return false;
    }

    check_horizontal(board, disc)
        || check_vertical(board, disc)
        || check_diagonal_down(board, disc)
        || check_diagonal_up(board, disc)
}

/// Walk `RUN` cells from `(row, col)` one `(d_row, d_col)` step at a time.
/// Callers keep the start inside the range where the whole run fits.
fn run_matches(
    board: &Board,
    disc: Cell,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> bool {
    (0..RUN as isize).all(|step| {
        let r = (row as isize + step * d_row) as usize;
        let c = (col as isize + step * d_col) as usize;
        board.get(r, c) == disc
    })
}

fn check_horizontal(board: &Board, disc: Cell) -> bool {
    (0..ROWS).any(|row| (0..=COLS - RUN).any(|col| run_matches(board, disc, row, col, 0, 1)))
}

fn check_vertical(board: &Board, disc: Cell) -> bool {
    (0..COLS).any(|col| (0..=ROWS - RUN).any(|row| run_matches(board, disc, row, col, 1, 0)))
}

/// Top-left to bottom-right, \
fn check_diagonal_down(board: &Board, disc: Cell) -> bool {
    (0..=ROWS - RUN).any(|row| (0..=COLS - RUN).any(|col| run_matches(board, disc, row, col, 1, 1)))
}

/// Bottom-left to top-right, /
fn check_diagonal_up(board: &Board, disc: Cell) -> bool {
    (RUN - 1..ROWS).any(|row| (0..=COLS - RUN).any(|col| run_matches(board, disc, row, col, -1, 1)))
}
