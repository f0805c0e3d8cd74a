//! Rook, bishop and queen movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::can_land;

/// Straight horizontal or vertical line with nothing in between.
pub(super) fn rook_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    is_straight(start, end) && path_clear(start, end, board) && can_land(piece, end, board)
}

/// Pure diagonal with nothing in between.
pub(super) fn bishop_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    is_diagonal(start, end) && path_clear(start, end, board) && can_land(piece, end, board)
}

/// Rook or bishop line.
pub(super) fn queen_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    (is_straight(start, end) || is_diagonal(start, end))
        && path_clear(start, end, board)
        && can_land(piece, end, board)
}

#[inline]
fn is_straight(start: Square, end: Square) -> bool {
    start.row() == end.row() || start.col() == end.col()
}

#[inline]
fn is_diagonal(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta(end);
    d_row.abs() == d_col.abs()
}

/// Walk one square at a time from `start` toward `end` and report whether
/// every square strictly between them is empty.
///
/// The caller guarantees `start` and `end` share a line. Stepping off the
/// board counts as blocked.
fn path_clear(start: Square, end: Square, board: &Board) -> bool {
    let (d_row, d_col) = start.delta(end);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = start.offset(step_row, step_col);
    loop {
        let Some(sq) = current else {
            return false;
        };
        if sq == end {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        current = sq.offset(step_row, step_col);
    }
}
