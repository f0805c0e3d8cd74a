//! King movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::can_land;

/// One square in any direction onto an empty or enemy square. No castling.
pub(super) fn king_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    let (d_row, d_col) = start.delta(end);
    d_row.abs() <= 1 && d_col.abs() <= 1 && can_land(piece, end, board)
}
