//! Knight movement, used only under [`KnightRule::LShape`](super::KnightRule::LShape).

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::can_land;

/// Two squares one way and one the other, jumping over anything in between.
pub(super) fn knight_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    let (d_row, d_col) = start.delta(end);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)) && can_land(piece, end, board)
}
