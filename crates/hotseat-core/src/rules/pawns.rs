//! Pawn movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Rows a pawn may double-step from. The check is by row only, not by color.
const DOUBLE_STEP_ROWS: [u8; 2] = [1, 6];

/// Single or double forward push onto an empty square, or a one-step
/// diagonal capture of an enemy piece.
///
/// The double step only requires the destination to be empty; the square
/// being jumped over is not inspected, so a pawn can hop a blocker that
/// stands directly in front of it.
pub(super) fn pawn_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    let forward = piece.color().forward();
    let (d_row, d_col) = start.delta(end);

    if d_col == 0 {
        if board.is_occupied(end) {
            return false;
        }
        return d_row == forward
            || (d_row == 2 * forward && DOUBLE_STEP_ROWS.contains(&start.row()));
    }

    if d_col.abs() == 1 && d_row == forward {
        return board
            .piece_at(end)
            .is_some_and(|target| piece.is_enemy_of(target));
    }

    false
}

#[cfg(test)]
mod tests {
    use crate::piece::Piece;
    use crate::rules::tests::{board, legal, sq};

    #[test]
    fn white_single_and_double_step_from_start() {
        let b = board("8/8/8/8/8/8/4P3/8");
        assert!(legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &b));
        assert!(legal(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(3, 4), &b));
    }

    #[test]
    fn black_moves_toward_higher_rows() {
        let b = board("8/3p4/8/8/8/8/8/8");
        assert!(legal(Piece::BLACK_PAWN, sq(1, 3), sq(2, 3), &b));
        assert!(legal(Piece::BLACK_PAWN, sq(1, 3), sq(3, 3), &b));
        assert!(!legal(Piece::BLACK_PAWN, sq(1, 3), sq(0, 3), &b));
    }

    #[test]
    fn never_moves_backward_or_sideways() {
        let b = board("8/8/8/8/3P4/8/8/8");
        assert!(!legal(Piece::WHITE_PAWN, sq(4, 3), sq(5, 3), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(4, 3), sq(4, 4), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(4, 3), sq(4, 2), &b));
    }

    #[test]
    fn double_step_only_from_start_row() {
        let b = board("8/8/8/8/8/4P3/8/8");
        assert!(legal(Piece::WHITE_PAWN, sq(5, 4), sq(4, 4), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(5, 4), sq(3, 4), &b));
    }

    #[test]
    fn double_step_needs_empty_destination() {
        let b = board("8/8/8/8/4p3/8/4P3/8");
        assert!(legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &b));
    }

    #[test]
    fn double_step_jumps_over_blocker() {
        // Only the destination is checked on a double step.
        let b = board("8/8/8/8/8/4n3/4P3/8");
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &b));
        assert!(legal(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &b));
    }

    #[test]
    fn forward_move_cannot_capture() {
        let b = board("8/8/8/8/8/4p3/4P3/8");
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &b));
    }

    #[test]
    fn diagonal_capture_needs_enemy() {
        let b = board("8/8/8/8/8/3p1N2/4P3/8");
        assert!(legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 3), &b));
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 5), &b));

        let empty = board("8/8/8/8/8/8/4P3/8");
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(5, 3), &empty));
    }

    #[test]
    fn black_diagonal_capture() {
        let b = board("8/8/8/3p4/2P1P3/8/8/8");
        assert!(legal(Piece::BLACK_PAWN, sq(3, 3), sq(4, 2), &b));
        assert!(legal(Piece::BLACK_PAWN, sq(3, 3), sq(4, 4), &b));
        assert!(!legal(Piece::BLACK_PAWN, sq(3, 3), sq(2, 2), &b));
    }

    #[test]
    fn no_two_square_diagonal() {
        let b = board("8/8/8/8/2p5/8/4P3/8");
        assert!(!legal(Piece::WHITE_PAWN, sq(6, 4), sq(4, 2), &b));
    }
}
