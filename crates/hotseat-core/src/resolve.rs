//! Playing a move: legality check, capture bookkeeping, relocation.

use tracing::info;

use crate::board::Board;
use crate::error::RuleError;
use crate::piece::Piece;
use crate::rules::{RuleSet, is_legal_move};
use crate::square::Square;
use crate::trays::LostPieces;

/// The result of [`attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing happened: `start` was empty or the move is illegal.
    Rejected,
    /// The piece now stands on the destination square.
    Played {
        /// The piece that moved.
        piece: Piece,
        /// The opposing piece removed from the destination, if any.
        captured: Option<Piece>,
    },
}

impl MoveOutcome {
    /// Return `true` if the board changed.
    #[inline]
    pub const fn is_played(self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// Try to move the piece on `start` to `end`.
///
/// If `start` is empty or the piece's rule rejects the move, the board and
/// trays are left untouched. Otherwise any piece on `end` is appended to the
/// tray of its own color, the mover is relocated and `start` is cleared.
///
/// Turn order is not checked here.
pub fn attempt_move(
    board: &mut Board,
    lost: &mut LostPieces,
    start: Square,
    end: Square,
    rules: &RuleSet,
) -> Result<MoveOutcome, RuleError> {
    let Some(piece) = board.piece_at(start) else {
        return Ok(MoveOutcome::Rejected);
    };

    if !is_legal_move(piece, start, end, board, rules)? {
        return Ok(MoveOutcome::Rejected);
    }

    let captured = board.relocate(start, end);
    if let Some(taken) = captured {
        lost.record(taken);
    }

    info!(
        color = %piece.color(),
        kind = %piece.kind(),
        from = %start,
        to = %end,
        captured = ?captured,
        "{} {} moved from {} to {}",
        piece.color(),
        piece.kind(),
        start,
        end,
    );

    Ok(MoveOutcome::Played { piece, captured })
}

#[cfg(test)]
mod tests {
    use super::{MoveOutcome, attempt_move};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::RuleError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::rules::{KnightRule, RuleSet};
    use crate::square::Square;
    use crate::trays::LostPieces;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn opening_pawn_double_step() {
        let mut board = Board::starting_position();
        let mut lost = LostPieces::new();
        let outcome =
            attempt_move(&mut board, &mut lost, sq(6, 4), sq(4, 4), &RuleSet::default()).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                piece: Piece::WHITE_PAWN,
                captured: None
            }
        );
        assert_eq!(board.piece_at(sq(4, 4)), Some(Piece::WHITE_PAWN));
        assert!(!board.is_occupied(sq(6, 4)));
        assert!(lost.is_empty());
    }

    #[test]
    fn empty_start_is_rejected() {
        let mut board = Board::starting_position();
        let before = board;
        let mut lost = LostPieces::new();
        let outcome =
            attempt_move(&mut board, &mut lost, sq(4, 4), sq(3, 4), &RuleSet::default()).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert!(!outcome.is_played());
        assert_eq!(board, before);
    }

    #[test]
    fn illegal_move_leaves_board_untouched() {
        let mut board = Board::starting_position();
        let before = board;
        let mut lost = LostPieces::new();
        let outcome =
            attempt_move(&mut board, &mut lost, sq(7, 0), sq(7, 4), &RuleSet::default()).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(board, before);
        assert!(lost.is_empty());
    }

    #[test]
    fn capture_files_piece_under_its_own_color() {
        let mut board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let mut lost = LostPieces::new();
        let outcome =
            attempt_move(&mut board, &mut lost, sq(4, 4), sq(3, 3), &RuleSet::default()).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                piece: Piece::WHITE_PAWN,
                captured: Some(Piece::BLACK_PAWN)
            }
        );
        assert_eq!(lost.lost(Color::Black), &[Piece::BLACK_PAWN]);
        assert!(lost.lost(Color::White).is_empty());
        assert_eq!(board.piece_at(sq(3, 3)), Some(Piece::WHITE_PAWN));
        assert!(!board.is_occupied(sq(4, 4)));
    }

    #[test]
    fn black_capturing_white_fills_white_tray() {
        let mut board = Board::from_placement("8/8/8/8/r6Q/8/8/8").unwrap();
        let mut lost = LostPieces::new();
        let outcome =
            attempt_move(&mut board, &mut lost, sq(4, 0), sq(4, 7), &RuleSet::default()).unwrap();
        assert!(outcome.is_played());
        assert_eq!(lost.lost(Color::White), &[Piece::WHITE_QUEEN]);
        assert!(lost.lost(Color::Black).is_empty());
    }

    #[test]
    fn knight_move_surfaces_missing_rule() {
        let mut board = Board::starting_position();
        let before = board;
        let mut lost = LostPieces::new();
        let err = attempt_move(&mut board, &mut lost, sq(7, 1), sq(5, 2), &RuleSet::default());
        assert_eq!(
            err,
            Err(RuleError::MissingRule {
                kind: PieceKind::Knight
            })
        );
        assert_eq!(board, before);

        let rules = RuleSet::default().with_knight(KnightRule::LShape);
        let outcome = attempt_move(&mut board, &mut lost, sq(7, 1), sq(5, 2), &rules).unwrap();
        assert!(outcome.is_played());
        assert_eq!(board.piece_at(sq(5, 2)), Some(Piece::WHITE_KNIGHT));
    }
}
