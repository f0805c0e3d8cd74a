//! Move legality: one predicate per piece kind, dispatched on the kind.
//!
//! The predicates answer "may this piece go from `start` to `end` on this
//! board?" and nothing more. They never look at whose turn it is, never
//! consider king safety, and never check that `start` actually holds the
//! piece being asked about. Callers own those preconditions.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::fmt;

use crate::board::Board;
use crate::error::RuleError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::king_move;
use self::knights::knight_move;
use self::pawns::pawn_move;
use self::sliders::{bishop_move, queen_move, rook_move};

/// How Knight moves are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KnightRule {
    /// Knights have no movement rule; asking about one is a
    /// [`RuleError::MissingRule`]. This is the default.
    #[default]
    Unsupported,
    /// The conventional L-shaped jump onto an empty or enemy square.
    LShape,
}

impl KnightRule {
    /// Parse an option value (`unsupported` or `lshape`, case-insensitive).
    pub fn from_token(token: &str) -> Option<KnightRule> {
        match token.to_ascii_lowercase().as_str() {
            "unsupported" | "none" => Some(KnightRule::Unsupported),
            "lshape" | "l-shape" => Some(KnightRule::LShape),
            _ => None,
        }
    }
}

impl fmt::Display for KnightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnightRule::Unsupported => f.write_str("unsupported"),
            KnightRule::LShape => f.write_str("lshape"),
        }
    }
}

/// The set of movement rules in force for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleSet {
    /// Knight handling.
    pub knight: KnightRule,
}

impl RuleSet {
    /// Return this rule set with the given knight rule.
    pub const fn with_knight(self, knight: KnightRule) -> RuleSet {
        RuleSet { knight }
    }
}

/// Return whether `piece` may move from `start` to `end` on `board`.
///
/// Pure: the board is only read. Returns `Err` only when the rule set has
/// no rule for the piece's kind.
pub fn is_legal_move(
    piece: Piece,
    start: Square,
    end: Square,
    board: &Board,
    rules: &RuleSet,
) -> Result<bool, RuleError> {
    if piece.kind() == PieceKind::Knight && rules.knight == KnightRule::Unsupported {
        return Err(RuleError::MissingRule {
            kind: PieceKind::Knight,
        });
    }

    // A piece never "moves" onto its own square.
    if start == end {
        return Ok(false);
    }

    let legal = match piece.kind() {
        PieceKind::Pawn => pawn_move(piece, start, end, board),
        PieceKind::Knight => knight_move(piece, start, end, board),
        PieceKind::Bishop => bishop_move(piece, start, end, board),
        PieceKind::Rook => rook_move(piece, start, end, board),
        PieceKind::Queen => queen_move(piece, start, end, board),
        PieceKind::King => king_move(piece, start, end, board),
    };
    Ok(legal)
}

/// Return every square the piece on `start` may move to.
///
/// An empty `start` yields an empty set.
pub fn legal_targets(
    start: Square,
    board: &Board,
    rules: &RuleSet,
) -> Result<SquareSet, RuleError> {
    let Some(piece) = board.piece_at(start) else {
        return Ok(SquareSet::EMPTY);
    };

    let mut targets = SquareSet::EMPTY;
    for end in Square::all() {
        if is_legal_move(piece, start, end, board, rules)? {
            targets = targets.with(end);
        }
    }
    Ok(targets)
}

/// Return `true` if `piece` may finish on `end`: the square is empty or
/// holds an opposing piece.
#[inline]
fn can_land(piece: Piece, end: Square, board: &Board) -> bool {
    board
        .piece_at(end)
        .is_none_or(|occupant| piece.is_enemy_of(occupant))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    pub(crate) fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    pub(crate) fn legal(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
        is_legal_move(piece, start, end, board, &RuleSet::default()).unwrap()
    }

    #[test]
    fn knight_has_no_rule_by_default() {
        let b = Board::starting_position();
        let err = is_legal_move(Piece::WHITE_KNIGHT, sq(7, 1), sq(5, 2), &b, &RuleSet::default());
        assert_eq!(
            err,
            Err(RuleError::MissingRule {
                kind: PieceKind::Knight
            })
        );
        let err = legal_targets(sq(0, 6), &b, &RuleSet::default());
        assert!(err.is_err());
    }

    #[test]
    fn knight_rule_can_be_enabled() {
        let b = Board::starting_position();
        let rules = RuleSet::default().with_knight(KnightRule::LShape);
        let targets = legal_targets(sq(7, 1), &b, &rules).unwrap();
        let expected: SquareSet = [sq(5, 0), sq(5, 2)].into_iter().collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn zero_length_move_is_illegal() {
        let b = Board::starting_position();
        for (start, piece) in b.pieces() {
            if piece.kind() == PieceKind::Knight {
                continue;
            }
            assert!(!legal(piece, start, start, &b), "{piece:?} at {start}");
        }
    }

    #[test]
    fn predicates_are_pure() {
        let b = board("r3k2r/pp1n1ppp/2p5/3Qb3/4P3/2N5/PPP2PPP/R3KB1R");
        let snapshot = b;
        let rules = RuleSet::default().with_knight(KnightRule::LShape);
        for (start, piece) in b.pieces() {
            for end in Square::all() {
                let first = is_legal_move(piece, start, end, &b, &rules);
                let second = is_legal_move(piece, start, end, &b, &rules);
                assert_eq!(first, second, "{piece:?} {start} -> {end}");
            }
        }
        assert_eq!(b, snapshot);
    }

    #[test]
    fn legal_targets_of_empty_square() {
        let b = Board::starting_position();
        assert_eq!(legal_targets(sq(4, 4), &b, &RuleSet::default()), Ok(SquareSet::EMPTY));
    }

    #[test]
    fn opening_targets() {
        let b = Board::starting_position();
        let rules = RuleSet::default();
        let pawn: SquareSet = [sq(5, 4), sq(4, 4)].into_iter().collect();
        assert_eq!(legal_targets(sq(6, 4), &b, &rules), Ok(pawn));
        for start in [sq(7, 0), sq(7, 2), sq(7, 3), sq(7, 4)] {
            assert_eq!(legal_targets(start, &b, &rules), Ok(SquareSet::EMPTY), "{start}");
        }
    }

    #[test]
    fn knight_rule_tokens() {
        assert_eq!(KnightRule::from_token("LShape"), Some(KnightRule::LShape));
        assert_eq!(KnightRule::from_token("unsupported"), Some(KnightRule::Unsupported));
        assert_eq!(KnightRule::from_token("maybe"), None);
        assert_eq!(KnightRule::default(), KnightRule::Unsupported);
        assert_eq!(format!("{}", KnightRule::LShape), "lshape");
    }
}
