//! Error types for rule lookups and board placement parsing.

use crate::piece_kind::PieceKind;

/// Failures of the legality rules themselves, as opposed to illegal moves.
///
/// An illegal move is an ordinary `false`; a `RuleError` means the question
/// could not be answered under the active rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The active rule set has no movement rule for this piece kind.
    ///
    /// The Knight has none unless [`KnightRule::LShape`](crate::KnightRule::LShape)
    /// is enabled.
    #[error("no movement rule for {kind}")]
    MissingRule {
        /// The piece kind that was queried.
        kind: PieceKind,
    },
}

/// Errors that occur when parsing a board placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = Black's back rank).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
