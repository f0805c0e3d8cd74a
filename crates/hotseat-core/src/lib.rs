//! Core chess types for same-screen play: board, pieces, movement rules and
//! move resolution.

mod board;
mod color;
mod error;
mod piece;
mod piece_kind;
mod placement;
mod resolve;
mod rules;
mod square;
mod square_set;
mod trays;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{PlacementError, RuleError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use resolve::{MoveOutcome, attempt_move};
pub use rules::{KnightRule, RuleSet, is_legal_move, legal_targets};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
pub use trays::LostPieces;
