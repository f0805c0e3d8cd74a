//! Selection states and the result of a click.

use hotseat_core::{MoveOutcome, Square, SquareSet};

/// Whether a piece is currently picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected; the next click may pick a piece.
    #[default]
    Idle,
    /// The piece on this square is selected; the next click is its destination.
    Selected(Square),
}

impl Selection {
    /// Return the selected square, if any.
    #[inline]
    pub const fn square(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected(sq) => Some(sq),
        }
    }
}

/// What a single click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Idle click on an empty square or an opponent's piece. No change.
    Ignored,
    /// A piece of the side to move was picked up.
    Selected {
        /// The selected square.
        square: Square,
        /// Squares the piece may move to.
        targets: SquareSet,
    },
    /// The selected piece moved and the turn passed.
    Moved(MoveOutcome),
    /// The click was not a legal destination; the selection was dropped and
    /// the turn did not change.
    Deselected,
}
