//! Captured pieces, kept per color in capture order.

use crate::color::Color;
use crate::piece::Piece;

/// The two lost-piece sequences.
///
/// A captured piece is filed under its *own* color: `lost(Color::White)`
/// holds the white pieces that have been taken. Sequences only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LostPieces {
    by_color: [Vec<Piece>; Color::COUNT],
}

impl LostPieces {
    /// Create empty trays.
    pub fn new() -> LostPieces {
        LostPieces::default()
    }

    /// Append a captured piece to the tray of its color.
    pub fn record(&mut self, captured: Piece) {
        self.by_color[captured.color().index()].push(captured);
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn lost(&self, color: Color) -> &[Piece] {
        &self.by_color[color.index()]
    }

    /// Total number of captured pieces of both colors.
    pub fn len(&self) -> usize {
        self.by_color.iter().map(Vec::len).sum()
    }

    /// Return `true` if nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
