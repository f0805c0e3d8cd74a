//! Text rendering of a game frame.

use std::fmt;

use hotseat_core::{Color, Piece};
use hotseat_game::{GameState, Selection};

use crate::layout::Layout;

/// One redraw: the board with highlights, whose turn it is, and both trays.
///
/// The selected square is also given as the pixel origin of its sprite.
pub struct Frame<'a> {
    pub game: &'a GameState,
    pub layout: &'a Layout,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.game;
        writeln!(f, "{}", game.board().pretty_with(game.highlighted()))?;
        match game.selection() {
            Selection::Idle => writeln!(f, "turn: {}", game.turn())?,
            Selection::Selected(sq) => {
                let (x, y) = self.layout.square_origin(sq);
                writeln!(f, "turn: {}  selected: {sq} at ({x}, {y})", game.turn())?;
            }
        }
        for color in Color::ALL {
            write!(f, "lost {color}:")?;
            write_pieces(f, game.lost().lost(color))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_pieces(f: &mut fmt::Formatter<'_>, pieces: &[Piece]) -> fmt::Result {
    for piece in pieces {
        write!(f, " {piece}")?;
    }
    Ok(())
}

/// Each captured piece with the pixel slot it is drawn at, in capture order.
pub struct TrayListing<'a> {
    pub game: &'a GameState,
    pub layout: &'a Layout,
}

impl fmt::Display for TrayListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::ALL {
            let pieces = self.game.lost().lost(color);
            writeln!(f, "{color} tray ({} lost)", pieces.len())?;
            for (index, piece) in pieces.iter().enumerate() {
                let (x, y) = self.layout.tray_slot(color, index);
                writeln!(f, "  #{index} {} at ({x}, {y})", piece.sprite_key())?;
            }
        }
        Ok(())
    }
}
