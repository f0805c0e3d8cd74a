//! Piece-placement strings for [`Board`].
//!
//! The format is the placement field of FEN, read top to bottom: the first
//! `/`-separated group is row 0 (Black's back rank), digits count empty
//! squares, uppercase letters are White and lowercase letters are Black.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a placement string into a board.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let sq = u8::try_from(col)
                    .ok()
                    .and_then(|c| Square::new(row as u8, c))
                    .ok_or(PlacementError::BadRowLength {
                        row,
                        length: col + 1,
                    })?;
                board.place(sq, piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }

    /// Serialize the board into a placement string.
    pub fn placement(&self) -> String {
        Placement(self).to_string()
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        Board::from_placement(s)
    }
}

struct Placement<'a>(&'a Board);

impl fmt::Display for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.0.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
