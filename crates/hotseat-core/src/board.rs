//! The board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Back-rank order shared by both sides, from col 0 to col 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement for every square. The single source of truth for where
/// pieces stand; holds at most one piece per square by construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Black occupies rows 0-1, White rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            board.squares[row_col(0, col)] = Some(Piece::new(kind, Color::Black));
            board.squares[row_col(1, col)] = Some(Piece::BLACK_PAWN);
            board.squares[row_col(6, col)] = Some(Piece::WHITE_PAWN);
            board.squares[row_col(7, col)] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put a piece on a square, returning whatever stood there before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Move whatever stands on `from` to `to`, returning the piece that `to` held.
    ///
    /// `from` is left empty. No rules are consulted.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from.index()].take();
        std::mem::replace(&mut self.squares[to.index()], moving)
    }

    /// Iterate over every occupied square and its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            highlighted: SquareSet::EMPTY,
        }
    }

    /// Return a pretty-printable wrapper that marks `highlighted` squares.
    pub fn pretty_with(&self, highlighted: SquareSet) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            highlighted,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

#[inline]
const fn row_col(row: u8, col: u8) -> usize {
    (row * 8 + col) as usize
}

/// Wrapper for printing a board as an 8x8 grid, row 0 on top.
///
/// Highlighted squares are bracketed: `[ ]` when empty, `[p]` when the
/// square holds a capturable piece.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    highlighted: SquareSet,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0  1  2  3  4  5  6  7")?;
        for row in 0u8..8 {
            write!(f, "{row} ")?;
            for col in 0u8..8 {
                let Some(sq) = Square::new(row, col) else {
                    continue;
                };
                let c = self.board.piece_at(sq).map_or('.', Piece::letter);
                if self.highlighted.contains(sq) {
                    let c = if c == '.' { ' ' } else { c };
                    write!(f, "[{c}]")?;
                } else {
                    write!(f, " {c} ")?;
                }
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_has_32_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(sq(0, 0)), Some(Piece::BLACK_ROOK));
        assert_eq!(board.piece_at(sq(0, 1)), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_at(sq(0, 3)), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(sq(0, 4)), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(sq(7, 2)), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.piece_at(sq(7, 3)), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(sq(7, 4)), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq(7, 7)), Some(Piece::WHITE_ROOK));
        for col in 0..8 {
            assert_eq!(board.piece_at(sq(1, col)), Some(Piece::BLACK_PAWN));
            assert_eq!(board.piece_at(sq(6, col)), Some(Piece::WHITE_PAWN));
            for row in 2..6 {
                assert!(!board.is_occupied(sq(row, col)));
            }
        }
    }

    #[test]
    fn colors_by_row() {
        let board = Board::starting_position();
        for (sq, piece) in board.pieces() {
            let expected = if sq.row() < 2 { Color::Black } else { Color::White };
            assert_eq!(piece.color(), expected, "wrong color at {sq}");
        }
    }

    #[test]
    fn place_replaces_occupant() {
        let mut board = Board::empty();
        assert_eq!(board.place(sq(4, 4), Piece::WHITE_KING), None);
        assert_eq!(board.place(sq(4, 4), Piece::BLACK_KING), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq(4, 4)), Some(Piece::BLACK_KING));
        assert!(board.is_occupied(sq(4, 4)));
    }

    #[test]
    fn relocate_returns_displaced_piece() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Piece::WHITE_ROOK);
        board.place(sq(3, 6), Piece::BLACK_BISHOP);
        let displaced = board.relocate(sq(3, 3), sq(3, 6));
        assert_eq!(displaced, Some(Piece::BLACK_BISHOP));
        assert_eq!(board.piece_at(sq(3, 6)), Some(Piece::WHITE_ROOK));
        assert!(!board.is_occupied(sq(3, 3)));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains(" r  n  b  q  k  b  n  r "));
        assert!(output.contains(" R  N  B  Q  K  B  N  R "));
        assert_eq!(output.lines().count(), 9);
    }

    #[test]
    fn pretty_print_marks_highlights() {
        let mut board = Board::empty();
        board.place(sq(0, 1), Piece::new(PieceKind::Pawn, Color::Black));
        let marks = SquareSet::EMPTY.with(sq(0, 0)).with(sq(0, 1));
        let output = format!("{}", board.pretty_with(marks));
        assert!(output.contains("0 [ ][p] . "));
    }
}
