//! Board squares addressed by (row, col).

use std::fmt;

/// A square on the 8x8 board, stored as `row * 8 + col`.
///
/// Row 0 is Black's back rank and row 7 is White's back rank; col 0 is the
/// leftmost column as drawn on screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, as produced by pixel mapping
    /// or by stepping off an existing square.
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Step by a row and column delta, returning `None` when leaving the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::from_coords(self.row() as i32 + d_row as i32, self.col() as i32 + d_col as i32)
    }

    /// Signed (row, col) delta from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{}", self)
    }
}
