//! A set of squares packed into a 64-bit integer.

use std::fmt;

use crate::square::Square;

/// A set of board squares, one bit per square (row-major).
///
/// Used for the highlighted squares of a selection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new set with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Pop the lowest square, returning it and the remaining set.
    #[inline]
    pub const fn pop_lsb(self) -> Option<(Square, SquareSet)> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            Some((sq, SquareSet(self.0 & (self.0 - 1))))
        }
    }

    /// Iterate over the squares in row-major order.
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

/// Iterator over the squares of a [`SquareSet`].
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let (sq, rest) = self.0.pop_lsb()?;
        self.0 = rest;
        Some(sq)
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        iter.into_iter().fold(SquareSet::EMPTY, SquareSet::with)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn with_and_contains() {
        let set = SquareSet::EMPTY.with(sq(4, 4)).with(sq(0, 7));
        assert!(set.contains(sq(4, 4)));
        assert!(set.contains(sq(0, 7)));
        assert!(!set.contains(sq(7, 0)));
        assert_eq!(set.count(), 2);
        assert!(!set.is_empty());
        assert!(SquareSet::EMPTY.is_empty());
    }

    #[test]
    fn iteration_is_row_major() {
        let set: SquareSet = [sq(5, 1), sq(2, 6), sq(2, 3)].into_iter().collect();
        let order: Vec<Square> = set.iter().collect();
        assert_eq!(order, vec![sq(2, 3), sq(2, 6), sq(5, 1)]);
    }
}
