//! 64-bit square-set primitive.
//!
//! A `Bitboard` is a set of board squares packed into a `u64`, one bit per
//! square with bit `i` standing for square index `i`. Set algebra is plain
//! integer bit math; iteration walks set bits in ascending order by clearing
//! the lowest set bit of a local copy each step, so visiting costs
//! O(popcount) rather than O(64).

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::board::board_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// One-hot board for a single square.
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square) != 0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub fn union_with(&mut self, other: Bitboard) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the member squares in ascending index order.
    ///
    /// The iterator owns a copy of the bits; the source board is never
    /// mutated by iteration.
    #[inline]
    pub const fn squares(self) -> SquareIter {
        SquareIter(self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut board = Bitboard::EMPTY;
        for square in iter {
            board.insert(square);
        }
        board
    }
}

/// Ascending set-bit iterator produced by [`Bitboard::squares`].
pub struct SquareIter(u64);

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareIter {}

/// Rank-by-rank diagram with rank 8 on top, for debugging and test output.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let square = rank * 8 + file;
                write!(f, "{} ", if self.contains(square) { 'X' } else { '.' })?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
