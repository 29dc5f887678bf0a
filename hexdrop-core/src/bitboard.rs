//! Fixed-size bitboard over the linear cell index

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::board::CELL_COUNT;

/// One bit per cell. The board has 77 cells, so a single `u128` holds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u128);

impl Bitboard {
    /// All bits zero.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Construct from raw bits. Bits at or past `CELL_COUNT` are dropped.
    pub const fn from_bits(bits: u128) -> Self {
        Bitboard(bits & Self::board_mask())
    }

    /// Raw bits
    pub const fn bits(self) -> u128 {
        self.0
    }

    const fn board_mask() -> u128 {
        (1u128 << CELL_COUNT) - 1
    }

    /// Copy with bit `index` set. Usable in const context.
    pub const fn with(self, index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Bitboard(self.0 | (1u128 << index))
    }

    /// Test whether bit `index` is set. Indices past the board read as unset.
    #[inline]
    pub const fn get(self, index: usize) -> bool {
        index < CELL_COUNT && (self.0 >> index) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < CELL_COUNT);
        self.0 |= 1u128 << index;
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.0 &= !(1u128 << index);
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set bits
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Iterate over indices of set bits, lowest first.
    pub fn iter_ones(self) -> BitIterator {
        BitIterator { bits: self.0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & Self::board_mask())
    }
}

/// Set listing, e.g. `{0, 1, 14}`
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter_ones().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u128,
}

impl Iterator for BitIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }
}
