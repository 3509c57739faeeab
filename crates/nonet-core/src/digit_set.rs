//! A set of candidate digits for a single cell.
//!
//! [`DigitSet`] is a 16-bit bitset where bits 0-8 represent digits 1-9,
//! giving cheap set operations and ascending-order iteration.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::Digit;

const FULL_BITS: u16 = 0x1ff;

/// A set of digits 1-9, represented as a bitset.
///
/// # Set Operations
///
/// ```
/// use nonet_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a - b, DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 |= Self::from_digit(digit).0;
        self.0 != before
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 &= !Self::from_digit(digit).0;
        self.0 != before
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::from_digit(digit).0 != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set has exactly one element.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Digit::try_from_value(value)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every digit in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter(self.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for DigitSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter(u16);

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}
impl FusedIterator for DigitSetIter {}

impl Display for DigitSet {
    /// Formats the set as `{1,5,9}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}
