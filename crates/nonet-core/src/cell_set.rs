//! A set of board cells.
//!
//! [`CellSet`] is a 128-bit bitset over the 81 cells of the board, indexed in
//! row-major order. It backs group membership and empty-cell tracking, and
//! makes overlap computations between groups a couple of bit operations.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::Cell;

const ALL_BITS: u128 = (1 << 81) - 1;

/// A set of cells, represented as an 81-bit bitset.
///
/// # Examples
///
/// ```
/// use nonet_core::{Cell, CellSet};
///
/// let mut set = CellSet::new();
/// set.insert(Cell::new(0, 0));
/// set.insert(Cell::new(4, 4));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(4, 4)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet(u128);

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all 81 cells.
    pub const ALL: Self = Self(ALL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single cell.
    #[must_use]
    pub const fn from_cell(cell: Cell) -> Self {
        Self(1 << cell.index())
    }

    /// Inserts a cell. Returns `true` if the cell was not already present.
    pub const fn insert(&mut self, cell: Cell) -> bool {
        let before = self.0;
        self.0 |= Self::from_cell(cell).0;
        self.0 != before
    }

    /// Removes a cell. Returns `true` if the cell was present.
    pub const fn remove(&mut self, cell: Cell) -> bool {
        let before = self.0;
        self.0 &= !Self::from_cell(cell).0;
        self.0 != before
    }

    /// Returns `true` if the cell is in the set.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & Self::from_cell(cell).0 != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole cell if the set has exactly one element.
    #[must_use]
    pub const fn as_single(self) -> Option<Cell> {
        if self.0.count_ones() != 1 {
            return None;
        }
        Some(Cell::from_index(self.0.trailing_zeros() as usize))
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

    /// Returns the cells in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the cells in row-major order.
    #[must_use]
    pub const fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for CellSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for CellSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in row-major order.
#[derive(Debug, Clone)]
pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Cell::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}
impl FusedIterator for CellSetIter {}

impl Display for CellSet {
    /// Formats the set as a comma-separated list of cell labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
