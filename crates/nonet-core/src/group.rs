//! Constraint groups and the per-variant group registry.
//!
//! A group is a named set of 9 cells that must contain each digit exactly
//! once. The registry for a puzzle is built once from its [`Variant`] and
//! never mutated; every elimination technique reads it.

use std::fmt::{self, Display};

use crate::{Cell, CellSet};

/// A named constraint region of 9 cells.
///
/// Names follow the conventional scheme: `row 1`-`row 9`, `col 1`-`col 9`,
/// `sqr 1`-`sqr 9` for the 3×3 boxes, and `nrc 1`-`nrc 4` for the extra
/// regions of the NRC variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    cells: CellSet,
}

impl Group {
    fn new(name: String, cells: CellSet) -> Self {
        debug_assert_eq!(cells.len(), 9);
        Self { name, cells }
    }

    /// Returns the group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's member cells.
    #[must_use]
    pub const fn cells(&self) -> CellSet {
        self.cells
    }

    /// Returns `true` if the cell belongs to this group.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(cell)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A puzzle variant, selecting which groups the registry is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The classic 9×9 puzzle: rows, columns, and 3×3 boxes.
    #[default]
    Classic,
    /// Classic groups plus the four extra 3×3 regions of NRC-style puzzles,
    /// covering rows/columns 1-3 and 5-7 in each axis combination.
    Nrc,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
            Self::Nrc => f.write_str("nrc"),
        }
    }
}

/// Top-left corners of the four NRC regions.
const NRC_ORIGINS: [(u8, u8); 4] = [(1, 1), (1, 5), (5, 1), (5, 5)];

/// The ordered, immutable set of groups for one puzzle instance.
///
/// Construction is purely structural and cannot fail. The registry is shared
/// read-only across a puzzle and its clones.
///
/// # Examples
///
/// ```
/// use nonet_core::{GroupRegistry, Variant};
///
/// let classic = GroupRegistry::build(Variant::Classic);
/// assert_eq!(classic.len(), 27);
///
/// let nrc = GroupRegistry::build(Variant::Nrc);
/// assert_eq!(nrc.len(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    /// Builds the registry for a variant: 9 rows, 9 columns, and 9 boxes,
    /// plus the 4 NRC regions for [`Variant::Nrc`].
    #[must_use]
    pub fn build(variant: Variant) -> Self {
        let mut groups = Vec::with_capacity(31);
        for n in 0..9 {
            let cells = Cell::ALL.iter().filter(|cell| cell.row() == n).copied();
            groups.push(Group::new(format!("row {}", n + 1), cells.collect()));
        }
        for n in 0..9 {
            let cells = Cell::ALL.iter().filter(|cell| cell.col() == n).copied();
            groups.push(Group::new(format!("col {}", n + 1), cells.collect()));
        }
        for n in 0..9 {
            let cells = Cell::ALL
                .iter()
                .filter(|cell| cell.box_index() == n)
                .copied();
            groups.push(Group::new(format!("sqr {}", n + 1), cells.collect()));
        }
        if variant == Variant::Nrc {
            for (i, (row0, col0)) in NRC_ORIGINS.into_iter().enumerate() {
                let cells = Cell::ALL
                    .iter()
                    .filter(|cell| {
                        (row0..row0 + 3).contains(&cell.row())
                            && (col0..col0 + 3).contains(&cell.col())
                    })
                    .copied();
                groups.push(Group::new(format!("nrc {}", i + 1), cells.collect()));
            }
        }
        Self { groups }
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the registry has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns an iterator over all groups in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Returns an iterator over the groups containing a cell, in registry
    /// order.
    pub fn containing(&self, cell: Cell) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(move |group| group.contains(cell))
    }
}

impl<'a> IntoIterator for &'a GroupRegistry {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_nine_cells() {
        for variant in [Variant::Classic, Variant::Nrc] {
            for group in GroupRegistry::build(variant).iter() {
                assert_eq!(group.cells().len(), 9, "group {group}");
            }
        }
    }

    #[test]
    fn test_classic_membership_counts() {
        let registry = GroupRegistry::build(Variant::Classic);
        for cell in Cell::ALL {
            assert_eq!(registry.containing(cell).count(), 3, "cell {cell}");
        }
    }

    #[test]
    fn test_nrc_membership_counts() {
        let registry = GroupRegistry::build(Variant::Nrc);
        // Cells inside an NRC region gain a fourth group.
        assert_eq!(registry.containing(Cell::new(1, 1)).count(), 4);
        assert_eq!(registry.containing(Cell::new(3, 7)).count(), 4);
        assert_eq!(registry.containing(Cell::new(7, 7)).count(), 4);
        assert_eq!(registry.containing(Cell::new(0, 0)).count(), 3);
        assert_eq!(registry.containing(Cell::new(4, 4)).count(), 3);
    }

    #[test]
    fn test_nrc_regions_are_disjoint() {
        let registry = GroupRegistry::build(Variant::Nrc);
        let nrc: Vec<_> = registry
            .iter()
            .filter(|group| group.name().starts_with("nrc"))
            .collect();
        assert_eq!(nrc.len(), 4);
        for (i, a) in nrc.iter().enumerate() {
            for b in &nrc[i + 1..] {
                assert!((a.cells() & b.cells()).is_empty());
            }
        }
    }

    #[test]
    fn test_group_names() {
        let registry = GroupRegistry::build(Variant::Nrc);
        let names: Vec<_> = registry.iter().map(Group::name).collect();
        assert_eq!(names[0], "row 1");
        assert_eq!(names[9], "col 1");
        assert_eq!(names[18], "sqr 1");
        assert_eq!(names[30], "nrc 4");
    }

    #[test]
    fn test_box_layout() {
        let registry = GroupRegistry::build(Variant::Classic);
        let sqr7 = registry.iter().find(|g| g.name() == "sqr 7").unwrap();
        // sqr 7 covers rows 6-8, columns 0-2.
        assert!(sqr7.contains(Cell::new(6, 0)));
        assert!(sqr7.contains(Cell::new(8, 2)));
        assert!(!sqr7.contains(Cell::new(5, 0)));
    }

    #[test]
    fn test_nrc_region_offsets() {
        let registry = GroupRegistry::build(Variant::Nrc);
        let nrc2 = registry.iter().find(|g| g.name() == "nrc 2").unwrap();
        // nrc 2 covers rows 1-3, columns 5-7.
        assert!(nrc2.contains(Cell::new(1, 5)));
        assert!(nrc2.contains(Cell::new(3, 7)));
        assert!(!nrc2.contains(Cell::new(1, 4)));
    }
}
