use std::collections::BTreeMap;

use nonet_core::{Board, Cell, DigitSet, GroupRegistry};
use tinyvec::ArrayVec;

use crate::{PendingRemovals, technique::{BoxedTechnique, Technique}};

const NAME: &str = "naked subgroup";

/// Perfect-subgroup ("naked subset") elimination.
///
/// Within a group, if a candidate set of size *k* is shared by exactly *k*
/// cells (with *k* > 1), those digits are locked into those cells and can be
/// removed from every other empty cell of the group. A pair of cells both
/// holding `{1,7}` is the *k* = 2 case; the technique handles every size up
/// to 8.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubgroup {}

impl NakedSubgroup {
    /// Creates a new `NakedSubgroup` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSubgroup {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn eliminate(&self, board: &Board, groups: &GroupRegistry, pending: &mut PendingRemovals) {
        for group in groups {
            let empty = group.cells() & board.empty_cells();

            // Partition the group's empty cells by identical candidate sets.
            let mut subgroups: BTreeMap<DigitSet, ArrayVec<[Cell; 9]>> = BTreeMap::new();
            for cell in empty {
                subgroups
                    .entry(board.candidates_at(cell))
                    .or_default()
                    .push(cell);
            }

            for (digits, cells) in &subgroups {
                if cells.len() != digits.len() || cells.len() < 2 {
                    continue;
                }
                let members: nonet_core::CellSet = cells.iter().copied().collect();
                let detail = format!("{digits} in {}", group.name());
                for other in empty - members {
                    pending.schedule(board, other, *digits, NAME, detail.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nonet_core::{Digit, Variant};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_imperfect_subgroup_does_nothing() {
        // Two cells sharing a three-digit set lock nothing in.
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Classic, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let triple = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        board.remove_candidates(nonet_core::Cell::new(0, 0), DigitSet::FULL - triple);
        board.remove_candidates(nonet_core::Cell::new(0, 3), DigitSet::FULL - triple);

        TechniqueTester::new(puzzle)
            .apply_once(&NakedSubgroup::new())
            .assert_no_change(nonet_core::Cell::new(0, 5))
            .assert_no_change(nonet_core::Cell::new(0, 0));
    }

    #[test]
    fn test_perfect_pair_is_applied() {
        // Construct a direct pair: two cells in row 1 with candidates {1,2}.
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Classic, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let others = DigitSet::FULL - DigitSet::from_iter([Digit::D1, Digit::D2]);
        board.remove_candidates(nonet_core::Cell::new(0, 0), others);
        board.remove_candidates(nonet_core::Cell::new(0, 3), others);

        TechniqueTester::new(puzzle)
            .apply_once(&NakedSubgroup::new())
            .assert_removed(nonet_core::Cell::new(0, 5), [Digit::D1, Digit::D2])
            // Cells outside row 1 are untouched.
            .assert_no_change(nonet_core::Cell::new(1, 1));
    }

    #[test]
    fn test_perfect_triple_is_applied() {
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Classic, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let triple = DigitSet::from_iter([Digit::D1, Digit::D6, Digit::D7]);
        for col in [1, 4, 8] {
            board.remove_candidates(nonet_core::Cell::new(2, col), DigitSet::FULL - triple);
        }

        TechniqueTester::new(puzzle)
            .apply_once(&NakedSubgroup::new())
            .assert_removed(nonet_core::Cell::new(2, 0), [Digit::D1, Digit::D6, Digit::D7]);
    }

    #[test]
    fn test_subgroup_ledger_detail_names_digits_and_group() {
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Classic, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
        board.remove_candidates(nonet_core::Cell::new(0, 0), DigitSet::FULL - pair);
        board.remove_candidates(nonet_core::Cell::new(0, 3), DigitSet::FULL - pair);

        let tester = TechniqueTester::new(puzzle).apply_once(&NakedSubgroup::new());
        let entries = tester.puzzle().explanations(nonet_core::Cell::new(0, 5));
        assert!(
            entries
                .iter()
                .any(|e| e.technique() == "naked subgroup" && e.detail() == "{1,2} in row 1")
        );
    }

    #[test]
    fn test_no_change_on_fresh_grid() {
        TechniqueTester::from_rows(Variant::Classic, &["........."; 9])
            .apply_once(&NakedSubgroup::new())
            .assert_no_change(nonet_core::Cell::new(0, 0))
            .assert_no_change(nonet_core::Cell::new(4, 4));
    }
}
