use nonet_core::{Board, DigitSet, GroupRegistry};

use crate::{PendingRemovals, technique::{BoxedTechnique, Technique}};

const NAME: &str = "simple elimination";

/// Basic group elimination: digits already placed in a group cannot be
/// candidates of that group's empty cells.
///
/// For each empty cell the technique repeatedly picks, among the groups
/// containing the cell, the one whose placed digits overlap the remaining
/// candidates the most, and schedules that overlap as one removal batch.
/// The greedy order only affects the granularity of the explanation ledger;
/// the final candidate set equals removing the union of all placed digits
/// across the cell's groups.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupElimination {}

impl GroupElimination {
    /// Creates a new `GroupElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for GroupElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn eliminate(&self, board: &Board, groups: &GroupRegistry, pending: &mut PendingRemovals) {
        for cell in board.empty_cells() {
            let mut working = board.candidates_at(cell);
            loop {
                let mut best: Option<(&nonet_core::Group, DigitSet)> = None;
                for group in groups.containing(cell) {
                    let common = working & board.placed_in(group.cells());
                    // Ties go to the first group in registry order.
                    if common.len() > best.as_ref().map_or(0, |(_, c)| c.len()) {
                        best = Some((group, common));
                    }
                }
                let Some((group, common)) = best else {
                    break;
                };
                pending.schedule(board, cell, common, NAME, group.name());
                working -= common;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nonet_core::{Cell, Digit, Variant};

    use super::*;
    use crate::testing::TechniqueTester;

    const CLASSIC: [&str; 9] = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];

    #[test]
    fn test_removes_placed_digits_from_all_groups() {
        TechniqueTester::from_rows(Variant::Classic, &CLASSIC)
            .apply_once(&GroupElimination::new())
            // Row 1 holds {5,3,7}, column 3 holds {8,1,4}, box 1 holds {7,1,9,5}.
            .assert_candidates(Cell::new(0, 3), [Digit::D2, Digit::D6]);
    }

    #[test]
    fn test_candidates_equal_union_of_group_digits() {
        let tester = TechniqueTester::from_rows(Variant::Classic, &CLASSIC)
            .apply_once(&GroupElimination::new());
        let puzzle = tester.puzzle();
        for cell in puzzle.board().empty_cells() {
            let mut expected = nonet_core::DigitSet::FULL;
            for group in puzzle.groups().containing(cell) {
                expected -= puzzle.board().placed_in(group.cells());
            }
            assert_eq!(puzzle.candidates(cell), expected, "cell {cell}");
        }
    }

    #[test]
    fn test_ledger_has_one_entry_per_greedy_round() {
        let tester = TechniqueTester::from_rows(Variant::Classic, &CLASSIC)
            .apply_once(&GroupElimination::new());
        let puzzle = tester.puzzle();
        let entries = puzzle.explanations(Cell::new(0, 3));
        assert!(!entries.is_empty());
        // Each round removes a disjoint batch, attributed to one group.
        let mut seen = nonet_core::DigitSet::EMPTY;
        for entry in entries {
            assert_eq!(entry.technique(), "simple elimination");
            assert!((seen & entry.digits()).is_empty());
            seen |= entry.digits();
        }
    }

    #[test]
    fn test_second_pass_is_a_fixpoint() {
        let mut tester = TechniqueTester::from_rows(Variant::Classic, &CLASSIC)
            .apply_once(&GroupElimination::new())
            .apply_once(&GroupElimination::new());
        for cell in tester.puzzle().board().empty_cells() {
            tester = tester.assert_no_change(cell);
        }
    }

    #[test]
    fn test_nrc_groups_participate() {
        // (1,1) lies in nrc 1; a digit placed elsewhere in nrc 1 is removed
        // from (1,1) even when its row, column, and box avoid it.
        TechniqueTester::from_rows(
            Variant::Nrc,
            &[
                ".........",
                ".........",
                "...4.....",
                ".........",
                ".........",
                ".........",
                ".........",
                ".........",
                ".........",
            ],
        )
        .apply_once(&GroupElimination::new())
        .assert_removed(Cell::new(1, 1), [Digit::D4]);
    }
}
