use nonet_core::{Board, GroupRegistry};

use crate::{PendingRemovals, technique::{BoxedTechnique, Technique}};

const NAME: &str = "radiation";

/// Group-intersection elimination, covering both "pointing" and "claiming".
///
/// For an ordered pair of groups sharing more than one empty cell, any digit
/// whose only remaining home in the first group lies inside the overlap must
/// be placed there, so the digit is removed from the rest of the second
/// group. Sweeping ordered pairs yields both directions, and NRC regions
/// participate like any other group.
#[derive(Debug, Default, Clone, Copy)]
pub struct Radiation {}

impl Radiation {
    /// Creates a new `Radiation` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for Radiation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn eliminate(&self, board: &Board, groups: &GroupRegistry, pending: &mut PendingRemovals) {
        let empty = board.empty_cells();
        for source in groups {
            let source_empty = source.cells() & empty;
            for target in groups {
                if source.name() == target.name() {
                    continue;
                }
                let overlap = source_empty & target.cells();
                if overlap.len() < 2 {
                    continue;
                }
                let outside_source = source_empty - overlap;
                let locked =
                    board.candidates_over(overlap) - board.candidates_over(outside_source);
                if locked.is_empty() {
                    continue;
                }
                let detail = format!("overlap of {} and {}", source.name(), target.name());
                for cell in (target.cells() & empty) - overlap {
                    pending.schedule(board, cell, locked, NAME, detail.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nonet_core::{Cell, Digit, Variant};

    use super::*;
    use crate::{technique::GroupElimination, testing::TechniqueTester};

    // In box 1 the digit 1 is confined to row 1 (rows 2 and 3 of the box are
    // blocked), so 1 radiates out of the rest of row 1.
    const POINTING_ROWS: [&str; 9] = [
        ".........",
        "...1.....",
        "......1..",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    ];

    #[test]
    fn test_pointing_pair_removes_digit_from_row() {
        TechniqueTester::from_rows(Variant::Classic, &POINTING_ROWS)
            .apply_once(&GroupElimination::new())
            .apply_once(&Radiation::new())
            .assert_removed(Cell::new(0, 4), [Digit::D1])
            .assert_removed(Cell::new(0, 8), [Digit::D1])
            // Inside the overlap the digit survives.
            .assert_candidates_contain(Cell::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_claiming_removes_digit_from_box() {
        // Confine 1 within row 1 to columns 1-3, so it leaves the rest of
        // box 1.
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Classic, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let one = nonet_core::DigitSet::from_digit(Digit::D1);
        for col in 3..9 {
            board.remove_candidates(Cell::new(0, col), one);
        }

        TechniqueTester::new(puzzle)
            .apply_once(&Radiation::new())
            .assert_removed(Cell::new(1, 0), [Digit::D1])
            .assert_removed(Cell::new(2, 2), [Digit::D1])
            .assert_candidates_contain(Cell::new(0, 1), Digit::D1);
    }

    #[test]
    fn test_single_cell_overlap_is_ignored() {
        // Leave exactly one empty cell in the overlap of row 1 and box 1.
        const ROWS: [&str; 9] = [
            ".12......",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ];
        let mut puzzle = nonet_core::Puzzle::new(Variant::Classic, &ROWS).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        // Confine 3 to R1C1 within row 1 so a two-cell overlap would fire.
        let three = nonet_core::DigitSet::from_digit(Digit::D3);
        for col in 3..9 {
            board.remove_candidates(Cell::new(0, col), three);
        }

        TechniqueTester::new(puzzle)
            .apply_once(&Radiation::new())
            .assert_no_change(Cell::new(1, 1))
            .assert_no_change(Cell::new(2, 2));
    }

    #[test]
    fn test_nrc_region_radiates_into_row() {
        // Confine 5 within nrc 1 (rows 2-4, cols 2-4) to its top row, which
        // lies inside board row 2. The digit then leaves the rest of row 2.
        let mut puzzle =
            nonet_core::Puzzle::new(Variant::Nrc, &["........."; 9]).unwrap();
        let (board, _ledger, _groups) = puzzle.parts_mut();
        let five = nonet_core::DigitSet::from_digit(Digit::D5);
        for row in 2..4 {
            for col in 1..4 {
                board.remove_candidates(Cell::new(row, col), five);
            }
        }

        TechniqueTester::new(puzzle)
            .apply_once(&Radiation::new())
            .assert_removed(Cell::new(1, 0), [Digit::D5])
            .assert_removed(Cell::new(1, 8), [Digit::D5])
            .assert_candidates_contain(Cell::new(1, 2), Digit::D5);
    }
}
