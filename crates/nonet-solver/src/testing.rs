//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] applies a technique through the regular
//! schedule-then-apply cycle and offers fluent assertions about which
//! candidates were removed.

use nonet_core::{Board, Cell, Digit, DigitSet, Puzzle, Variant};

use crate::{PendingRemovals, Technique};

/// A test harness for verifying technique implementations.
///
/// Tracks the board state before and after each application so tests can
/// assert on removals without repeating bookkeeping. All assertion methods
/// panic with descriptive messages and return `self` for chaining.
///
/// # Examples
///
/// ```
/// use nonet_core::{Cell, Digit, Variant};
/// use nonet_solver::{technique::GroupElimination, testing::TechniqueTester};
///
/// TechniqueTester::from_rows(Variant::Classic, &[
///     "53..7....",
///     "6..195...",
///     ".98....6.",
///     "8...6...3",
///     "4..8.3..1",
///     "7...2...6",
///     ".6....28.",
///     "...419..5",
///     "....8..79",
/// ])
/// .apply_once(&GroupElimination::new())
/// .assert_removed(Cell::new(0, 2), [Digit::D5, Digit::D3]);
/// ```
#[derive(Debug)]
pub struct TechniqueTester {
    puzzle: Puzzle,
    before: Board,
}

impl TechniqueTester {
    /// Creates a tester from an existing puzzle.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let before = puzzle.board().clone();
        Self { puzzle, before }
    }

    /// Creates a tester from a 9-row grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid is malformed.
    #[track_caller]
    pub fn from_rows(variant: Variant, rows: &[&str]) -> Self {
        Self::new(Puzzle::new(variant, rows).expect("test grid must be well-formed"))
    }

    /// Runs one schedule-and-apply cycle of a single technique.
    pub fn apply_once(mut self, technique: &dyn Technique) -> Self {
        self.before = self.puzzle.board().clone();
        let (board, ledger, groups) = self.puzzle.parts_mut();
        let mut pending = PendingRemovals::new();
        technique.eliminate(board, groups, &mut pending);
        let _ = pending.apply_and_clear(board, ledger);
        self
    }

    /// Asserts that the digits were candidates before the last application
    /// and are no longer candidates now.
    #[track_caller]
    pub fn assert_removed(self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> Self {
        for digit in digits {
            assert!(
                self.before.candidates_at(cell).contains(digit),
                "{digit} was not a candidate at {cell} before the technique ran"
            );
            assert!(
                !self.puzzle.candidates(cell).contains(digit),
                "{digit} should have been removed at {cell}, candidates are {}",
                self.puzzle.candidates(cell)
            );
        }
        self
    }

    /// Asserts the exact candidate set of a cell.
    #[track_caller]
    pub fn assert_candidates(self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> Self {
        let expected: DigitSet = digits.into_iter().collect();
        assert_eq!(
            self.puzzle.candidates(cell),
            expected,
            "candidates at {cell}"
        );
        self
    }

    /// Asserts that a digit is still a candidate at a cell.
    #[track_caller]
    pub fn assert_candidates_contain(self, cell: Cell, digit: Digit) -> Self {
        assert!(
            self.puzzle.candidates(cell).contains(digit),
            "{digit} should still be a candidate at {cell}, candidates are {}",
            self.puzzle.candidates(cell)
        );
        self
    }

    /// Asserts that the last application left a cell's candidates unchanged.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        assert_eq!(
            self.puzzle.candidates(cell),
            self.before.candidates_at(cell),
            "candidates at {cell} changed"
        );
        self
    }

    /// Returns the puzzle under test.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Consumes the tester and returns the puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }
}
