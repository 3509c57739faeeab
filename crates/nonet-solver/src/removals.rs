//! The pending-removal buffer shared by all elimination techniques.
//!
//! Techniques never mutate candidate sets directly. They schedule removals
//! here while reading the same pre-removal snapshot of the board, and the
//! buffer applies everything at once afterwards. This keeps one analysis
//! pass free of ordering effects between techniques.

use std::collections::BTreeMap;

use nonet_core::{Board, Cell, DigitSet, Elimination, Ledger};

/// A scheduled removal together with its explanation record.
#[derive(Debug, Clone)]
struct PendingEntry {
    cell: Cell,
    elimination: Elimination,
}

/// Buffer of candidate removals scheduled during one analysis pass.
///
/// # Examples
///
/// ```
/// use nonet_core::{Board, Cell, Digit, DigitSet, Ledger};
/// use nonet_solver::PendingRemovals;
///
/// let mut board: Board = "53..7....
/// 6..195...
/// .98....6.
/// 8...6...3
/// 4..8.3..1
/// 7...2...6
/// .6....28.
/// ...419..5
/// ....8..79".parse()?;
/// let mut ledger = Ledger::new();
/// let mut pending = PendingRemovals::new();
///
/// let cell = Cell::new(0, 2);
/// pending.schedule(
///     &board,
///     cell,
///     DigitSet::from_iter([Digit::D5, Digit::D3]),
///     "simple elimination",
///     "row 1",
/// );
/// let removed = pending.apply_and_clear(&mut board, &mut ledger);
/// assert_eq!(removed.values().sum::<usize>(), 2);
/// assert!(!board.candidates_at(cell).contains(Digit::D5));
/// # Ok::<(), nonet_core::FormatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PendingRemovals {
    entries: Vec<PendingEntry>,
}

impl PendingRemovals {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedules digits for removal from a cell.
    ///
    /// Only the digits still present in the cell's current candidate set are
    /// recorded; a schedule whose intersection with the candidates is empty
    /// is dropped silently, so vacuous eliminations never reach the ledger.
    ///
    /// Returns `true` if anything was scheduled.
    pub fn schedule(
        &mut self,
        board: &Board,
        cell: Cell,
        digits: DigitSet,
        technique: &'static str,
        detail: impl Into<String>,
    ) -> bool {
        let hits = digits & board.candidates_at(cell);
        if hits.is_empty() {
            return false;
        }
        self.entries.push(PendingEntry {
            cell,
            elimination: Elimination::new(technique, detail, hits),
        });
        true
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies all scheduled removals to the board, appending the matching
    /// explanation records to the ledger, and clears the buffer.
    ///
    /// Removal is idempotent, so overlapping schedules from different
    /// techniques are harmless. Returns the number of digits actually
    /// removed, per technique; a technique that only scheduled digits some
    /// earlier entry already removed contributes zero.
    pub fn apply_and_clear(
        &mut self,
        board: &mut Board,
        ledger: &mut Ledger,
    ) -> BTreeMap<&'static str, usize> {
        let mut removed_by_technique = BTreeMap::new();
        for entry in self.entries.drain(..) {
            let removed = board.remove_candidates(entry.cell, entry.elimination.digits());
            *removed_by_technique
                .entry(entry.elimination.technique())
                .or_insert(0) += removed.len();
            ledger.append(entry.cell, entry.elimination);
        }
        removed_by_technique
    }
}

#[cfg(test)]
mod tests {
    use nonet_core::Digit;

    use super::*;

    fn board() -> Board {
        Board::from_rows(&[
            "53..7....",
            "6..195...",
            ".98....6.",
            "8...6...3",
            "4..8.3..1",
            "7...2...6",
            ".6....28.",
            "...419..5",
            "....8..79",
        ])
        .unwrap()
    }

    #[test]
    fn test_vacuous_schedule_is_dropped() {
        let mut board = board();
        let cell = Cell::new(0, 2);
        board.remove_candidates(cell, DigitSet::from_digit(Digit::D5));

        let mut pending = PendingRemovals::new();
        assert!(!pending.schedule(
            &board,
            cell,
            DigitSet::from_digit(Digit::D5),
            "simple elimination",
            "row 1",
        ));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_apply_appends_ledger_and_counts() {
        let mut board = board();
        let mut ledger = Ledger::new();
        let cell = Cell::new(0, 2);

        let mut pending = PendingRemovals::new();
        pending.schedule(
            &board,
            cell,
            DigitSet::from_iter([Digit::D5, Digit::D3]),
            "simple elimination",
            "row 1",
        );
        let removed = pending.apply_and_clear(&mut board, &mut ledger);

        assert_eq!(removed.get("simple elimination"), Some(&2));
        assert!(pending.is_empty());
        assert_eq!(ledger.entries(cell).len(), 1);
        assert_eq!(
            ledger.entries(cell)[0].digits(),
            DigitSet::from_iter([Digit::D5, Digit::D3])
        );
        assert!(!board.candidates_at(cell).contains(Digit::D3));
    }

    #[test]
    fn test_overlapping_schedules_count_once() {
        let mut board = board();
        let mut ledger = Ledger::new();
        let cell = Cell::new(0, 2);

        // Two techniques analyze the same snapshot and schedule the same digit.
        let mut pending = PendingRemovals::new();
        pending.schedule(&board, cell, DigitSet::from_digit(Digit::D5), "simple elimination", "row 1");
        pending.schedule(&board, cell, DigitSet::from_digit(Digit::D5), "radiation", "overlap of row 1 and sqr 1");
        let removed = pending.apply_and_clear(&mut board, &mut ledger);

        assert_eq!(removed.get("simple elimination"), Some(&1));
        assert_eq!(removed.get("radiation"), Some(&0));
        // Both records survive in the ledger; the removal itself happens once.
        assert_eq!(ledger.entries(cell).len(), 2);
    }
}
