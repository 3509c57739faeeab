//! Turning candidate state into forced placements with evidence.
//!
//! Two single-digit patterns are recognized: a cell whose candidate set has
//! shrunk to one digit (a naked single), and a digit whose only remaining
//! home in a group is one cell (a hidden single). Each derived move carries
//! the ledger records that justify it.

use std::collections::BTreeMap;

use nonet_core::{
    Board, Cell, Contradiction, Digit, Elimination, GroupRegistry, Ledger,
};

use crate::SolverError;

/// Why a move is forced: the recognizing method plus the eliminations that
/// narrowed the board down to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    method: String,
    evidence: Vec<Elimination>,
}

impl Reason {
    fn new(method: impl Into<String>, evidence: Vec<Elimination>) -> Self {
        Self {
            method: method.into(),
            evidence,
        }
    }

    /// The recognizing method, such as `"single cell value"` or
    /// `"only place in row 4"`.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The ledger records that justify the move.
    #[must_use]
    pub fn evidence(&self) -> &[Elimination] {
        &self.evidence
    }
}

/// A forced placement of one digit into one cell.
///
/// A move can be forced by several methods at once; every independent
/// justification is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    cell: Cell,
    digit: Digit,
    reasons: Vec<Reason>,
}

impl Move {
    /// The cell to fill.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// The digit forced into the cell.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// Every justification found for the move.
    #[must_use]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }
}

/// Derives every forced move currently visible on the board.
///
/// The map is keyed by cell in row-major order, so its first entry is the
/// move at the smallest cell. Multiple methods forcing the same digit into
/// the same cell merge into one move with several reasons.
///
/// # Errors
///
/// Returns [`SolverError::Inconsistent`] if two methods force different
/// digits into the same cell.
pub fn derive_moves(
    board: &Board,
    groups: &GroupRegistry,
    ledger: &Ledger,
) -> Result<BTreeMap<Cell, Move>, SolverError> {
    let mut moves: BTreeMap<Cell, Move> = BTreeMap::new();

    // Naked singles: the candidate set has shrunk to one digit, so every
    // record on the cell is evidence.
    for cell in board.empty_cells() {
        if let Some(digit) = board.candidates_at(cell).as_single() {
            let reason = Reason::new("single cell value", ledger.entries(cell).to_vec());
            record(&mut moves, cell, digit, reason)?;
        }
    }

    // Hidden singles: every other empty cell of the group has lost the
    // digit, so the records that removed it elsewhere are evidence. The
    // same record text can apply to several cells; it is cited once.
    for group in groups {
        let empty = group.cells() & board.empty_cells();
        for digit in nonet_core::DigitSet::FULL - board.placed_in(group.cells()) {
            let mut home = None;
            for cell in empty {
                if board.candidates_at(cell).contains(digit) {
                    if home.is_some() {
                        home = None;
                        break;
                    }
                    home = Some(cell);
                }
            }
            let Some(cell) = home else { continue };

            let mut evidence = Vec::new();
            for other in empty {
                if other == cell {
                    continue;
                }
                for record in ledger.entries(other) {
                    if record.digits().contains(digit) && !cited(&evidence, record) {
                        evidence.push(record.clone());
                    }
                }
            }
            let reason = Reason::new(format!("only place in {}", group.name()), evidence);
            record(&mut moves, cell, digit, reason)?;
        }
    }

    Ok(moves)
}

fn record(
    moves: &mut BTreeMap<Cell, Move>,
    cell: Cell,
    digit: Digit,
    reason: Reason,
) -> Result<(), SolverError> {
    match moves.entry(cell) {
        std::collections::btree_map::Entry::Vacant(entry) => {
            entry.insert(Move {
                cell,
                digit,
                reasons: vec![reason],
            });
        }
        std::collections::btree_map::Entry::Occupied(mut entry) => {
            let found = entry.get().digit;
            if found != digit {
                return Err(Contradiction {
                    cell,
                    first: found,
                    second: digit,
                }
                .into());
            }
            entry.get_mut().reasons.push(reason);
        }
    }
    Ok(())
}

fn cited(evidence: &[Elimination], record: &Elimination) -> bool {
    evidence
        .iter()
        .any(|seen| seen.technique() == record.technique() && seen.detail() == record.detail())
}
