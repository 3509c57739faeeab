//! The explanation ledger: per-cell elimination provenance.
//!
//! The ledger records why candidates were removed so that a forced move can
//! present a human-auditable chain of reasons. It is never consulted for
//! correctness, only for reporting.

use std::fmt::{self, Display};

use crate::{Cell, DigitSet};

/// One elimination event on one cell.
///
/// Records the technique that removed the digits, a detail identifier (such
/// as the group name the elimination came from), and the removed digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    technique: &'static str,
    detail: String,
    digits: DigitSet,
}

impl Elimination {
    /// Creates an elimination record.
    #[must_use]
    pub fn new(technique: &'static str, detail: impl Into<String>, digits: DigitSet) -> Self {
        Self {
            technique,
            detail: detail.into(),
            digits,
        }
    }

    /// Returns the technique name, e.g. `simple elimination`.
    #[must_use]
    pub const fn technique(&self) -> &'static str {
        self.technique
    }

    /// Returns the detail identifier, e.g. a group name.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the digits removed by this event.
    #[must_use]
    pub const fn digits(&self) -> DigitSet {
        self.digits
    }
}

impl Display for Elimination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.technique, self.detail, self.digits)
    }
}

/// Append-only log of elimination events, ordered per cell.
///
/// Cleared whenever a placement resets the candidate sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Vec<Elimination>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new(); 81],
        }
    }

    /// Appends an elimination record for a cell.
    pub fn append(&mut self, cell: Cell, elimination: Elimination) {
        self.entries[cell.index()].push(elimination);
    }

    /// Returns the ordered elimination records for a cell.
    #[must_use]
    pub fn entries(&self, cell: Cell) -> &[Elimination] {
        &self.entries[cell.index()]
    }

    /// Clears all records, typically after a placement.
    pub fn clear(&mut self) {
        for entries in &mut self.entries {
            entries.clear();
        }
    }
}
