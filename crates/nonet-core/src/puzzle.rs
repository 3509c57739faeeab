//! The puzzle facade: one board, its ledger, and a shared group registry.

use std::sync::Arc;

use crate::{
    Board, Cell, Digit, DigitSet, FormatError, GroupRegistry, Variant,
    ledger::{Elimination, Ledger},
};

/// A contradiction found while deriving moves: one cell forced to two
/// different digits.
///
/// This indicates either an unsolvable puzzle or an unsound prior deduction.
/// It is fatal to the current solve run; the board is left untouched so it
/// stays inspectable for diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("found different move than {first} at {cell}: {second}")]
pub struct Contradiction {
    /// The doubly-forced cell.
    pub cell: Cell,
    /// The digit forced first.
    pub first: Digit,
    /// The conflicting digit forced afterwards.
    pub second: Digit,
}

/// One puzzle instance: variant, groups, board state, and explanation ledger.
///
/// The group registry is immutable and shared by reference-counting, so
/// cloning a puzzle deep-copies the board and ledger while reusing the
/// registry.
///
/// # Examples
///
/// ```
/// use nonet_core::{Cell, Puzzle, Variant};
///
/// let puzzle = Puzzle::new(Variant::Classic, &[
///     "53..7....",
///     "6..195...",
///     ".98....6.",
///     "8...6...3",
///     "4..8.3..1",
///     "7...2...6",
///     ".6....28.",
///     "...419..5",
///     "....8..79",
/// ])?;
///
/// assert_eq!(puzzle.groups().len(), 27);
/// assert_eq!(puzzle.candidates(Cell::new(0, 2)).len(), 9);
/// # Ok::<(), nonet_core::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    variant: Variant,
    groups: Arc<GroupRegistry>,
    board: Board,
    ledger: Ledger,
    contradiction: Option<Contradiction>,
}

impl Puzzle {
    /// Creates a puzzle from a textual 9-row grid.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the grid is malformed, as described in
    /// [`Board::from_rows`].
    pub fn new<S: AsRef<str>>(variant: Variant, rows: &[S]) -> Result<Self, FormatError> {
        Ok(Self {
            variant,
            groups: Arc::new(GroupRegistry::build(variant)),
            board: Board::from_rows(rows)?,
            ledger: Ledger::new(),
            contradiction: None,
        })
    }

    /// Returns the puzzle variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the group registry.
    #[must_use]
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// Returns the board state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.board.candidates_at(cell)
    }

    /// Returns the full explanation ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the elimination records explaining the current candidate set
    /// of a cell.
    #[must_use]
    pub fn explanations(&self, cell: Cell) -> &[Elimination] {
        self.ledger.entries(cell)
    }

    /// Returns `true` if every cell is placed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Returns `true` if a contradiction has been recorded for this puzzle.
    #[must_use]
    pub const fn is_inconsistent(&self) -> bool {
        self.contradiction.is_some()
    }

    /// Returns the recorded contradiction, if any.
    #[must_use]
    pub const fn contradiction(&self) -> Option<Contradiction> {
        self.contradiction
    }

    /// Records a contradiction, marking the puzzle inconsistent.
    pub fn mark_inconsistent(&mut self, contradiction: Contradiction) {
        self.contradiction = Some(contradiction);
    }

    /// Places a digit at an empty cell, resetting candidates and clearing
    /// the explanation ledger.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already placed (see [`Board::place`]).
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        self.board.place(cell, digit);
        self.ledger.clear();
    }

    /// Places a digit at the cell named by a 4-character label such as
    /// `R3C7`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::CellLabel`] if the label is malformed.
    ///
    /// # Panics
    ///
    /// Panics if the labeled cell is already placed.
    pub fn place_at(&mut self, digit: Digit, label: &str) -> Result<(), FormatError> {
        let cell = Cell::parse_label(label)?;
        self.place(cell, digit);
        Ok(())
    }

    /// Renders the current assignment as 9 rows of text, `'.'` for blanks.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.board.to_rows()
    }

    /// Splits the puzzle into its mutable board, mutable ledger, and shared
    /// registry, for the elimination/apply cycle.
    pub fn parts_mut(&mut self) -> (&mut Board, &mut Ledger, &GroupRegistry) {
        (&mut self.board, &mut self.ledger, &self.groups)
    }
}
