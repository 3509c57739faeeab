//! Core data structures for the nonet deductive sudoku solver.
//!
//! This crate holds the puzzle-independent model: digits and digit sets,
//! cells and cell sets, the constraint-group registry, the board state with
//! its candidate tracking, and the explanation ledger that records why each
//! candidate was eliminated.
//!
//! # Overview
//!
//! - [`digit`] / [`digit_set`]: type-safe digits 1-9 and bitset candidate
//!   sets.
//! - [`cell`] / [`cell_set`]: board coordinates with `R1C1`-style labels and
//!   81-bit cell sets.
//! - [`group`]: named constraint regions (rows, columns, boxes, NRC regions)
//!   built once per [`Variant`].
//! - [`board`]: placed digits, empty cells, and per-cell candidates, plus the
//!   9-row text format.
//! - [`ledger`]: append-only elimination provenance for audit output.
//! - [`puzzle`]: the owning facade tying the above together.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Cell, Puzzle, Variant};
//!
//! let puzzle = Puzzle::new(Variant::Nrc, &[
//!     " 9   4 7 ",
//!     " 7 3  9 8",
//!     "         ",
//!     "      5  ",
//!     "   8     ",
//!     "         ",
//!     "5    6  9",
//!     " 3  41   ",
//!     "    7    ",
//! ])?;
//!
//! assert_eq!(puzzle.groups().len(), 31);
//! assert!(!puzzle.is_complete());
//! # Ok::<(), nonet_core::FormatError>(())
//! ```

pub use self::{
    board::Board,
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    format::FormatError,
    group::{Group, GroupRegistry, Variant},
    ledger::{Elimination, Ledger},
    puzzle::{Contradiction, Puzzle},
};

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod format;
pub mod group;
pub mod ledger;
pub mod puzzle;
