//! Deductive solving for nonet puzzles.
//!
//! The engine works in explained steps rather than by search. Each step runs
//! the [`technique`]s against a snapshot of the board, collecting candidate
//! removals in a [`PendingRemovals`] buffer, then applies them and asks the
//! move deriver for the placements they force. Every removal and every move
//! keeps a human-readable justification.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Puzzle, Variant};
//! use nonet_solver::{BatchSolver, SolveState};
//!
//! let rows = [
//!     "53..7....",
//!     "6..195...",
//!     ".98....6.",
//!     "8...6...3",
//!     "4..8.3..1",
//!     "7...2...6",
//!     ".6....28.",
//!     "...419..5",
//!     "....8..79",
//! ];
//! let mut puzzle = Puzzle::new(Variant::Classic, &rows)?;
//! let outcome = BatchSolver::with_all_techniques().solve(&mut puzzle);
//! assert_eq!(outcome.state(), SolveState::Solved);
//! # Ok::<(), nonet_core::FormatError>(())
//! ```

pub use self::{
    batch::{BatchOutcome, BatchSolver, SolveState},
    error::SolverError,
    moves::{Move, Reason, derive_moves},
    removals::PendingRemovals,
    technique::{BoxedTechnique, Technique, all_techniques},
};

pub mod batch;
mod error;
pub mod moves;
pub mod removals;
pub mod technique;
pub mod testing;
