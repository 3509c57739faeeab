//! Running the full deductive loop on a puzzle.
//!
//! One step is: eliminate to a fixpoint, derive the forced moves, place the
//! one at the smallest cell. Placing a digit resets the candidate state, so
//! every step starts its analysis from scratch. The loop ends when the board
//! is full, when no technique forces a move, or when the move deriver finds
//! a contradiction.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use log::{debug, info};
use nonet_core::{Contradiction, Puzzle};

use crate::{
    PendingRemovals, SolverError,
    moves::{Move, derive_moves},
    technique::{BoxedTechnique, all_techniques},
};

/// How a batch run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Every cell is placed.
    Solved,
    /// No technique forces a move; the puzzle needs stronger methods.
    Stuck,
    /// Two methods forced different digits into the same cell.
    Inconsistent(Contradiction),
}

impl Display for SolveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => write!(f, "solved"),
            Self::Stuck => write!(f, "stuck"),
            Self::Inconsistent(contradiction) => write!(f, "inconsistent: {contradiction}"),
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    state: SolveState,
    steps: usize,
    eliminations: BTreeMap<&'static str, usize>,
}

impl BatchOutcome {
    /// How the run ended.
    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    /// The number of digits placed.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// The number of candidate digits removed, per technique, over the whole
    /// run.
    #[must_use]
    pub const fn eliminations(&self) -> &BTreeMap<&'static str, usize> {
        &self.eliminations
    }
}

/// Drives a set of techniques to solve a puzzle without guessing.
#[derive(Debug, Clone)]
pub struct BatchSolver {
    techniques: Vec<BoxedTechnique>,
}

impl Default for BatchSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}

impl BatchSolver {
    /// Creates a solver running the given techniques.
    #[must_use]
    pub const fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver running every technique.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(all_techniques())
    }

    /// Eliminates candidates until no technique removes anything, tallying
    /// removals per technique into `eliminations`.
    fn run_to_fixpoint(
        &self,
        puzzle: &mut Puzzle,
        eliminations: &mut BTreeMap<&'static str, usize>,
    ) {
        let mut pending = PendingRemovals::new();
        loop {
            let (board, ledger, groups) = puzzle.parts_mut();
            for technique in &self.techniques {
                technique.eliminate(board, groups, &mut pending);
            }
            let counts = pending.apply_and_clear(board, ledger);
            let removed: usize = counts.values().sum();
            debug!("elimination pass removed {removed} candidates");
            for (technique, count) in counts {
                *eliminations.entry(technique).or_default() += count;
            }
            if removed == 0 {
                return;
            }
        }
    }

    /// Finds and applies the next forced move.
    ///
    /// Candidates are eliminated to a fixpoint first. When several moves are
    /// forced at once, the one at the smallest cell in row-major order is
    /// applied. Returns `None` if the puzzle is already complete or no move
    /// is forced.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if two methods force different
    /// digits into the same cell.
    pub fn step(&self, puzzle: &mut Puzzle) -> Result<Option<Move>, SolverError> {
        if puzzle.is_complete() {
            return Ok(None);
        }
        let mut eliminations = BTreeMap::new();
        self.run_to_fixpoint(puzzle, &mut eliminations);
        let moves = derive_moves(puzzle.board(), puzzle.groups(), puzzle.ledger())?;
        let Some((_, step)) = moves.into_iter().next() else {
            return Ok(None);
        };
        puzzle.place(step.cell(), step.digit());
        Ok(Some(step))
    }

    /// Runs the deductive loop until the puzzle is solved, stuck, or
    /// inconsistent.
    ///
    /// A contradiction does not abort with an error; it is recorded on the
    /// puzzle and reported in the outcome, with the board left as it was
    /// when the contradiction surfaced.
    pub fn solve(&self, puzzle: &mut Puzzle) -> BatchOutcome {
        let mut steps = 0;
        let mut eliminations = BTreeMap::new();
        let state = loop {
            if puzzle.is_complete() {
                break SolveState::Solved;
            }
            self.run_to_fixpoint(puzzle, &mut eliminations);
            let moves = match derive_moves(puzzle.board(), puzzle.groups(), puzzle.ledger()) {
                Ok(moves) => moves,
                Err(err) => {
                    let contradiction = err.contradiction();
                    puzzle.mark_inconsistent(contradiction);
                    break SolveState::Inconsistent(contradiction);
                }
            };
            let Some((_, step)) = moves.into_iter().next() else {
                break SolveState::Stuck;
            };
            info!("placing {} at {}", step.digit(), step.cell());
            puzzle.place(step.cell(), step.digit());
            steps += 1;
        };
        info!("batch run ended {state} after {steps} placements");
        BatchOutcome {
            state,
            steps,
            eliminations,
        }
    }
}
