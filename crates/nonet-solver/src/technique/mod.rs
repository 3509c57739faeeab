//! Elimination techniques.
//!
//! Each technique is a pure analyzer: it reads the board and the group
//! registry and schedules removals into a [`PendingRemovals`] buffer without
//! mutating anything itself. Techniques may run in any order within one
//! pass; running them to a fixpoint is what gives the engine its full
//! deductive power.

use std::fmt::Debug;

use nonet_core::{Board, GroupRegistry};

pub use self::{
    group_elimination::GroupElimination, naked_subgroup::NakedSubgroup, radiation::Radiation,
};
use crate::PendingRemovals;

mod group_elimination;
mod naked_subgroup;
mod radiation;

/// Returns all elimination techniques in their standard order.
///
/// The order only affects which technique gets credited for a removal that
/// several of them would find; the fixpoint result is the same.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(GroupElimination::new()),
        Box::new(NakedSubgroup::new()),
        Box::new(Radiation::new()),
    ]
}

/// A deductive elimination technique.
///
/// Implementations read a snapshot of the board state and schedule candidate
/// removals; they never mutate the board and never fail. Any inconsistency a
/// technique could provoke surfaces later, at the move deriver.
pub trait Technique: Debug {
    /// Returns the technique's name as it appears in explanations and
    /// statistics.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Analyzes the board and schedules candidate removals.
    fn eliminate(&self, board: &Board, groups: &GroupRegistry, pending: &mut PendingRemovals);
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
