//! Solver phases for different solving strategies
//!
//! Phases run once each, in sequence:
//! - DivaSeedingPhase: Places both divas on roles that never share a scene
//! - ConstructionPhase: Greedily casts every remaining role
//! - RepairPhase: Merges pairs of roles onto actors already in production

pub mod construction;
pub mod diva;
pub mod repair;

use std::fmt::Debug;

use crate::scope::SolverScope;

/// A phase of the solving process.
///
/// Phases are executed in sequence by the solver. Each phase has its own
/// strategy for constructing or improving the working assignment.
pub trait Phase: Debug {
    /// Executes this phase.
    ///
    /// The phase mutates the working assignment through the solver scope's
    /// director and must leave every invariant intact.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
