//! Phase-level scope.

use std::time::Duration;

use tracing::info;

use casting_core::{CastingDirector, RelationshipIndex};

use super::SolverScope;
use crate::stats::PhaseStats;

/// Scope for a single phase of solving.
///
/// Logs `phase_start` on creation and `phase_end` on [`complete`](Self::complete),
/// which also hands the phase statistics back to the solver scope.
///
/// # Type Parameters
/// * `'s` - Lifetime of the solver scope borrow
/// * `'p` - Lifetime of the relationship index
pub struct PhaseScope<'s, 'p> {
    solver_scope: &'s mut SolverScope<'p>,
    stats: PhaseStats,
}

impl<'s, 'p> PhaseScope<'s, 'p> {
    /// Creates a new phase scope, numbered after the phases already completed.
    pub fn new(solver_scope: &'s mut SolverScope<'p>, phase_type: &'static str) -> Self {
        let phase_index = solver_scope.phase_stats().len();
        info!(event = "phase_start", phase = phase_type, phase_index = phase_index as u64);
        Self {
            solver_scope,
            stats: PhaseStats::new(phase_index, phase_type),
        }
    }

    /// Returns the phase index.
    pub fn phase_index(&self) -> usize {
        self.stats.phase_index
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Returns the step count for this phase.
    pub fn step_count(&self) -> u64 {
        self.stats.step_count
    }

    /// Increments the phase step count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.stats.record_step();
        self.solver_scope.increment_step_count();
        self.stats.step_count
    }

    /// Records a move evaluation at phase and solver level.
    pub fn record_move(&mut self, accepted: bool) {
        self.stats.record_move(accepted);
        self.solver_scope.record_move(accepted);
    }

    /// Returns the phase statistics gathered so far.
    pub fn stats(&self) -> &PhaseStats {
        &self.stats
    }

    /// Returns a mutable reference to the solver scope.
    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<'p> {
        self.solver_scope
    }

    pub fn index(&self) -> &'p RelationshipIndex {
        self.solver_scope.index()
    }

    pub fn director(&self) -> &CastingDirector<'p> {
        self.solver_scope.director()
    }

    pub fn director_mut(&mut self) -> &mut CastingDirector<'p> {
        self.solver_scope.director_mut()
    }

    /// Ends the phase: logs its summary and stores its statistics.
    pub fn complete(mut self) {
        let state = self.solver_scope.director().state();
        self.stats
            .finish(state.actors_used(), state.overflow_count());

        info!(
            event = "phase_end",
            phase = self.stats.phase_type,
            phase_index = self.stats.phase_index as u64,
            duration_ms = self.stats.elapsed_ms(),
            steps = self.stats.step_count,
            moves_speed = self.stats.moves_per_second(),
            accepted = self.stats.moves_accepted,
            acceptance_rate = self.stats.acceptance_rate(),
            actors_used = self.stats.actors_used as u64,
            overflow_count = self.stats.overflow_count as u64,
        );

        self.solver_scope.push_phase_stats(self.stats);
    }
}
