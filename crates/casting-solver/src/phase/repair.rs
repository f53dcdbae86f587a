//! Local-search repair phase.

use std::time::Instant;

use tracing::{debug, trace};

use crate::heuristic::MergeMoveSelector;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Randomized local search that merges pairs of roles onto actors already in
/// production.
///
/// The phase runs a fixed number of attempts and stops only when they are
/// used up. Each attempt samples a pair of roles; when a merge is found it is
/// applied at once and counts as a step. A failed attempt changes nothing.
/// No merge brings a new actor into production, so the number of actors used
/// never grows during this phase.
#[derive(Debug, Clone)]
pub struct RepairPhase {
    selector: MergeMoveSelector,
    attempt_limit: u64,
}

impl RepairPhase {
    pub const PHASE_TYPE: &'static str = "Repair";

    /// Creates a repair phase running `attempt_limit` attempts.
    pub fn new(attempt_limit: u64) -> Self {
        Self {
            selector: MergeMoveSelector::new(),
            attempt_limit,
        }
    }
}

impl Phase for RepairPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let role_count = solver_scope.index().role_count();
        if role_count < 2 || self.attempt_limit == 0 {
            debug!(
                event = "phase_skipped",
                phase = self.phase_type_name(),
                role_count = role_count as u64,
                attempt_limit = self.attempt_limit,
            );
            return;
        }

        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let mut last_progress_time = Instant::now();
        let mut last_progress_attempts: u64 = 0;

        for attempt in 1..=self.attempt_limit {
            let (director, rng) = phase_scope.solver_scope_mut().director_and_rng();
            let selected = self.selector.select(director, rng);
            if let Some(merge) = selected {
                merge.do_move(director);
            }

            phase_scope.record_move(selected.is_some());
            if let Some(merge) = selected {
                let step = phase_scope.increment_step_count();
                trace!(
                    event = "step",
                    step = step,
                    attempt = attempt,
                    first_role = merge.first().get(),
                    second_role = merge.second().get(),
                    actor = merge.actor().get(),
                    actors_used = phase_scope.director().state().actors_used() as u64,
                );
            }

            // Log progress every second
            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let attempts_delta = attempt - last_progress_attempts;
                let elapsed_secs = now.duration_since(last_progress_time).as_secs_f64();
                debug!(
                    event = "progress",
                    steps = phase_scope.step_count(),
                    attempts = attempt,
                    speed = (attempts_delta as f64 / elapsed_secs) as u64,
                    actors_used = phase_scope.director().state().actors_used() as u64,
                );
                last_progress_time = now;
                last_progress_attempts = attempt;
            }
        }

        debug_assert!(phase_scope.director().is_consistent());
        phase_scope.complete();
    }

    fn phase_type_name(&self) -> &'static str {
        Self::PHASE_TYPE
    }
}
