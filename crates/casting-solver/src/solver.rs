//! Solver implementation.

use std::time::Duration;

use tracing::info;

use casting_config::SolverConfig;
use casting_core::{CastingDirector, CastingProblem, CastingReport, RelationshipIndex};

use crate::phase::construction::ConstructionPhase;
use crate::phase::diva::DivaSeedingPhase;
use crate::phase::repair::RepairPhase;
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::stats::{PhaseStats, SolverStats};
use crate::synthesis::synthesize;

/// Result of a solve: the report plus the statistics gathered on the way.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The final cast, overflow actors included.
    pub report: CastingReport,
    /// Solver-wide statistics.
    pub stats: SolverStats,
    /// Statistics of every phase that ran, in order.
    pub phases: Vec<PhaseStats>,
    /// Actors used right after greedy construction, before any repair.
    pub constructed_actors: usize,
}

impl SolveResult {
    /// Number of actors in the final report.
    pub fn actors_used(&self) -> usize {
        self.report.actors_used()
    }

    /// Number of merges the repair phase applied.
    pub fn merges(&self) -> u64 {
        self.phase(RepairPhase::PHASE_TYPE).map_or(0, |stats| stats.step_count)
    }

    /// Returns the statistics of the named phase, if it ran.
    pub fn phase(&self, phase_type: &str) -> Option<&PhaseStats> {
        self.phases.iter().find(|stats| stats.phase_type == phase_type)
    }

    pub fn duration(&self) -> Duration {
        self.stats.elapsed()
    }
}

/// Runs diva seeding, greedy construction and repair on a problem, then
/// synthesizes overflow actors.
///
/// # Example
///
/// ```
/// use casting_config::SolverConfig;
/// use casting_core::CastingProblem;
/// use casting_solver::Solver;
///
/// let problem = CastingProblem::new(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]]).unwrap();
/// let result = Solver::new(SolverConfig::new().with_random_seed(7)).solve(&problem);
///
/// assert_eq!(result.report.actors_used(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Builds the phases for a problem with `role_count` roles.
    fn phases(&self, role_count: usize) -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(DivaSeedingPhase::new()),
            Box::new(ConstructionPhase::new(
                self.config.construction.construction_heuristic_type,
            )),
            Box::new(RepairPhase::new(
                self.config.repair.attempt_budget(role_count),
            )),
        ]
    }

    /// Solves the problem. Never fails: every role ends up with an actor.
    pub fn solve(&self, problem: &CastingProblem) -> SolveResult {
        let index = RelationshipIndex::new(problem);
        let director = CastingDirector::new(&index);
        let mut solver_scope = match self.config.effective_seed() {
            Some(seed) => SolverScope::with_seed(director, seed),
            None => SolverScope::new(director),
        };

        info!(
            event = "solve_start",
            role_count = index.role_count() as u64,
            scene_count = index.scene_count() as u64,
            actor_count = index.actor_count(),
        );

        solver_scope.start_solving();
        for mut phase in self.phases(index.role_count()) {
            phase.solve(&mut solver_scope);
        }

        let (director, stats, phases) = solver_scope.into_parts();
        let constructed_actors = phases
            .iter()
            .find(|stats| stats.phase_type == ConstructionPhase::PHASE_TYPE)
            .map_or(0, |stats| stats.actors_used);
        let report = synthesize(director.state(), index.actor_count());
        let result = SolveResult {
            report,
            stats,
            phases,
            constructed_actors,
        };

        info!(
            event = "solve_end",
            actors_used = result.actors_used() as u64,
            real_actors = result.report.real_actors_used() as u64,
            overflow_actors = result.report.overflow_actors_used() as u64,
            constructed_actors = result.constructed_actors as u64,
            merges = result.merges(),
            duration_ms = result.duration().as_millis() as u64,
        );
        result
    }
}

/// Solves a problem with the given configuration.
pub fn solve(problem: &CastingProblem, config: &SolverConfig) -> SolveResult {
    Solver::new(config.clone()).solve(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casting_core::{ActorId, Diva, RoleId};
    use casting_test::fixtures;

    fn seeded(seed: u64) -> SolverConfig {
        SolverConfig::new().with_random_seed(seed)
    }

    #[test]
    fn test_shared_scene_scenario() {
        let problem = fixtures::shared_scene();
        let result = solve(&problem, &seeded(0));

        assert_eq!(result.actors_used(), 2);
        assert_eq!(
            result.report.cast(),
            vec![Some(ActorId::new(3)), Some(ActorId::new(2))]
        );
        fixtures::assert_feasible(&problem, &result.report);
    }

    #[test]
    fn test_empty_eligibility_gets_overflow_actor() {
        let problem = fixtures::empty_eligibility();
        let result = solve(&problem, &seeded(0));

        let overflow = ActorId::new(problem.actor_count() + 1);
        assert_eq!(result.report.cast()[0], Some(overflow));
        assert_eq!(result.report.overflow_actors_used(), 1);
        fixtures::assert_feasible(&problem, &result.report);
    }

    #[test]
    fn test_divas_keep_pinned_roles() {
        let problem = fixtures::diva_pair();
        let result = solve(&problem, &seeded(0));

        let cast = result.report.cast();
        assert_eq!(cast[0], Some(Diva::First.actor()));
        assert_eq!(cast[2], Some(Diva::Second.actor()));
        fixtures::assert_feasible(&problem, &result.report);
    }

    #[test]
    fn test_phases_run_in_order() {
        let problem = fixtures::chain(6);
        let result = solve(&problem, &seeded(1));

        let names: Vec<_> = result.phases.iter().map(|p| p.phase_type).collect();
        assert_eq!(names, vec!["Diva Seeding", "Construction Heuristic", "Repair"]);
        assert_eq!(
            result.phase(RepairPhase::PHASE_TYPE).map(|p| p.moves_evaluated),
            Some(7 * 6)
        );
    }

    #[test]
    fn test_constructed_actors_come_from_construction_stats() {
        let problem = fixtures::random_problem(3, 30, 12, 10);
        let result = solve(&problem, &seeded(3));

        let construction = result.phase(ConstructionPhase::PHASE_TYPE).unwrap();
        assert_eq!(result.constructed_actors, construction.actors_used);
        assert!(result.constructed_actors > 0);
        assert_eq!(
            ConstructionPhase::default().phase_type_name(),
            ConstructionPhase::PHASE_TYPE
        );
    }

    #[test]
    fn test_repair_disabled() {
        let problem = fixtures::chain(6);
        let result = solve(&problem, &seeded(1).without_repair());

        assert!(result.phase(RepairPhase::PHASE_TYPE).is_none());
        assert_eq!(result.merges(), 0);
        assert_eq!(result.actors_used(), result.constructed_actors);
    }

    #[test]
    fn test_random_problems_are_feasible_and_improve() {
        for seed in 0..25 {
            let problem = fixtures::random_problem(seed, 40, 15, 12);
            let result = solve(&problem, &seeded(seed));

            fixtures::assert_feasible(&problem, &result.report);
            assert!(result.actors_used() <= result.constructed_actors, "seed {seed}");
            assert_eq!(result.report.role_count(), 40);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let problem = fixtures::random_problem(5, 50, 20, 15);
        let first = solve(&problem, &seeded(17));
        let second = solve(&problem, &seeded(17));
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn test_empty_problem() {
        let problem = CastingProblem::new(2, vec![], vec![]).unwrap();
        let result = solve(&problem, &seeded(0));

        assert_eq!(result.actors_used(), 0);
        assert_eq!(result.phases.len(), 2);
        assert!(result.report.cast().is_empty());
    }

    #[test]
    fn test_overflow_ids_follow_role_order() {
        // Three roles in one scene, a single eligible actor.
        let problem =
            CastingProblem::new(3, vec![vec![3], vec![3], vec![3]], vec![vec![1, 2, 3]]).unwrap();
        let result = solve(&problem, &seeded(0));

        assert_eq!(
            result.report.cast(),
            vec![
                Some(ActorId::new(3)),
                Some(ActorId::new(4)),
                Some(ActorId::new(5)),
            ]
        );
        assert_eq!(result.report.actors()[2].roles, vec![RoleId::new(3)]);
    }
}
