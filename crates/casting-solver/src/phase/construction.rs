//! Greedy construction phase.

use casting_config::ConstructionHeuristicType;
use casting_core::{ActorId, CastingDirector, RoleId};

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Construction phase that casts every role not pinned to a diva.
///
/// Roles are visited once in ascending id order. Each role takes the first
/// feasible actor from its candidate list; a role no actor fits becomes an
/// overflow role. There is no backtracking, so an early choice can push a
/// later role into overflow. The repair phase works on the result.
#[derive(Debug, Clone, Default)]
pub struct ConstructionPhase {
    heuristic: ConstructionHeuristicType,
}

impl ConstructionPhase {
    pub const PHASE_TYPE: &'static str = "Construction Heuristic";

    /// Creates a new construction phase.
    pub fn new(heuristic: ConstructionHeuristicType) -> Self {
        Self { heuristic }
    }

    /// Returns the actors to try for a role, in trial order.
    fn trial_order<'p>(&self, director: &CastingDirector<'p>, role: RoleId) -> &'p [ActorId] {
        let index = director.index();
        match self.heuristic {
            ConstructionHeuristicType::FirstFit => index.eligible(role),
            ConstructionHeuristicType::FirstFitDecreasing => index.candidates(role),
        }
    }
}

impl Phase for ConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let index = phase_scope.index();

        for role in index.role_ids() {
            let director = phase_scope.director_mut();
            if director.state().is_pinned(role) {
                continue;
            }

            let chosen = self
                .trial_order(director, role)
                .iter()
                .copied()
                .find(|&actor| director.is_feasible(role, actor));

            match chosen {
                Some(actor) => director.assign(role, actor),
                None => director.mark_overflow(role),
            }

            phase_scope.record_move(chosen.is_some());
            phase_scope.increment_step_count();
        }

        debug_assert_eq!(phase_scope.director().state().unassigned_count(), 0);
        phase_scope.complete();
    }

    fn phase_type_name(&self) -> &'static str {
        Self::PHASE_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::diva::DivaSeedingPhase;
    use casting_core::{CastingProblem, RelationshipIndex, RoleAssignment};
    use casting_test::fixtures;

    fn role(id: u32) -> RoleId {
        RoleId::new(id)
    }

    fn actor(id: u32) -> ActorId {
        ActorId::new(id)
    }

    fn construct(
        index: &RelationshipIndex,
        heuristic: ConstructionHeuristicType,
    ) -> SolverScope<'_> {
        let mut solver_scope = SolverScope::with_seed(CastingDirector::new(index), 0);
        DivaSeedingPhase::new().solve(&mut solver_scope);
        ConstructionPhase::new(heuristic).solve(&mut solver_scope);
        solver_scope
    }

    #[test]
    fn test_shared_scene_uses_two_actors() {
        let problem = fixtures::shared_scene();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFitDecreasing);

        let state = solver_scope.director().state();
        // Actor 3 is tried first for both roles but already performs in the
        // shared scene when role 2 comes up.
        assert_eq!(state.assignment(role(1)), RoleAssignment::Actor(actor(3)));
        assert_eq!(state.assignment(role(2)), RoleAssignment::Actor(actor(2)));
        assert_eq!(state.actors_used(), 2);
    }

    #[test]
    fn test_first_fit_follows_input_order() {
        let problem = fixtures::shared_scene();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFit);

        let state = solver_scope.director().state();
        assert_eq!(state.assignment(role(1)), RoleAssignment::Actor(ActorId::DIVA_1));
        assert_eq!(state.assignment(role(2)), RoleAssignment::Actor(actor(3)));
    }

    #[test]
    fn test_empty_eligibility_becomes_overflow() {
        let problem = fixtures::empty_eligibility();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFitDecreasing);

        let state = solver_scope.director().state();
        assert_eq!(state.assignment(role(1)), RoleAssignment::Overflow);
        assert_eq!(state.overflow_count(), 1);
        assert_eq!(solver_scope.phase_stats()[1].moves_accepted, 1);
    }

    #[test]
    fn test_overflow_when_every_candidate_blocked() {
        // Three roles in one scene, only two eligible actors.
        let problem =
            CastingProblem::new(4, vec![vec![3, 4], vec![3, 4], vec![3, 4]], vec![vec![1, 2, 3]])
                .unwrap();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFitDecreasing);

        let state = solver_scope.director().state();
        assert_eq!(state.assignment(role(1)), RoleAssignment::Actor(actor(3)));
        assert_eq!(state.assignment(role(2)), RoleAssignment::Actor(actor(4)));
        assert_eq!(state.assignment(role(3)), RoleAssignment::Overflow);
        assert!(solver_scope.director().is_consistent());
    }

    #[test]
    fn test_pinned_roles_are_kept() {
        let problem = fixtures::diva_pair();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFitDecreasing);

        let state = solver_scope.director().state();
        assert_eq!(state.assignment(role(1)).actor(), Some(ActorId::DIVA_1));
        assert_eq!(state.assignment(role(3)).actor(), Some(ActorId::DIVA_2));
        assert_eq!(state.unassigned_count(), 0);
        assert_eq!(solver_scope.phase_stats()[1].step_count, 2);
    }

    #[test]
    fn test_divas_kept_apart_without_pinning() {
        // Both divas only fit roles sharing a scene; no pair can be pinned.
        let problem = CastingProblem::new(2, vec![vec![1], vec![2]], vec![vec![1, 2]]).unwrap();
        let index = RelationshipIndex::new(&problem);
        let solver_scope = construct(&index, ConstructionHeuristicType::FirstFitDecreasing);

        let state = solver_scope.director().state();
        assert_eq!(state.assignment(role(1)).actor(), Some(ActorId::DIVA_1));
        assert_eq!(state.assignment(role(2)), RoleAssignment::Overflow);
    }
}
