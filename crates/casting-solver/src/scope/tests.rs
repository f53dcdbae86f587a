//! Tests for scope types.

use super::*;
use casting_core::{ActorId, CastingDirector, CastingProblem, RelationshipIndex, RoleId};
use rand::Rng;

fn create_test_index() -> RelationshipIndex {
    let problem = CastingProblem::new(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]]).unwrap();
    RelationshipIndex::new(&problem)
}

#[test]
fn test_solver_scope_creation() {
    let index = create_test_index();
    let scope = SolverScope::new(CastingDirector::new(&index));

    assert_eq!(scope.total_step_count(), 0);
    assert!(scope.elapsed().is_none());
    assert!(scope.phase_stats().is_empty());
    assert_eq!(scope.director().state().unassigned_count(), 2);
}

#[test]
fn test_solver_scope_step_count() {
    let index = create_test_index();
    let mut scope = SolverScope::new(CastingDirector::new(&index));

    assert_eq!(scope.increment_step_count(), 1);
    assert_eq!(scope.increment_step_count(), 2);
    assert_eq!(scope.total_step_count(), 2);
    assert_eq!(scope.stats().step_count, 2);
}

#[test]
fn test_start_solving_resets_steps() {
    let index = create_test_index();
    let mut scope = SolverScope::new(CastingDirector::new(&index));

    scope.increment_step_count();
    scope.start_solving();

    assert_eq!(scope.total_step_count(), 0);
    assert!(scope.elapsed().is_some());
}

#[test]
fn test_seeded_scopes_share_random_stream() {
    let index = create_test_index();
    let mut first = SolverScope::with_seed(CastingDirector::new(&index), 42);
    let mut second = SolverScope::with_seed(CastingDirector::new(&index), 42);

    let draws = |scope: &mut SolverScope<'_>| {
        (0..10)
            .map(|_| scope.rng().random_range(0..1000u32))
            .collect::<Vec<_>>()
    };
    assert_eq!(draws(&mut first), draws(&mut second));
}

#[test]
fn test_phase_scope() {
    let index = create_test_index();
    let mut solver_scope = SolverScope::new(CastingDirector::new(&index));

    {
        let mut phase_scope = PhaseScope::new(&mut solver_scope, "Test");
        assert_eq!(phase_scope.phase_index(), 0);
        assert_eq!(phase_scope.step_count(), 0);

        phase_scope.increment_step_count();
        phase_scope.record_move(true);
        phase_scope.record_move(false);
        assert_eq!(phase_scope.step_count(), 1);
        assert_eq!(phase_scope.stats().moves_evaluated, 2);
        assert_eq!(phase_scope.stats().acceptance_rate(), 0.5);
    }

    assert_eq!(solver_scope.total_step_count(), 1);
    assert_eq!(solver_scope.stats().moves_accepted, 1);
    // Dropped without completing, so nothing was recorded.
    assert!(solver_scope.phase_stats().is_empty());
}

#[test]
fn test_phase_scope_complete_records_stats() {
    let index = create_test_index();
    let mut solver_scope = SolverScope::new(CastingDirector::new(&index));

    let mut phase_scope = PhaseScope::new(&mut solver_scope, "Test");
    phase_scope
        .director_mut()
        .assign(RoleId::new(1), ActorId::new(3));
    phase_scope.director_mut().mark_overflow(RoleId::new(2));
    phase_scope.increment_step_count();
    phase_scope.complete();

    let next = PhaseScope::new(&mut solver_scope, "Next");
    assert_eq!(next.phase_index(), 1);
    next.complete();

    let stats = &solver_scope.phase_stats()[0];
    assert_eq!(stats.phase_type, "Test");
    assert_eq!(stats.step_count, 1);
    assert_eq!(stats.actors_used, 2);
    assert_eq!(stats.overflow_count, 1);
}

#[test]
fn test_into_parts() {
    let index = create_test_index();
    let mut scope = SolverScope::with_seed(CastingDirector::new(&index), 0);
    scope.director_mut().assign(RoleId::new(1), ActorId::new(3));
    scope.record_move(true);

    let (director, stats, phases) = scope.into_parts();
    assert_eq!(director.assignment(RoleId::new(1)).actor(), Some(ActorId::new(3)));
    assert_eq!(stats.moves_accepted, 1);
    assert!(phases.is_empty());
}
