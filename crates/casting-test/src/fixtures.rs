//! Hand-built problems.
//!
//! Ids follow the input format: roles and actors start at 1, scenes at 0.
//! Actors 1 and 2 are the divas.

use casting_core::{CastingProblem, CastingReport, RelationshipIndex};

pub use crate::random::random_problem;

fn problem(actor_count: u32, roles: Vec<Vec<u32>>, scenes: Vec<Vec<u32>>) -> CastingProblem {
    CastingProblem::new(actor_count, roles, scenes).expect("fixture ids are in range")
}

/// Two roles in one scene: role 1 takes actors 1 or 3, role 2 actors 2 or 3.
///
/// The diva roles share the scene, so no diva pair exists. Construction
/// gives role 1 to actor 3 and role 2 to actor 2.
pub fn shared_scene() -> CastingProblem {
    problem(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]])
}

/// Role 1 has no eligible actor; role 2 takes actor 1. One shared scene.
pub fn empty_eligibility() -> CastingProblem {
    problem(2, vec![vec![], vec![1]], vec![vec![1, 2]])
}

/// Four roles in two scenes where the first diva pair tried shares a scene.
///
/// Scene 0 holds roles 1 and 2, scene 1 roles 3 and 4. Diva 1 only fits
/// role 1; diva 2 fits roles 2 and 3. The seeded pair is (1, 3).
pub fn diva_pair() -> CastingProblem {
    problem(
        4,
        vec![vec![1, 3], vec![2, 4], vec![2, 3], vec![3, 4]],
        vec![vec![1, 2], vec![3, 4]],
    )
}

/// `role_count` roles where each neighbouring pair shares a scene.
///
/// Every role takes actors 3 or 4, so two actors alternate along the chain
/// and no merge is ever possible.
pub fn chain(role_count: usize) -> CastingProblem {
    let roles = vec![vec![3, 4]; role_count];
    let scenes = (1..role_count as u32)
        .map(|role| vec![role, role + 1])
        .collect();
    problem(4, roles, scenes)
}

/// Panics unless `report` casts every role of `problem` exactly once while
/// respecting eligibility and both scene constraints.
pub fn assert_feasible(problem: &CastingProblem, report: &CastingReport) {
    let index = RelationshipIndex::new(problem);
    let violations = report.verify(&index);
    assert!(
        violations.is_empty(),
        "infeasible cast: {}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );
    assert_eq!(report.role_count(), problem.role_count());
    assert_eq!(
        report.actors().iter().map(|a| a.roles.len()).sum::<usize>(),
        problem.role_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(shared_scene().role_count(), 2);
        assert_eq!(empty_eligibility().role_count(), 2);
        assert_eq!(diva_pair().scene_count(), 2);
        assert_eq!(chain(5).scene_count(), 4);
        assert_eq!(chain(0).role_count(), 0);
    }
}
