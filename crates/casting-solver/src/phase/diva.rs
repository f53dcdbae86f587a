//! Diva seeding phase.

use tracing::debug;

use casting_core::{Diva, RelationshipIndex, RoleId};

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Finds the first pair of roles the two divas can hold without sharing a
/// scene.
///
/// Pairs are scanned in discovery order, diva 1's roles in the outer loop.
/// A role eligible for both divas is never paired with itself.
///
/// # Example
///
/// ```
/// use casting_core::{CastingProblem, RelationshipIndex, RoleId};
/// use casting_solver::find_diva_pair;
///
/// // Roles 1 and 2 share scene 0; role 3 performs alone.
/// let problem = CastingProblem::new(
///     3,
///     vec![vec![1], vec![2], vec![2, 3]],
///     vec![vec![1, 2], vec![3]],
/// ).unwrap();
/// let index = RelationshipIndex::new(&problem);
///
/// assert_eq!(find_diva_pair(&index), Some((RoleId::new(1), RoleId::new(3))));
/// ```
pub fn find_diva_pair(index: &RelationshipIndex) -> Option<(RoleId, RoleId)> {
    let first_roles = index.diva_roles(Diva::First);
    let second_roles = index.diva_roles(Diva::Second);

    first_roles.iter().find_map(|&first| {
        second_roles
            .iter()
            .find(|&&second| second != first && !index.co_occur(first, second))
            .map(|&second| (first, second))
    })
}

/// Pins both divas before anything else is cast.
///
/// Later feasibility checks only look at actors already present, so the
/// divas go first: no other commitment can then be invalidated by them.
/// When no compatible pair exists nothing is pinned and the divas compete
/// for roles like any other actor during construction.
#[derive(Debug, Clone, Default)]
pub struct DivaSeedingPhase;

impl DivaSeedingPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for DivaSeedingPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_type_name());
        let index = phase_scope.index();

        debug_assert_eq!(
            phase_scope.director().state().unassigned_count(),
            index.role_count(),
            "divas must be seeded before any other role"
        );

        match find_diva_pair(index) {
            Some((first, second)) => {
                let director = phase_scope.director_mut();
                director.pin_diva(first, Diva::First);
                director.pin_diva(second, Diva::Second);
                phase_scope.increment_step_count();
                phase_scope.increment_step_count();
                debug!(
                    event = "diva_pair",
                    first_role = first.get(),
                    second_role = second.get(),
                );
            }
            None => {
                debug!(
                    event = "diva_unseeded",
                    first_candidates = index.diva_roles(Diva::First).len() as u64,
                    second_candidates = index.diva_roles(Diva::Second).len() as u64,
                );
            }
        }

        phase_scope.complete();
    }

    fn phase_type_name(&self) -> &'static str {
        "Diva Seeding"
    }
}
