//! Overflow actor synthesis.

use casting_core::{ActorId, AssignmentState, CastingReport, RoleAssignment};

/// Turns the final assignment into a report.
///
/// Every overflow role, in ascending role order, gets a fresh actor id
/// starting at `actor_count + 1`. Each overflow actor plays exactly one role,
/// which is feasible by construction. The state itself is left untouched.
///
/// # Example
///
/// ```
/// use casting_core::{ActorId, CastingDirector, CastingProblem, RelationshipIndex, RoleId};
/// use casting_solver::synthesize;
///
/// let problem = CastingProblem::new(3, vec![vec![], vec![3], vec![]], vec![]).unwrap();
/// let index = RelationshipIndex::new(&problem);
/// let mut director = CastingDirector::new(&index);
/// director.mark_overflow(RoleId::new(1));
/// director.assign(RoleId::new(2), ActorId::new(3));
/// director.mark_overflow(RoleId::new(3));
///
/// let report = synthesize(director.state(), index.actor_count());
/// let cast: Vec<_> = report.cast().into_iter().flatten().map(|a| a.get()).collect();
/// assert_eq!(cast, vec![4, 3, 5]);
/// ```
pub fn synthesize(state: &AssignmentState, actor_count: u32) -> CastingReport {
    debug_assert_eq!(state.unassigned_count(), 0, "every role must be committed");

    let mut next_overflow = actor_count;
    let cast: Vec<ActorId> = state
        .assignments()
        .iter()
        .map(|assignment| match *assignment {
            RoleAssignment::Actor(actor) => actor,
            RoleAssignment::Overflow | RoleAssignment::Unassigned => {
                next_overflow += 1;
                ActorId::new(next_overflow)
            }
        })
        .collect();

    CastingReport::from_cast(actor_count, &cast)
}
