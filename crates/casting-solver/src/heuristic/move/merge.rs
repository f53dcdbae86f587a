//! MergeMove - moves two roles onto one actor already in production.
//!
//! A successful merge can take the two previous actors out of production
//! without bringing a new actor in, so it never increases the number of
//! actors used.

use casting_core::{ActorId, CastingDirector, RoleAssignment, RoleId};

/// A move that gives two roles to the same actor.
///
/// Built by [`MergeMoveSelector`](crate::heuristic::MergeMoveSelector) from
/// two roles that never share a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeMove {
    first: RoleId,
    second: RoleId,
    actor: ActorId,
}

impl MergeMove {
    pub fn new(first: RoleId, second: RoleId, actor: ActorId) -> Self {
        Self {
            first,
            second,
            actor,
        }
    }

    pub fn first(&self) -> RoleId {
        self.first
    }

    pub fn second(&self) -> RoleId {
        self.second
    }

    /// Returns the actor both roles move to.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Returns true if both roles hold a real actor and the target actor is
    /// feasible for each of them in the current state.
    ///
    /// The check runs before either role is released, so an actor currently
    /// holding one of the two roles is never doable.
    pub fn is_doable(&self, director: &CastingDirector<'_>) -> bool {
        let held = |role| matches!(director.assignment(role), RoleAssignment::Actor(_));
        self.first != self.second
            && held(self.first)
            && held(self.second)
            && director.is_feasible(self.first, self.actor)
            && director.is_feasible(self.second, self.actor)
    }

    /// Releases both current actors, then commits the target actor to both
    /// roles.
    pub fn do_move(&self, director: &mut CastingDirector<'_>) {
        director.unassign(self.first);
        director.unassign(self.second);
        director.assign(self.first, self.actor);
        director.assign(self.second, self.actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casting_core::{CastingProblem, RelationshipIndex};

    fn role(id: u32) -> RoleId {
        RoleId::new(id)
    }

    fn actor(id: u32) -> ActorId {
        ActorId::new(id)
    }

    // Every role performs in its own scene.
    fn solo_index() -> RelationshipIndex {
        let problem = CastingProblem::new(
            5,
            vec![vec![3, 5], vec![4, 5], vec![5]],
            vec![vec![1], vec![2], vec![3]],
        )
        .unwrap();
        RelationshipIndex::new(&problem)
    }

    #[test]
    fn test_merge_frees_both_actors() {
        let index = solo_index();
        let mut director = CastingDirector::new(&index);
        director.assign(role(1), actor(3));
        director.assign(role(2), actor(4));
        director.assign(role(3), actor(5));
        assert_eq!(director.state().actors_used(), 3);

        let merge = MergeMove::new(role(1), role(2), actor(5));
        assert!(merge.is_doable(&director));
        merge.do_move(&mut director);

        let state = director.state();
        assert_eq!(state.assignment(role(1)).actor(), Some(actor(5)));
        assert_eq!(state.assignment(role(2)).actor(), Some(actor(5)));
        assert_eq!(state.production(actor(5)), 3);
        assert!(!state.in_production(actor(3)));
        assert!(!state.in_production(actor(4)));
        assert_eq!(state.actors_used(), 1);
        assert!(director.is_consistent());
    }

    #[test]
    fn test_actor_holding_a_merged_role_is_not_doable() {
        let index = solo_index();
        let mut director = CastingDirector::new(&index);
        director.assign(role(1), actor(5));
        director.assign(role(2), actor(4));

        assert!(!MergeMove::new(role(1), role(2), actor(5)).is_doable(&director));
    }

    #[test]
    fn test_overflow_role_is_not_doable() {
        let index = solo_index();
        let mut director = CastingDirector::new(&index);
        director.assign(role(1), actor(3));
        director.mark_overflow(role(2));
        director.assign(role(3), actor(5));

        assert!(!MergeMove::new(role(1), role(2), actor(5)).is_doable(&director));
    }
}
