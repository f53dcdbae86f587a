//! Constraint checking and transactional mutation of the assignment state.

use crate::id::{ActorId, Diva, RoleId};
use crate::index::RelationshipIndex;
use crate::state::{AssignmentState, RoleAssignment};

/// Owns the working [`AssignmentState`] of one solve and is the only way to
/// change it.
///
/// Every mutation updates the role mapping, the production counts and the
/// scene occupancy together, so the derived tables never drift from the
/// mapping between two calls.
///
/// # Example
///
/// ```
/// use casting_core::{ActorId, CastingDirector, CastingProblem, RelationshipIndex, RoleId};
///
/// let problem = CastingProblem::new(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]]).unwrap();
/// let index = RelationshipIndex::new(&problem);
/// let mut director = CastingDirector::new(&index);
///
/// let (first, second) = (RoleId::new(1), RoleId::new(2));
/// let shared = ActorId::new(3);
///
/// assert!(director.is_feasible(first, shared));
/// director.assign(first, shared);
///
/// // Both roles share a scene, so actor 3 cannot take the second one.
/// assert!(!director.is_feasible(second, shared));
/// ```
#[derive(Debug, Clone)]
pub struct CastingDirector<'p> {
    index: &'p RelationshipIndex,
    state: AssignmentState,
}

impl<'p> CastingDirector<'p> {
    /// Creates a director with every role unassigned.
    pub fn new(index: &'p RelationshipIndex) -> Self {
        let state = AssignmentState::new(
            index.role_count(),
            index.scene_count(),
            index.actor_count(),
        );
        Self { index, state }
    }

    pub fn index(&self) -> &'p RelationshipIndex {
        self.index
    }

    pub fn state(&self) -> &AssignmentState {
        &self.state
    }

    #[inline]
    pub fn assignment(&self, role: RoleId) -> RoleAssignment {
        self.state.assignment(role)
    }

    /// Returns true if `actor` can take `role` without breaking a hard
    /// constraint in any scene of the role.
    ///
    /// A scene rejects the actor when the other diva is present, or when the
    /// actor is already present. The second rule also rejects an actor for a
    /// role it currently plays.
    pub fn is_feasible(&self, role: RoleId, actor: ActorId) -> bool {
        let rival = actor.diva().map(|diva| diva.other().actor());
        self.index.scenes_of(role).iter().all(|&scene| {
            let present = self.state.actors_in(scene);
            if rival.is_some_and(|rival| present.contains(&rival)) {
                return false;
            }
            !present.contains(&actor)
        })
    }

    /// Commits `actor` to `role`, releasing the role's current real actor
    /// first.
    ///
    /// Callers check [`is_feasible`](Self::is_feasible) beforehand.
    pub fn assign(&mut self, role: RoleId, actor: ActorId) {
        self.release(role);
        debug_assert!(
            self.is_feasible(role, actor),
            "actor {actor} cannot take role {role}"
        );
        self.state.assignments[role.index()] = RoleAssignment::Actor(actor);
        self.state.production[actor.index()] += 1;
        for &scene in self.index.scenes_of(role) {
            self.state.occupancy[scene.index()].insert(actor);
        }
    }

    /// Clears a role, releasing its real actor if it has one.
    pub fn unassign(&mut self, role: RoleId) {
        self.release(role);
        self.state.assignments[role.index()] = RoleAssignment::Unassigned;
    }

    /// Marks a role as needing an overflow actor.
    pub fn mark_overflow(&mut self, role: RoleId) {
        self.release(role);
        self.state.assignments[role.index()] = RoleAssignment::Overflow;
    }

    /// Commits a diva to a role and fixes that role for good.
    ///
    /// # Panics
    ///
    /// Panics if the diva already has a pinned role.
    pub fn pin_diva(&mut self, role: RoleId, diva: Diva) {
        assert!(
            self.state.pinned_role(diva).is_none(),
            "{diva:?} diva is already pinned"
        );
        self.assign(role, diva.actor());
        self.state.pinned[diva.slot()] = Some(role);
    }

    // Removes the role's real actor from the derived tables. The mapping
    // entry is left for the caller to overwrite.
    fn release(&mut self, role: RoleId) {
        let RoleAssignment::Actor(actor) = self.state.assignments[role.index()] else {
            return;
        };
        self.state.production[actor.index()] -= 1;
        for &scene in self.index.scenes_of(role) {
            self.state.occupancy[scene.index()].remove(&actor);
        }
    }

    /// Recomputes production counts and occupancy from the role mapping and
    /// compares them with the incrementally maintained tables.
    pub fn is_consistent(&self) -> bool {
        let fresh = self.rebuild();
        fresh.production == self.state.production && fresh.occupancy == self.state.occupancy
    }

    fn rebuild(&self) -> AssignmentState {
        let mut fresh = AssignmentState::new(
            self.index.role_count(),
            self.index.scene_count(),
            self.index.actor_count(),
        );
        for role in self.index.role_ids() {
            if let RoleAssignment::Actor(actor) = self.state.assignment(role) {
                fresh.production[actor.index()] += 1;
                for &scene in self.index.scenes_of(role) {
                    fresh.occupancy[scene.index()].insert(actor);
                }
            }
        }
        fresh
    }
}
