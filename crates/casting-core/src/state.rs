//! Mutable assignment state.
//!
//! Holds the role mapping together with the two derived tables kept in
//! lock-step with it: per-actor production counts and per-scene occupancy.
//! Only [`CastingDirector`](crate::CastingDirector) mutates it.

use std::collections::HashSet;

use crate::id::{ActorId, Diva, RoleId, SceneId};

/// What currently plays a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleAssignment {
    /// Nothing yet. Only seen during construction.
    #[default]
    Unassigned,
    /// A real actor is committed.
    Actor(ActorId),
    /// No real actor fits; an overflow actor takes it at synthesis.
    Overflow,
}

impl RoleAssignment {
    /// Returns the real actor, if one is committed.
    #[inline]
    pub fn actor(self) -> Option<ActorId> {
        match self {
            RoleAssignment::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    #[inline]
    pub fn is_overflow(self) -> bool {
        matches!(self, RoleAssignment::Overflow)
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        !matches!(self, RoleAssignment::Unassigned)
    }
}

/// Role mapping, production counts and scene occupancy.
#[derive(Debug, Clone)]
pub struct AssignmentState {
    pub(crate) assignments: Vec<RoleAssignment>,
    pub(crate) production: Vec<u32>,
    pub(crate) occupancy: Vec<HashSet<ActorId>>,
    pub(crate) pinned: [Option<RoleId>; 2],
}

impl AssignmentState {
    /// Creates an empty state with every role unassigned.
    pub fn new(role_count: usize, scene_count: usize, actor_count: u32) -> Self {
        Self {
            assignments: vec![RoleAssignment::Unassigned; role_count],
            production: vec![0; actor_count as usize],
            occupancy: vec![HashSet::new(); scene_count],
            pinned: [None, None],
        }
    }

    #[inline]
    pub fn assignment(&self, role: RoleId) -> RoleAssignment {
        self.assignments[role.index()]
    }

    /// All assignments, indexed by role index.
    pub fn assignments(&self) -> &[RoleAssignment] {
        &self.assignments
    }

    /// Number of roles an actor currently plays.
    #[inline]
    pub fn production(&self, actor: ActorId) -> u32 {
        self.production[actor.index()]
    }

    #[inline]
    pub fn in_production(&self, actor: ActorId) -> bool {
        self.production(actor) > 0
    }

    /// Real actors currently present in a scene.
    #[inline]
    pub fn actors_in(&self, scene: SceneId) -> &HashSet<ActorId> {
        &self.occupancy[scene.index()]
    }

    /// The role fixed for a diva by seeding, if any.
    #[inline]
    pub fn pinned_role(&self, diva: Diva) -> Option<RoleId> {
        self.pinned[diva.slot()]
    }

    #[inline]
    pub fn is_pinned(&self, role: RoleId) -> bool {
        self.pinned.contains(&Some(role))
    }

    /// Number of real actors with at least one role.
    pub fn actors_in_production(&self) -> usize {
        self.production.iter().filter(|&&count| count > 0).count()
    }

    /// Number of roles waiting for an overflow actor.
    pub fn overflow_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_overflow()).count()
    }

    /// Number of roles with nothing assigned yet.
    pub fn unassigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_assigned()).count()
    }

    /// Distinct actors the cast would need right now: real actors in
    /// production plus one overflow actor per overflow role.
    pub fn actors_used(&self) -> usize {
        self.actors_in_production() + self.overflow_count()
    }
}
