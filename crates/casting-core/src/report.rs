//! Final casting report and its verification.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::id::{ActorId, RoleId, SceneId};
use crate::index::RelationshipIndex;

/// The roles played by one actor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorRoles {
    pub actor: ActorId,
    /// Roles in ascending order.
    pub roles: Vec<RoleId>,
}

/// A complete cast: every role mapped to exactly one actor, grouped by actor.
///
/// Actors past the declared `actor_count` are overflow actors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastingReport {
    actor_count: u32,
    role_count: usize,
    actors: Vec<ActorRoles>,
}

impl CastingReport {
    /// Groups a per-role cast by actor.
    ///
    /// `cast[i]` is the actor playing role `i + 1`. Actors come out in
    /// ascending id order and each actor's roles in ascending role order.
    ///
    /// # Example
    ///
    /// ```
    /// use casting_core::{ActorId, CastingReport, RoleId};
    ///
    /// let cast = [ActorId::new(3), ActorId::new(2), ActorId::new(3)];
    /// let report = CastingReport::from_cast(3, &cast);
    ///
    /// assert_eq!(report.actors_used(), 2);
    /// assert_eq!(report.actors()[1].roles, vec![RoleId::new(1), RoleId::new(3)]);
    /// ```
    pub fn from_cast(actor_count: u32, cast: &[ActorId]) -> Self {
        let mut grouped: BTreeMap<ActorId, Vec<RoleId>> = BTreeMap::new();
        for (i, &actor) in cast.iter().enumerate() {
            grouped.entry(actor).or_default().push(RoleId::from_index(i));
        }
        let actors = grouped
            .into_iter()
            .map(|(actor, roles)| ActorRoles { actor, roles })
            .collect();
        Self {
            actor_count,
            role_count: cast.len(),
            actors,
        }
    }

    /// Number of actors with at least one role.
    pub fn actors_used(&self) -> usize {
        self.actors.len()
    }

    /// Actors in ascending id order.
    pub fn actors(&self) -> &[ActorRoles] {
        &self.actors
    }

    pub fn role_count(&self) -> usize {
        self.role_count
    }

    /// Number of declared real actors.
    pub fn actor_count(&self) -> u32 {
        self.actor_count
    }

    #[inline]
    pub fn is_overflow_actor(&self, actor: ActorId) -> bool {
        actor.get() > self.actor_count
    }

    pub fn real_actors_used(&self) -> usize {
        self.actors
            .iter()
            .filter(|entry| !self.is_overflow_actor(entry.actor))
            .count()
    }

    pub fn overflow_actors_used(&self) -> usize {
        self.actors_used() - self.real_actors_used()
    }

    /// Returns the per-role cast, indexed by role index.
    ///
    /// Roles that appear in no actor's list map to `None`.
    pub fn cast(&self) -> Vec<Option<ActorId>> {
        let mut cast = vec![None; self.role_count];
        for entry in &self.actors {
            for role in &entry.roles {
                if let Some(slot) = cast.get_mut(role.index()) {
                    *slot = Some(entry.actor);
                }
            }
        }
        cast
    }

    /// Checks the report against the problem and returns every violation.
    ///
    /// An empty result means the cast is complete and respects both hard
    /// constraints.
    pub fn verify(&self, index: &RelationshipIndex) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut cast: Vec<Option<ActorId>> = vec![None; index.role_count()];

        for entry in &self.actors {
            if self.is_overflow_actor(entry.actor) && entry.roles.len() > 1 {
                violations.push(Violation::OverflowReused {
                    actor: entry.actor,
                    roles: entry.roles.len(),
                });
            }
            for &role in &entry.roles {
                let Some(slot) = cast.get_mut(role.index()) else {
                    violations.push(Violation::UnknownRole { role });
                    continue;
                };
                if slot.is_some() {
                    violations.push(Violation::RepeatedRole { role });
                    continue;
                }
                *slot = Some(entry.actor);
                if !self.is_overflow_actor(entry.actor) && !index.is_eligible(role, entry.actor) {
                    violations.push(Violation::IneligibleActor {
                        role,
                        actor: entry.actor,
                    });
                }
            }
        }

        for role in index.role_ids() {
            if cast[role.index()].is_none() {
                violations.push(Violation::MissingRole { role });
            }
        }

        for scene in index.scene_ids() {
            let mut seen: HashMap<ActorId, RoleId> = HashMap::new();
            for &role in index.roles_in(scene) {
                let Some(actor) = cast[role.index()] else {
                    continue;
                };
                match seen.get(&actor) {
                    Some(&other) if other != role => {
                        violations.push(Violation::SharedScene {
                            scene,
                            actor,
                            first: other,
                            second: role,
                        });
                    }
                    Some(_) => {}
                    None => {
                        seen.insert(actor, role);
                    }
                }
            }
            let is_diva = |diva: ActorId| !self.is_overflow_actor(diva) && seen.contains_key(&diva);
            if is_diva(ActorId::DIVA_1) && is_diva(ActorId::DIVA_2) {
                violations.push(Violation::DivasTogether { scene });
            }
        }

        violations
    }

    /// Returns true if [`verify`](Self::verify) finds nothing.
    pub fn is_feasible(&self, index: &RelationshipIndex) -> bool {
        self.verify(index).is_empty()
    }
}

/// A broken rule found by [`CastingReport::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("actor {actor} plays roles {first} and {second} in scene {scene}")]
    SharedScene {
        scene: SceneId,
        actor: ActorId,
        first: RoleId,
        second: RoleId,
    },

    #[error("both divas perform in scene {scene}")]
    DivasTogether { scene: SceneId },

    #[error("role {role} has no actor")]
    MissingRole { role: RoleId },

    #[error("role {role} is played by more than one actor")]
    RepeatedRole { role: RoleId },

    #[error("role {role} does not exist")]
    UnknownRole { role: RoleId },

    #[error("actor {actor} is not eligible for role {role}")]
    IneligibleActor { role: RoleId, actor: ActorId },

    #[error("overflow actor {actor} plays {roles} roles")]
    OverflowReused { actor: ActorId, roles: usize },
}
