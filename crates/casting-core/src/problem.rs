//! Validated problem records.

use crate::error::{CastingError, Result};
use crate::id::{ActorId, RoleId};

/// A casting problem: which actors may play each role, and which roles
/// perform together in each scene.
///
/// Every id is checked against its declared bound on construction, so the
/// relationship index and the solver can index tables without further checks.
///
/// # Example
///
/// ```
/// use casting_core::CastingProblem;
///
/// // Two roles sharing one scene; actor 3 could play either.
/// let problem = CastingProblem::new(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]]).unwrap();
///
/// assert_eq!(problem.role_count(), 2);
/// assert_eq!(problem.scene_count(), 1);
/// assert_eq!(problem.actor_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastingProblem {
    actor_count: u32,
    roles: Vec<Vec<ActorId>>,
    scenes: Vec<Vec<RoleId>>,
}

impl CastingProblem {
    /// Builds a problem from raw per-role actor lists and per-scene role lists.
    ///
    /// Role `i + 1` is described by `roles[i]`, scene `j` by `scenes[j]`.
    pub fn new(actor_count: u32, roles: Vec<Vec<u32>>, scenes: Vec<Vec<u32>>) -> Result<Self> {
        let role_count = roles.len();

        let roles = roles
            .into_iter()
            .enumerate()
            .map(|(i, actors)| {
                actors
                    .into_iter()
                    .map(|actor| {
                        if actor == 0 || actor > actor_count {
                            Err(CastingError::UnknownActor {
                                role: i + 1,
                                actor,
                                actor_count,
                            })
                        } else {
                            Ok(ActorId::new(actor))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let scenes = scenes
            .into_iter()
            .enumerate()
            .map(|(scene, members)| {
                members
                    .into_iter()
                    .map(|role| {
                        if role == 0 || role as usize > role_count {
                            Err(CastingError::UnknownRole {
                                scene,
                                role,
                                role_count,
                            })
                        } else {
                            Ok(RoleId::new(role))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            actor_count,
            roles,
            scenes,
        })
    }

    /// Builds a problem and checks the record counts against declared totals.
    pub fn with_declared_counts(
        role_count: usize,
        scene_count: usize,
        actor_count: u32,
        roles: Vec<Vec<u32>>,
        scenes: Vec<Vec<u32>>,
    ) -> Result<Self> {
        if roles.len() != role_count {
            return Err(CastingError::RecordCount {
                kind: "role",
                expected: role_count,
                found: roles.len(),
            });
        }
        if scenes.len() != scene_count {
            return Err(CastingError::RecordCount {
                kind: "scene",
                expected: scene_count,
                found: scenes.len(),
            });
        }
        Self::new(actor_count, roles, scenes)
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn actor_count(&self) -> u32 {
        self.actor_count
    }

    /// Returns the eligible actors of a role, in input order.
    pub fn role_actors(&self, role: RoleId) -> &[ActorId] {
        &self.roles[role.index()]
    }

    /// Returns the roles of a scene, in input order.
    pub fn scene_roles(&self, scene: usize) -> &[RoleId] {
        &self.scenes[scene]
    }

    /// Iterates over all role ids in ascending order.
    pub fn role_ids(&self) -> impl Iterator<Item = RoleId> {
        (0..self.roles.len()).map(RoleId::from_index)
    }
}
