//! Static relationship index between roles, scenes and actors.
//!
//! Built once from a validated [`CastingProblem`] and read-only afterwards.
//! Lists keep input order where order drives trial order; sets back the
//! membership probes used by the constraint checker and the repair moves.

use std::collections::HashSet;

use crate::id::{ActorId, Diva, RoleId, SceneId};
use crate::problem::CastingProblem;

/// Role, scene and actor relationships of one problem.
///
/// # Example
///
/// ```
/// use casting_core::{ActorId, CastingProblem, RelationshipIndex, RoleId};
///
/// let problem = CastingProblem::new(3, vec![vec![1, 3], vec![2, 3]], vec![vec![1, 2]]).unwrap();
/// let index = RelationshipIndex::new(&problem);
///
/// // Actor 3 can play both roles, so it is tried first.
/// assert_eq!(index.versatility(ActorId::new(3)), 2);
/// assert_eq!(index.candidates(RoleId::new(1))[0], ActorId::new(3));
/// assert!(index.co_occur(RoleId::new(1), RoleId::new(2)));
/// ```
#[derive(Debug, Clone)]
pub struct RelationshipIndex {
    actor_count: u32,
    eligible: Vec<Vec<ActorId>>,
    eligible_sets: Vec<HashSet<ActorId>>,
    candidates: Vec<Vec<ActorId>>,
    scene_roles: Vec<Vec<RoleId>>,
    scene_role_sets: Vec<HashSet<RoleId>>,
    role_scenes: Vec<Vec<SceneId>>,
    versatility: Vec<u32>,
    diva_roles: [Vec<RoleId>; 2],
}

impl RelationshipIndex {
    /// Builds the index from a validated problem.
    pub fn new(problem: &CastingProblem) -> Self {
        let role_count = problem.role_count();
        let scene_count = problem.scene_count();
        let actor_count = problem.actor_count();

        let mut eligible = Vec::with_capacity(role_count);
        let mut eligible_sets = Vec::with_capacity(role_count);
        let mut versatility = vec![0u32; actor_count as usize];
        let mut diva_roles: [Vec<RoleId>; 2] = [Vec::new(), Vec::new()];

        for role in problem.role_ids() {
            let actors = problem.role_actors(role);
            let mut set = HashSet::with_capacity(actors.len());
            for &actor in actors {
                // Repeated actors in one record count once.
                if !set.insert(actor) {
                    continue;
                }
                versatility[actor.index()] += 1;
                if let Some(diva) = actor.diva() {
                    diva_roles[diva.slot()].push(role);
                }
            }
            eligible.push(actors.to_vec());
            eligible_sets.push(set);
        }

        // Stable sort keeps input order among equally versatile actors.
        let candidates = eligible
            .iter()
            .map(|actors: &Vec<ActorId>| {
                let mut seen = HashSet::with_capacity(actors.len());
                let mut distinct: Vec<ActorId> =
                    actors.iter().copied().filter(|a| seen.insert(*a)).collect();
                distinct.sort_by(|a, b| versatility[b.index()].cmp(&versatility[a.index()]));
                distinct
            })
            .collect();

        let mut scene_roles = Vec::with_capacity(scene_count);
        let mut scene_role_sets = Vec::with_capacity(scene_count);
        let mut role_scenes = vec![Vec::new(); role_count];

        for scene_index in 0..scene_count {
            let scene = SceneId::from_index(scene_index);
            let roles = problem.scene_roles(scene_index);
            let mut set = HashSet::with_capacity(roles.len());
            for &role in roles {
                if set.insert(role) {
                    role_scenes[role.index()].push(scene);
                }
            }
            scene_roles.push(roles.to_vec());
            scene_role_sets.push(set);
        }

        Self {
            actor_count,
            eligible,
            eligible_sets,
            candidates,
            scene_roles,
            scene_role_sets,
            role_scenes,
            versatility,
            diva_roles,
        }
    }

    pub fn role_count(&self) -> usize {
        self.eligible.len()
    }

    pub fn scene_count(&self) -> usize {
        self.scene_roles.len()
    }

    pub fn actor_count(&self) -> u32 {
        self.actor_count
    }

    /// Iterates over all role ids in ascending order.
    pub fn role_ids(&self) -> impl Iterator<Item = RoleId> {
        (0..self.eligible.len()).map(RoleId::from_index)
    }

    /// Iterates over all scene ids in ascending order.
    pub fn scene_ids(&self) -> impl Iterator<Item = SceneId> {
        (0..self.scene_roles.len()).map(SceneId::from_index)
    }

    /// Eligible actors of a role in input order, repeats included.
    #[inline]
    pub fn eligible(&self, role: RoleId) -> &[ActorId] {
        &self.eligible[role.index()]
    }

    #[inline]
    pub fn is_eligible(&self, role: RoleId, actor: ActorId) -> bool {
        self.eligible_sets[role.index()].contains(&actor)
    }

    /// Distinct eligible actors of a role, most versatile first.
    #[inline]
    pub fn candidates(&self, role: RoleId) -> &[ActorId] {
        &self.candidates[role.index()]
    }

    /// Roles performed in a scene, in input order.
    #[inline]
    pub fn roles_in(&self, scene: SceneId) -> &[RoleId] {
        &self.scene_roles[scene.index()]
    }

    #[inline]
    pub fn scene_contains(&self, scene: SceneId, role: RoleId) -> bool {
        self.scene_role_sets[scene.index()].contains(&role)
    }

    /// Scenes a role appears in, ascending.
    #[inline]
    pub fn scenes_of(&self, role: RoleId) -> &[SceneId] {
        &self.role_scenes[role.index()]
    }

    /// Number of distinct roles an actor is eligible for.
    ///
    /// Overflow actors (ids past `actor_count`) have no versatility.
    #[inline]
    pub fn versatility(&self, actor: ActorId) -> u32 {
        self.versatility.get(actor.index()).copied().unwrap_or(0)
    }

    /// Roles the given diva is eligible for, in discovery order.
    #[inline]
    pub fn diva_roles(&self, diva: Diva) -> &[RoleId] {
        &self.diva_roles[diva.slot()]
    }

    /// Returns true if the two roles perform together in at least one scene.
    pub fn co_occur(&self, first: RoleId, second: RoleId) -> bool {
        self.scenes_of(first)
            .iter()
            .any(|&scene| self.scene_contains(scene, second))
    }

    /// Actors eligible for both roles.
    ///
    /// Walks the shorter candidate list and probes the other role's set, so
    /// the result follows that list's versatility order.
    pub fn common_candidates(&self, first: RoleId, second: RoleId) -> Vec<ActorId> {
        let (walk, probe) = if self.candidates(first).len() < self.candidates(second).len() {
            (first, second)
        } else {
            (second, first)
        };
        let probe_set = &self.eligible_sets[probe.index()];
        self.candidates(walk)
            .iter()
            .copied()
            .filter(|actor| probe_set.contains(actor))
            .collect()
    }
}
