//! Random selection of merge moves.

use rand::Rng;

use casting_core::{CastingDirector, RoleAssignment, RoleId};

use crate::heuristic::MergeMove;

/// Samples pairs of roles and looks for an actor both can move to.
///
/// One call to [`select`](Self::select) is one repair attempt: at most one
/// move comes out of it, and a rejected pair is simply dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeMoveSelector;

impl MergeMoveSelector {
    pub fn new() -> Self {
        Self
    }

    /// Draws two role ids uniformly, with replacement.
    pub fn sample_roles<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        role_count: usize,
    ) -> (RoleId, RoleId) {
        debug_assert!(role_count > 0);
        let first = RoleId::from_index(rng.random_range(0..role_count));
        let second = RoleId::from_index(rng.random_range(0..role_count));
        (first, second)
    }

    /// Returns the first merge available for the pair, if any.
    ///
    /// The pair is rejected when it names one role twice, when both roles
    /// already share an actor, when either role is overflow or pinned to a
    /// diva, or when the roles perform in a common scene. Otherwise the common
    /// candidates are scanned in versatility order and the first actor in
    /// production that is feasible for both roles wins.
    pub fn evaluate(
        &self,
        director: &CastingDirector<'_>,
        first: RoleId,
        second: RoleId,
    ) -> Option<MergeMove> {
        if first == second {
            return None;
        }

        let (RoleAssignment::Actor(first_actor), RoleAssignment::Actor(second_actor)) =
            (director.assignment(first), director.assignment(second))
        else {
            return None;
        };
        if first_actor == second_actor {
            return None;
        }

        let state = director.state();
        if state.is_pinned(first) || state.is_pinned(second) {
            return None;
        }

        let index = director.index();
        if index.co_occur(first, second) {
            return None;
        }

        index
            .common_candidates(first, second)
            .into_iter()
            .filter(|&actor| state.in_production(actor))
            .map(|actor| MergeMove::new(first, second, actor))
            .find(|merge| merge.is_doable(director))
    }

    /// Samples one pair and evaluates it.
    pub fn select<R: Rng + ?Sized>(
        &self,
        director: &CastingDirector<'_>,
        rng: &mut R,
    ) -> Option<MergeMove> {
        let role_count = director.index().role_count();
        if role_count == 0 {
            return None;
        }
        let (first, second) = self.sample_roles(rng, role_count);
        self.evaluate(director, first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casting_core::{ActorId, CastingProblem, Diva, RelationshipIndex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    fn constructed(index: &RelationshipIndex) -> CastingDirector<'_> {
        let mut director = CastingDirector::new(index);
        director.assign(role(1), actor(3));
        director.assign(role(2), actor(4));
        director.assign(role(3), actor(5));
        director
    }

    #[test]
    fn test_evaluate_finds_actor_in_production() {
        let index = solo_index();
        let director = constructed(&index);

        let merge = MergeMoveSelector::new().evaluate(&director, role(1), role(2));
        assert_eq!(merge, Some(MergeMove::new(role(1), role(2), actor(5))));
    }

    #[test]
    fn test_evaluate_rejects_same_role() {
        let index = solo_index();
        let director = constructed(&index);

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(1)), None);
    }

    #[test]
    fn test_evaluate_rejects_roles_sharing_actor() {
        let index = solo_index();
        let mut director = CastingDirector::new(&index);
        director.assign(role(1), actor(5));
        director.assign(role(2), actor(5));

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(2)), None);
    }

    #[test]
    fn test_evaluate_skips_actors_out_of_production() {
        let index = solo_index();
        let mut director = CastingDirector::new(&index);
        director.assign(role(1), actor(3));
        director.assign(role(2), actor(4));
        director.mark_overflow(role(3));

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(2)), None);
    }

    #[test]
    fn test_evaluate_rejects_overflow_role() {
        let index = solo_index();
        let mut director = constructed(&index);
        director.mark_overflow(role(2));

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(2)), None);
    }

    #[test]
    fn test_evaluate_rejects_co_occurring_roles() {
        let problem = CastingProblem::new(
            5,
            vec![vec![3, 5], vec![4, 5], vec![5]],
            vec![vec![1, 2], vec![3]],
        )
        .unwrap();
        let index = RelationshipIndex::new(&problem);
        let director = constructed(&index);

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(2)), None);
    }

    #[test]
    fn test_evaluate_rejects_pinned_role() {
        let problem = CastingProblem::new(
            5,
            vec![vec![1, 5], vec![4, 5], vec![5]],
            vec![vec![1], vec![2], vec![3]],
        )
        .unwrap();
        let index = RelationshipIndex::new(&problem);
        let mut director = CastingDirector::new(&index);
        director.pin_diva(role(1), Diva::First);
        director.assign(role(2), actor(4));
        director.assign(role(3), actor(5));

        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(1), role(2)), None);
        assert_eq!(MergeMoveSelector::new().evaluate(&director, role(2), role(1)), None);
    }

    #[test]
    fn test_sample_roles_stays_in_range() {
        let selector = MergeMoveSelector::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (first, second) = selector.sample_roles(&mut rng, 3);
            assert!((1..=3).contains(&first.get()));
            assert!((1..=3).contains(&second.get()));
        }
    }

    #[test]
    fn test_select_is_reproducible_with_seed() {
        let index = solo_index();
        let director = constructed(&index);
        let selector = MergeMoveSelector::new();

        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| selector.select(&director, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }
}
