//! Seeded random problems.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use casting_core::CastingProblem;

const MAX_ELIGIBLE: usize = 5;
const MAX_SCENE_SIZE: usize = 4;

/// Generates a valid problem from `seed`.
///
/// Each role gets up to five distinct eligible actors (possibly none) and
/// each scene one to four distinct roles. The same arguments always give the
/// same problem.
pub fn random_problem(
    seed: u64,
    role_count: usize,
    scene_count: usize,
    actor_count: u32,
) -> CastingProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let actors = actor_count as usize;

    let roles = (0..role_count)
        .map(|_| {
            let eligible = rng.random_range(0..=MAX_ELIGIBLE.min(actors));
            distinct_ids(&mut rng, actors, eligible)
        })
        .collect();

    let scenes = (0..scene_count)
        .map(|_| {
            if role_count == 0 {
                return Vec::new();
            }
            let size = rng.random_range(1..=MAX_SCENE_SIZE.min(role_count));
            distinct_ids(&mut rng, role_count, size)
        })
        .collect();

    CastingProblem::new(actor_count, roles, scenes).expect("generated ids are in range")
}

// `amount` distinct 1-based ids out of `length`.
fn distinct_ids(rng: &mut StdRng, length: usize, amount: usize) -> Vec<u32> {
    index::sample(rng, length, amount)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect()
}
