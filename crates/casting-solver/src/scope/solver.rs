//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use casting_core::{CastingDirector, RelationshipIndex};

use crate::stats::{PhaseStats, SolverStats};

/// Top-level scope for the entire solving process.
///
/// Owns the working [`CastingDirector`] and the random source used by the
/// repair phase. Phases borrow it one after another.
pub struct SolverScope<'p> {
    director: CastingDirector<'p>,
    rng: StdRng,
    start_time: Option<Instant>,
    total_step_count: u64,
    stats: SolverStats,
    phase_stats: Vec<PhaseStats>,
}

impl<'p> SolverScope<'p> {
    /// Creates a scope drawing randomness from OS entropy.
    pub fn new(director: CastingDirector<'p>) -> Self {
        Self::with_rng(director, StdRng::from_os_rng())
    }

    /// Creates a scope with a fixed seed for reproducible runs.
    pub fn with_seed(director: CastingDirector<'p>, seed: u64) -> Self {
        Self::with_rng(director, StdRng::seed_from_u64(seed))
    }

    fn with_rng(director: CastingDirector<'p>, rng: StdRng) -> Self {
        Self {
            director,
            rng,
            start_time: None,
            total_step_count: 0,
            stats: SolverStats::default(),
            phase_stats: Vec::new(),
        }
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn index(&self) -> &'p RelationshipIndex {
        self.director.index()
    }

    pub fn director(&self) -> &CastingDirector<'p> {
        &self.director
    }

    pub fn director_mut(&mut self) -> &mut CastingDirector<'p> {
        &mut self.director
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Borrows the director and the random source together.
    pub fn director_and_rng(&mut self) -> (&mut CastingDirector<'p>, &mut StdRng) {
        (&mut self.director, &mut self.rng)
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.stats.record_step();
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.stats.record_move(accepted);
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Statistics of every completed phase, in execution order.
    pub fn phase_stats(&self) -> &[PhaseStats] {
        &self.phase_stats
    }

    pub(crate) fn push_phase_stats(&mut self, stats: PhaseStats) {
        self.phase_stats.push(stats);
    }

    /// Consumes the scope, returning the director and the collected statistics.
    pub fn into_parts(self) -> (CastingDirector<'p>, SolverStats, Vec<PhaseStats>) {
        (self.director, self.stats, self.phase_stats)
    }
}
