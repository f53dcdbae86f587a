//! Scope hierarchy for solver execution.
//!
//! Scopes maintain state at different levels of the solving process:
//! - [`SolverScope`]: Top-level, holds the working assignment and the random source
//! - [`PhaseScope`]: Per-phase counters and lifecycle logging

mod phase;
mod solver;

pub use phase::PhaseScope;
pub use solver::SolverScope;

#[cfg(test)]
mod tests;
