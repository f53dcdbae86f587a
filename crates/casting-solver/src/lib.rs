//! Casting Solver Engine
//!
//! This crate provides the solver implementation:
//! - Solver scopes holding the working assignment and the random source
//! - Phases (diva seeding, greedy construction, local-search repair)
//! - The merge move used by the repair phase
//! - Synthesis of overflow actors into the final report
//! - Statistics
//!
//! Logging levels:
//! - **INFO**: Solver start/end, phase summaries, problem scale
//! - **DEBUG**: Diva seeding outcome and repair progress
//! - **TRACE**: Individual merges

pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod synthesis;

pub use heuristic::{MergeMove, MergeMoveSelector};
pub use phase::{
    construction::ConstructionPhase,
    diva::{find_diva_pair, DivaSeedingPhase},
    repair::RepairPhase,
    Phase,
};
pub use scope::{PhaseScope, SolverScope};
pub use solver::{solve, SolveResult, Solver};
pub use stats::{PhaseStats, SolverStats};
pub use synthesis::synthesize;
