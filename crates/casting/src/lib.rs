//! Casting - diva-aware role assignment
//!
//! Assigns actors to roles so that no actor appears twice in a scene and the
//! two divas never share a scene, using as few actors as a greedy start plus
//! randomized repair can manage. Roles no actor can take go to overflow
//! actors numbered after the real ones.
//!
//! # Example
//!
//! ```rust
//! use casting::prelude::*;
//!
//! let input = "2 1 3\n2 1 3\n2 2 3\n2 1 2\n";
//! let config = SolverConfig::new().with_random_seed(0);
//! let output = casting::solve_str(input, &config).unwrap();
//!
//! assert_eq!(output, "2\n2 1 2\n3 1 1\n");
//! ```

mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{format_report, parse_problem, write_report, ParseError};

// Problem model and report
pub use casting_core::{
    ActorId, ActorRoles, CastingError, CastingProblem, CastingReport, Diva, RelationshipIndex,
    RoleId, SceneId, Violation,
};

// Configuration
pub use casting_config::{ConfigError, ConstructionHeuristicType, SolverConfig};

// Solver
pub use casting_solver::{solve, SolveResult, Solver};

#[cfg(feature = "console")]
pub use casting_console as console;

/// Parses a problem, solves it and renders the report.
pub fn solve_str(input: &str, config: &SolverConfig) -> Result<String> {
    let problem = parse_problem(input)?;
    let result = solve(&problem, config);
    Ok(format_report(&result.report))
}

/// Re-checks a report against its problem.
///
/// # Errors
///
/// Returns [`Error::Verification`] listing every violation found.
pub fn verify(problem: &CastingProblem, report: &CastingReport) -> Result<()> {
    let index = RelationshipIndex::new(problem);
    let violations = report.verify(&index);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Verification(violations))
    }
}

pub mod prelude {
    pub use super::{CastingProblem, CastingReport, SolverConfig, Solver};
    pub use super::{ActorId, Diva, RoleId};
}
