//! Error types for the casting tool

use thiserror::Error;

use casting_config::ConfigError;
use casting_core::{CastingError, Violation};

use crate::io::ParseError;

/// Everything that can stop a casting run before or after solving.
///
/// Solving itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text is not a well-formed problem.
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    /// The records parse but name ids outside their declared bounds.
    #[error("invalid problem: {0}")]
    Problem(#[from] CastingError),

    /// The configuration file could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report broke a hard constraint.
    #[error("report failed verification: {}", summarize(.0))]
    Verification(Vec<Violation>),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for casting runs
pub type Result<T> = std::result::Result<T, Error>;
