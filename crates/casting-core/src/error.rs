//! Error types for the casting solver

use thiserror::Error;

/// Errors raised while validating a casting problem.
///
/// The solving engine itself never fails; every error here is detected
/// before the relationship index is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastingError {
    /// The number of role or scene records differs from the declared count.
    #[error("expected {expected} {kind} records, found {found}")]
    RecordCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// A role names an actor outside `1..=actor_count`.
    #[error("role {role} lists actor {actor}, but only {actor_count} actors are declared")]
    UnknownActor {
        role: usize,
        actor: u32,
        actor_count: u32,
    },

    /// A scene names a role outside `1..=role_count`.
    #[error("scene {scene} lists role {role}, but only {role_count} roles are declared")]
    UnknownRole {
        scene: usize,
        role: u32,
        role_count: usize,
    },
}

/// Result type alias for casting operations
pub type Result<T> = std::result::Result<T, CastingError>;
