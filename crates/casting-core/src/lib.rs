//! Casting Core - Core types and constraint checking for the casting solver
//!
//! This crate provides the fundamental abstractions:
//! - Id types for roles, scenes and actors
//! - The validated problem records
//! - The static relationship index
//! - The assignment state and the director that mutates it
//! - The final report and its verification

pub mod director;
pub mod error;
pub mod id;
pub mod index;
pub mod problem;
pub mod report;
pub mod state;


pub use director::CastingDirector;
pub use error::{CastingError, Result};
pub use id::{ActorId, Diva, RoleId, SceneId};
pub use index::RelationshipIndex;
pub use problem::CastingProblem;
pub use report::{ActorRoles, CastingReport, Violation};
pub use state::{AssignmentState, RoleAssignment};
