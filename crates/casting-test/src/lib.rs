//! Shared test fixtures for the casting crates.
//!
//! - [`fixtures`] - Small hand-built problems with known outcomes
//! - [`random`] - Seeded random problem generation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! casting-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use casting_test::fixtures::{self, shared_scene};
//! ```

pub mod fixtures;
pub mod random;

pub use fixtures::assert_feasible;
pub use random::random_problem;
