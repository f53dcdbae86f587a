//! Moves applied to the working assignment.

mod merge;

pub use merge::MergeMove;
