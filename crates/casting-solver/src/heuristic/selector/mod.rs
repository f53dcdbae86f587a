//! Move selectors.

mod merge;

pub use merge::MergeMoveSelector;
