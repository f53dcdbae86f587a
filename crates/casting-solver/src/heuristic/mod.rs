//! Heuristic components for the repair phase
//!
//! This module contains:
//! - Moves: Operations that change which actor holds a role
//! - Selectors: Components that sample and evaluate candidate moves

pub mod r#move;
pub mod selector;

pub use r#move::MergeMove;
pub use selector::MergeMoveSelector;
