//! Property-panel editing: list operations and partial patches.
//!
//! The panels never own node data. They produce fresh lists and patches;
//! the canvas folds those back into its own state.

pub mod list;
pub mod patch;

pub use list::*;
pub use patch::*;
