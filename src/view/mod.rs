//! Presentation logic for diagram nodes.
//!
//! Everything here is a pure function of node data plus the `selected`
//! flag: handle declarations for the canvas to wire edges to, and view
//! models describing what each node shell displays. Drag, connect and
//! click interactions stay with the external diagram engine.

pub mod handles;
pub mod node_views;
pub mod tabs;

pub use handles::*;
pub use node_views::*;
pub use tabs::*;

use crate::node::Value;

/// Characters kept of a task description before the ellipsis.
pub const TASK_DESCRIPTION_LIMIT: usize = 50;
/// Characters kept of a decision description before the ellipsis.
pub const DECISION_DESCRIPTION_LIMIT: usize = 25;
/// Characters kept of an event description before the ellipsis.
pub const EVENT_DESCRIPTION_LIMIT: usize = 20;

/// Formats a value for display: two decimals when a fractional part is
/// present, bare integer otherwise, text unchanged.
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Cuts `text` at `limit` characters, appending an ellipsis marker when
/// anything was dropped.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut cut: String = text.chars().take(limit).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

/// Truncated description, or `None` when the field is empty.
fn description_or_none(description: &str, limit: usize) -> Option<String> {
    if description.is_empty() {
        None
    } else {
        Some(truncate(description, limit))
    }
}
