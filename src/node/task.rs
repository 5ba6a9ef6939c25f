use super::Variable;
use serde::{Deserialize, Serialize};

/// Data carried by a task node: a unit of work with a duration, a cost and
/// an optional assignee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskData {
    pub label: String,
    pub duration: f64,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub description: String,
    /// Task-level inputs surfaced to downstream formula nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
}

impl TaskData {
    /// The assignee placeholder the editor writes when nobody is assigned.
    pub const UNASSIGNED: &'static str = "Non assigné";

    /// Returns the assignee, treating the empty string and the
    /// "Non assigné" placeholder as absent.
    pub fn assignee(&self) -> Option<&str> {
        self.assigned_to
            .as_deref()
            .filter(|who| !who.is_empty() && *who != Self::UNASSIGNED)
    }
}
