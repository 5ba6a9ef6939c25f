use super::{AssignedVariable, Value, Variable};
use serde::{Deserialize, Serialize};

/// When the external engine recomputes a formula node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerMode {
    #[default]
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "onChange")]
    OnChange,
    #[serde(rename = "onProcess")]
    OnProcess,
    #[serde(rename = "scheduled")]
    Scheduled,
}

/// Data carried by a formula node.
///
/// `formula` holds one or more `name = expression` lines separated by
/// newlines. Evaluation happens in the external backend; this crate only
/// carries its inputs (`variables`, trigger settings) and displays its
/// outputs (`assigned_variables`, `result`, `error`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormulaData {
    pub label: String,
    pub formula: String,
    pub description: String,
    pub variables: Vec<Variable>,
    /// Variables assigned by the last evaluation, in assignment order.
    /// Takes precedence over `result` for display when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_variables: Option<Vec<AssignedVariable>>,
    /// The first evaluation result, kept for single-line formulas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Verbatim message from a failed evaluation, rendered inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub trigger_type: TriggerMode,
    /// Recomputation period in minutes; only meaningful for
    /// [`TriggerMode::Scheduled`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
}

impl FormulaData {
    /// Default period offered when the trigger switches to `Scheduled`.
    pub const DEFAULT_FREQUENCY_MINUTES: u32 = 5;
}
