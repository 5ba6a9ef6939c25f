//! Partial updates flowing from the property panels back into node data.
//!
//! A patch carries only the fields the user touched; applying it merges
//! those into the existing data and leaves everything else alone. The
//! read-only evaluation outputs (assigned variables, results, errors) have
//! no patch fields; only the external engine writes them.

use crate::catalog::FormulaTemplate;
use crate::document::EdgeData;
use crate::log;
use crate::node::{
    DecisionData, EventData, EventType, FormulaData, NodeData, Scenario, ScenarioData, TaskData,
    TriggerMode, Variable,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub label: Option<String>,
    pub duration: Option<f64>,
    pub cost: Option<f64>,
    pub assigned_to: Option<String>,
    pub description: Option<String>,
    pub variables: Option<Vec<Variable>>,
}

impl TaskPatch {
    pub fn apply_to(self, data: &mut TaskData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(duration) = self.duration {
            data.duration = duration;
        }
        if let Some(cost) = self.cost {
            data.cost = cost;
        }
        if let Some(assigned_to) = self.assigned_to {
            data.assigned_to = Some(assigned_to);
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(variables) = self.variables {
            data.variables = variables;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub rotation: Option<i32>,
}

impl DecisionPatch {
    pub fn apply_to(self, data: &mut DecisionData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(rotation) = self.rotation {
            data.rotation = rotation;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
}

impl EventPatch {
    pub fn apply_to(self, data: &mut EventData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(event_type) = self.event_type {
            data.event_type = event_type;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormulaPatch {
    pub label: Option<String>,
    pub formula: Option<String>,
    pub description: Option<String>,
    pub variables: Option<Vec<Variable>>,
    pub trigger_type: Option<TriggerMode>,
    pub frequency: Option<u32>,
}

impl FormulaPatch {
    /// The patch produced by picking `template` in the selector: formula and
    /// seed variables are copied in, the description only fills a blank one.
    pub fn from_template(template: &FormulaTemplate, current_description: &str) -> Self {
        Self {
            formula: Some(template.formula.clone()),
            variables: Some(template.variables.clone()),
            description: Some(if current_description.is_empty() {
                template.description.clone()
            } else {
                current_description.to_string()
            }),
            ..Self::default()
        }
    }

    pub fn apply_to(self, data: &mut FormulaData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(formula) = self.formula {
            data.formula = formula;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(variables) = self.variables {
            data.variables = variables;
        }
        if let Some(trigger_type) = self.trigger_type {
            data.trigger_type = trigger_type;
        }
        if let Some(frequency) = self.frequency {
            data.frequency = Some(frequency);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioPatch {
    pub label: Option<String>,
    pub scenarios: Option<Vec<Scenario>>,
    pub threshold: Option<f64>,
    pub reference_variable: Option<String>,
}

impl ScenarioPatch {
    pub fn apply_to(self, data: &mut ScenarioData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(scenarios) = self.scenarios {
            data.scenarios = scenarios;
        }
        if let Some(threshold) = self.threshold {
            data.threshold = Some(threshold);
        }
        if let Some(reference_variable) = self.reference_variable {
            data.reference_variable = Some(reference_variable);
        }
    }
}

/// Partial update of an edge's cosmetic data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgePatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub animated: Option<bool>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl EdgePatch {
    pub fn apply_to(self, data: &mut EdgeData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(animated) = self.animated {
            data.animated = animated;
        }
        if let Some(stroke) = self.stroke {
            data.stroke = Some(stroke);
        }
        if let Some(stroke_width) = self.stroke_width {
            data.stroke_width = Some(stroke_width);
        }
    }
}

/// A kind-tagged patch, for callers that hold nodes as [`NodeData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodePatch {
    Task(TaskPatch),
    Decision(DecisionPatch),
    Event(EventPatch),
    Formula(FormulaPatch),
    Scenario(ScenarioPatch),
}

impl NodePatch {
    /// Merges the patch into `data` when the kinds line up; a mismatched
    /// patch is dropped.
    pub fn apply_to(self, data: &mut NodeData) {
        match (self, data) {
            (NodePatch::Task(patch), NodeData::Task(data)) => patch.apply_to(data),
            (NodePatch::Decision(patch), NodeData::Decision(data)) => patch.apply_to(data),
            (NodePatch::Event(patch), NodeData::Event(data)) => patch.apply_to(data),
            (NodePatch::Formula(patch), NodeData::Formula(data)) => patch.apply_to(data),
            (NodePatch::Scenario(patch), NodeData::Scenario(data)) => patch.apply_to(data),
            (patch, data) => {
                log::warn!(
                    "dropping {:?} patch aimed at a {} node",
                    patch,
                    data.kind()
                );
            }
        }
    }
}
