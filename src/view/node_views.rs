use super::{
    DECISION_DESCRIPTION_LIMIT, EVENT_DESCRIPTION_LIMIT, ScenarioTab, TASK_DESCRIPTION_LIMIT,
    description_or_none, format_value,
};
use crate::node::{
    DecisionData, EventData, EventType, FormulaData, ScenarioData, TaskData, Value, Variable,
};

/// One `name: value` row in a node body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableLine {
    pub name: String,
    pub value_text: String,
}

impl VariableLine {
    fn from_variable(variable: &Variable) -> Self {
        Self {
            name: variable.name.clone(),
            value_text: format_value(&variable.value),
        }
    }
}

/// What a task node displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub label: String,
    pub duration_text: String,
    pub cost_text: String,
    /// `None` when the task is unassigned or carries the placeholder.
    pub assignee: Option<String>,
    pub description: Option<String>,
    pub selected: bool,
}

impl TaskView {
    pub fn build(data: &TaskData, selected: bool) -> Self {
        Self {
            label: data.label.clone(),
            duration_text: format!("{} min", format_value(&Value::from(data.duration))),
            cost_text: format!("{}€", format_value(&Value::from(data.cost))),
            assignee: data.assignee().map(str::to_string),
            description: description_or_none(&data.description, TASK_DESCRIPTION_LIMIT),
            selected,
        }
    }
}

/// What a decision node displays inside the diamond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionView {
    pub label: String,
    pub description: Option<String>,
    pub selected: bool,
}

impl DecisionView {
    pub fn build(data: &DecisionData, selected: bool) -> Self {
        Self {
            label: data.label.clone(),
            description: description_or_none(&data.description, DECISION_DESCRIPTION_LIMIT),
            selected,
        }
    }
}

/// What an event node displays inside the circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub label: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub selected: bool,
}

impl EventView {
    pub fn build(data: &EventData, selected: bool) -> Self {
        Self {
            label: data.label.clone(),
            description: description_or_none(&data.description, EVENT_DESCRIPTION_LIMIT),
            event_type: data.event_type,
            selected,
        }
    }
}

/// The result section of a formula node. Assigned variables win over the
/// scalar result; with neither, no section renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultDisplay {
    Assigned(Vec<VariableLine>),
    Single(String),
}

/// What a formula node displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaView {
    pub label: String,
    pub formula_text: String,
    pub variables: Vec<VariableLine>,
    pub result: Option<ResultDisplay>,
    /// Evaluation error, rendered verbatim as an inline message.
    pub error: Option<String>,
    pub selected: bool,
}

impl FormulaView {
    /// Placeholder shown while the formula text is still empty.
    pub const EMPTY_FORMULA: &'static str = "f(x) = x";

    pub fn build(data: &FormulaData, selected: bool) -> Self {
        let result = match data.assigned_variables.as_deref() {
            Some(assigned) if !assigned.is_empty() => Some(ResultDisplay::Assigned(
                assigned.iter().map(VariableLine::from_variable).collect(),
            )),
            _ => data
                .result
                .as_ref()
                .map(|value| ResultDisplay::Single(format_value(value))),
        };

        Self {
            label: data.label.clone(),
            formula_text: if data.formula.is_empty() {
                Self::EMPTY_FORMULA.to_string()
            } else {
                data.formula.clone()
            },
            variables: data.variables.iter().map(VariableLine::from_variable).collect(),
            result,
            error: data.error.clone(),
            selected,
        }
    }
}

/// One scenario card in the scenario node's list tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCard {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub variables: Vec<VariableLine>,
}

/// One row of the simulation results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRow {
    pub scenario: String,
    pub margin_text: String,
    pub resilient: bool,
}

/// The populated results tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationTable {
    pub rows: Vec<SimulationRow>,
    /// "Seuil de résilience" footer, present when a threshold is set.
    pub threshold_text: Option<String>,
}

/// Content of the scenario node's active tab. `Results(None)` renders the
/// run-a-simulation placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioContent {
    Scenarios(Vec<ScenarioCard>),
    Results(Option<SimulationTable>),
}

/// What a scenario node displays for its active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioView {
    pub label: String,
    pub tab: ScenarioTab,
    pub content: ScenarioContent,
    pub selected: bool,
}

impl ScenarioView {
    pub fn build(data: &ScenarioData, selected: bool, tab: ScenarioTab) -> Self {
        let content = match tab {
            ScenarioTab::Scenarios => ScenarioContent::Scenarios(
                data.scenarios
                    .iter()
                    .map(|scenario| ScenarioCard {
                        name: scenario.name.clone(),
                        description: scenario.description.clone(),
                        active: scenario.active,
                        variables: scenario
                            .variables
                            .iter()
                            .map(VariableLine::from_variable)
                            .collect(),
                    })
                    .collect(),
            ),
            ScenarioTab::Results => {
                let table = match data.simulation_results.as_deref() {
                    Some(results) if !results.is_empty() => Some(SimulationTable {
                        rows: results
                            .iter()
                            .map(|result| SimulationRow {
                                scenario: result.scenario.clone(),
                                margin_text: format!(
                                    "{}%",
                                    format_value(&Value::from(result.margin))
                                ),
                                resilient: result.is_resilient,
                            })
                            .collect(),
                        threshold_text: data
                            .threshold
                            .map(|t| format!("{}%", format_value(&Value::from(t)))),
                    }),
                    _ => None,
                };
                ScenarioContent::Results(table)
            }
        };

        Self {
            label: data.label.clone(),
            tab,
            content,
            selected,
        }
    }
}
