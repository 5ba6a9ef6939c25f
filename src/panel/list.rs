//! List editing shared by the property panels.
//!
//! Variables, scenario variables and scenarios all follow the same pattern:
//! every operation copies the list it is given and returns the fresh one
//! for the caller to fold back into node data. Out-of-range indices leave
//! the copy unchanged.

use crate::node::{Scenario, Value, Variable};

/// A single-field edit of a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableEdit {
    Name(String),
    Value(Value),
}

/// Appends one empty variable (`name: "", value: 0`).
pub fn add_variable(variables: &[Variable]) -> Vec<Variable> {
    let mut next = variables.to_vec();
    next.push(Variable::default());
    next
}

/// Rewrites one field of the variable at `index`.
pub fn update_variable(variables: &[Variable], index: usize, edit: VariableEdit) -> Vec<Variable> {
    let mut next = variables.to_vec();
    if let Some(variable) = next.get_mut(index) {
        match edit {
            VariableEdit::Name(name) => variable.name = name,
            VariableEdit::Value(value) => variable.value = value,
        }
    }
    next
}

/// Drops the variable at `index`, shifting later entries down.
pub fn remove_variable(variables: &[Variable], index: usize) -> Vec<Variable> {
    let mut next = variables.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// A single-field edit of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioEdit {
    Name(String),
    Description(String),
    Active(bool),
    Variables(Vec<Variable>),
}

/// Appends a scenario named after its position ("Scénario 1", ...), active,
/// with one empty variable ready to edit.
pub fn add_scenario(scenarios: &[Scenario]) -> Vec<Scenario> {
    let mut next = scenarios.to_vec();
    next.push(Scenario {
        name: format!("Scénario {}", scenarios.len() + 1),
        description: "Nouveau scénario".to_string(),
        active: true,
        variables: vec![Variable::default()],
    });
    next
}

/// Rewrites one field of the scenario at `index`.
pub fn update_scenario(scenarios: &[Scenario], index: usize, edit: ScenarioEdit) -> Vec<Scenario> {
    let mut next = scenarios.to_vec();
    if let Some(scenario) = next.get_mut(index) {
        match edit {
            ScenarioEdit::Name(name) => scenario.name = name,
            ScenarioEdit::Description(description) => scenario.description = description,
            ScenarioEdit::Active(active) => scenario.active = active,
            ScenarioEdit::Variables(variables) => scenario.variables = variables,
        }
    }
    next
}

/// Swaps out the whole scenario at `index`.
pub fn replace_scenario(scenarios: &[Scenario], index: usize, scenario: Scenario) -> Vec<Scenario> {
    let mut next = scenarios.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = scenario;
    }
    next
}

/// Drops the scenario at `index`, shifting later entries down.
pub fn remove_scenario(scenarios: &[Scenario], index: usize) -> Vec<Scenario> {
    let mut next = scenarios.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
