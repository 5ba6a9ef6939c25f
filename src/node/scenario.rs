use super::Variable;
use serde::{Deserialize, Serialize};

/// A named set of variable overrides used to stress-test the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub variables: Vec<Variable>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
            variables: Vec::new(),
        }
    }
}

/// One row of a resilience simulation, produced by the external engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Name of the simulated scenario ("Cas de base" for the baseline run).
    pub scenario: String,
    /// Value of the reference variable under this scenario, in percent.
    pub margin: f64,
    pub is_resilient: bool,
}

/// Data carried by a scenario node: the scenario list plus the read-only
/// results of the last simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioData {
    pub label: String,
    pub scenarios: Vec<Scenario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_results: Option<Vec<SimulationResult>>,
    /// Minimum margin, in percent, for a scenario to count as resilient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Name of the computed variable the resilience check reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_variable: Option<String>,
}

impl ScenarioData {
    pub const DEFAULT_THRESHOLD: f64 = 15.0;
    pub const DEFAULT_REFERENCE_VARIABLE: &'static str = "tauxMarge";

    /// The threshold in effect, falling back to the editor default.
    pub fn threshold_or_default(&self) -> f64 {
        self.threshold.unwrap_or(Self::DEFAULT_THRESHOLD)
    }

    /// The reference variable in effect, falling back to the editor default.
    pub fn reference_variable_or_default(&self) -> &str {
        self.reference_variable
            .as_deref()
            .unwrap_or(Self::DEFAULT_REFERENCE_VARIABLE)
    }
}
