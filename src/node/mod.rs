pub mod decision;
pub mod event;
pub mod formula;
pub mod scenario;
pub mod task;
pub mod value;

pub use decision::*;
pub use event::*;
pub use formula::*;
pub use scenario::*;
pub use task::*;
pub use value::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five node kinds the canvas can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Task,
    Decision,
    Event,
    Formula,
    Scenario,
}

impl NodeKind {
    /// Label given to the n-th freshly placed node of this kind.
    pub fn default_label(self, counter: usize) -> String {
        match self {
            NodeKind::Task => format!("Tâche {}", counter),
            NodeKind::Decision => format!("Décision {}", counter),
            NodeKind::Event => format!("Événement {}", counter),
            NodeKind::Formula => format!("Formule {}", counter),
            NodeKind::Scenario => format!("Scénario {}", counter),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Task => "task",
            NodeKind::Decision => "decision",
            NodeKind::Event => "event",
            NodeKind::Formula => "formula",
            NodeKind::Scenario => "scenario",
        };
        write!(f, "{}", name)
    }
}

/// Kind-specific data of a diagram node, tagged the way the canvas stores
/// it: the kind under `"type"`, the payload under `"data"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeData {
    Task(TaskData),
    Decision(DecisionData),
    Event(EventData),
    Formula(FormulaData),
    Scenario(ScenarioData),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Task(_) => NodeKind::Task,
            NodeData::Decision(_) => NodeKind::Decision,
            NodeData::Event(_) => NodeKind::Event,
            NodeData::Formula(_) => NodeKind::Formula,
            NodeData::Scenario(_) => NodeKind::Scenario,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodeData::Task(data) => &data.label,
            NodeData::Decision(data) => &data.label,
            NodeData::Event(data) => &data.label,
            NodeData::Formula(data) => &data.label,
            NodeData::Scenario(data) => &data.label,
        }
    }

    /// The rotation applied to the node's shape, in degrees.
    ///
    /// Only decision nodes rotate; every other kind reports 0.
    pub fn rotation(&self) -> i32 {
        match self {
            NodeData::Decision(data) => data.rotation,
            _ => 0,
        }
    }
}
