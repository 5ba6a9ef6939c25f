//! Common test fixtures for building workflow documents and node data.
use canevas::prelude::*;

/// A task node with the given duration and cost.
#[allow(dead_code)]
pub fn task_node(id: &str, duration: f64, cost: f64) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        data: NodeData::Task(TaskData {
            label: format!("Tâche {}", id),
            duration,
            cost,
            ..TaskData::default()
        }),
        position: Point::default(),
    }
}

/// A decision node rotated by `rotation` degrees.
#[allow(dead_code)]
pub fn decision_node(id: &str, rotation: i32) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        data: NodeData::Decision(DecisionData {
            label: "Go / no-go".to_string(),
            description: String::new(),
            rotation,
        }),
        position: Point::default(),
    }
}

/// An event node of the given lifecycle type.
#[allow(dead_code)]
pub fn event_node(id: &str, event_type: EventType) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        data: NodeData::Event(EventData {
            label: "Événement".to_string(),
            description: String::new(),
            event_type,
        }),
        position: Point::default(),
    }
}

/// A formula node computing a margin from two seed variables.
#[allow(dead_code)]
pub fn formula_node(id: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        data: NodeData::Formula(FormulaData {
            label: "Marge".to_string(),
            formula: "marge = revenu - cout\ntauxMarge = (marge / revenu) * 100".to_string(),
            variables: vec![
                Variable::new("revenu", 100_000.0),
                Variable::new("cout", 80_000.0),
            ],
            ..FormulaData::default()
        }),
        position: Point::default(),
    }
}

/// A scenario node with one active stress scenario and no results yet.
#[allow(dead_code)]
pub fn scenario_node(id: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        data: NodeData::Scenario(ScenarioData {
            label: "Scénarios de stress".to_string(),
            scenarios: vec![Scenario {
                name: "Baisse TJM de 10%".to_string(),
                description: "Pression sur les prix".to_string(),
                active: true,
                variables: vec![Variable::new("tjm", 495.0)],
            }],
            ..ScenarioData::default()
        }),
        position: Point::default(),
    }
}

/// An edge between two handles.
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, source_handle: &str, target: &str, target_handle: &str) -> EdgeDefinition {
    EdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        source_handle: Some(source_handle.to_string()),
        target: target.to_string(),
        target_handle: Some(target_handle.to_string()),
        data: None,
    }
}

/// A small but complete workflow: start event, task, decision, formula,
/// scenario and end event, wired left to right.
#[allow(dead_code)]
pub fn sample_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            event_node("start", EventType::Start),
            task_node("prospection", 120.0, 350.0),
            decision_node("qualification", 0),
            formula_node("marge"),
            scenario_node("stress"),
            event_node("end", EventType::End),
        ],
        edges: vec![
            edge("e1", "start", "source-right", "prospection", "target-left"),
            edge("e2", "prospection", "source-right", "qualification", "target-left"),
            edge("e3", "qualification", "yes", "marge", "target-top"),
            edge("e4", "qualification", "no", "end", "target-left"),
            edge("e5", "marge", "source-right", "stress", "target-left"),
        ],
    }
}
