//! Tests for workflow document parsing, validation and metrics.
mod common;

use canevas::error::DocumentError;
use canevas::geometry::Side;
use canevas::node::{EventType, NodeData, NodeKind, TriggerMode, Value};
use canevas::prelude::WorkflowDefinition;
use common::*;

#[test]
fn parses_a_canvas_document() {
    let json = r#"{
        "nodes": [
            {
                "id": "event-1",
                "type": "event",
                "position": { "x": 40.0, "y": 80.0 },
                "data": { "label": "Départ", "description": "", "eventType": "start" }
            },
            {
                "id": "task-1",
                "type": "task",
                "position": { "x": 240.0, "y": 80.0 },
                "data": {
                    "label": "Prospection",
                    "duration": 120,
                    "cost": 350,
                    "assignedTo": "Alice",
                    "description": "Premier contact"
                }
            },
            {
                "id": "formula-1",
                "type": "formula",
                "position": { "x": 460.0, "y": 80.0 },
                "data": {
                    "label": "Marge",
                    "formula": "marge = revenu - cout",
                    "variables": [
                        { "name": "revenu", "value": 100000 },
                        { "name": "cout", "value": 80000 }
                    ],
                    "assignedVariables": [{ "name": "marge", "value": 20000 }],
                    "result": 20000,
                    "triggerType": "onChange"
                }
            },
            {
                "id": "scenario-1",
                "type": "scenario",
                "position": { "x": 680.0, "y": 80.0 },
                "data": {
                    "label": "Stress",
                    "scenarios": [],
                    "simulationResults": [
                        { "scenario": "Cas de base", "margin": 18.2, "isResilient": true }
                    ],
                    "threshold": 15,
                    "referenceVariable": "tauxMarge"
                }
            }
        ],
        "edges": [
            {
                "id": "e1",
                "source": "event-1",
                "sourceHandle": "source-right",
                "target": "task-1",
                "targetHandle": "target-left"
            }
        ]
    }"#;

    let workflow = WorkflowDefinition::from_json(json).expect("valid document");
    assert_eq!(workflow.nodes.len(), 4);
    assert_eq!(workflow.edges.len(), 1);

    match &workflow.node("event-1").unwrap().data {
        NodeData::Event(event) => assert_eq!(event.event_type, EventType::Start),
        other => panic!("expected an event node, got {:?}", other),
    }
    match &workflow.node("task-1").unwrap().data {
        NodeData::Task(task) => {
            assert_eq!(task.assigned_to.as_deref(), Some("Alice"));
            assert_eq!(task.duration, 120.0);
        }
        other => panic!("expected a task node, got {:?}", other),
    }
    match &workflow.node("formula-1").unwrap().data {
        NodeData::Formula(formula) => {
            assert_eq!(formula.trigger_type, TriggerMode::OnChange);
            assert_eq!(formula.result, Some(Value::Number(20_000.0)));
            assert_eq!(formula.assigned_variables.as_ref().map(Vec::len), Some(1));
        }
        other => panic!("expected a formula node, got {:?}", other),
    }
    match &workflow.node("scenario-1").unwrap().data {
        NodeData::Scenario(scenario) => {
            assert_eq!(scenario.threshold, Some(15.0));
            let results = scenario.simulation_results.as_ref().unwrap();
            assert!(results[0].is_resilient);
        }
        other => panic!("expected a scenario node, got {:?}", other),
    }
}

#[test]
fn documents_round_trip_through_json() {
    let workflow = sample_workflow();
    let json = workflow.to_json().expect("serializes");
    let back = WorkflowDefinition::from_json(&json).expect("parses back");
    assert_eq!(back, workflow);
}

#[test]
fn serialized_documents_use_camel_case() {
    let workflow = sample_workflow();
    let json = workflow.to_json().expect("serializes");
    assert!(json.contains("\"eventType\""));
    assert!(json.contains("\"sourceHandle\""));
    assert!(json.contains("\"targetHandle\""));
    assert!(json.contains("\"triggerType\""));
    assert!(!json.contains("\"event_type\""));
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let mut workflow = sample_workflow();
    workflow.nodes.push(task_node("prospection", 1.0, 1.0));

    match workflow.validate() {
        Err(DocumentError::DuplicateNodeId { node_id }) => assert_eq!(node_id, "prospection"),
        other => panic!("expected a duplicate id error, got {:?}", other),
    }
}

#[test]
fn dangling_edges_are_rejected() {
    let mut workflow = sample_workflow();
    workflow
        .edges
        .push(edge("e9", "prospection", "source-right", "ghost", "target-left"));

    match workflow.validate() {
        Err(DocumentError::EdgeEndpointMissing { edge_id, node_id }) => {
            assert_eq!(edge_id, "e9");
            assert_eq!(node_id, "ghost");
        }
        other => panic!("expected a dangling edge error, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_offenders() {
    let err = DocumentError::EdgeEndpointMissing {
        edge_id: "e9".to_string(),
        node_id: "ghost".to_string(),
    };
    assert!(err.to_string().contains("e9"));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn node_index_covers_every_node() {
    let workflow = sample_workflow();
    let index = workflow.node_index();
    assert_eq!(index.len(), workflow.nodes.len());
    assert!(index.contains_key("qualification"));
    assert!(workflow.node("nope").is_none());
}

#[test]
fn metrics_sum_task_durations_and_costs() {
    let mut workflow = sample_workflow();
    workflow.nodes.push(task_node("relance", 30.0, 80.5));

    let metrics = workflow.metrics();
    assert_eq!(metrics.total_nodes, 7);
    assert_eq!(metrics.total_tasks, 2);
    assert_eq!(metrics.total_decisions, 1);
    assert_eq!(metrics.total_events, 2);
    assert_eq!(metrics.total_formulas, 1);
    assert_eq!(metrics.total_scenarios, 1);
    assert_eq!(metrics.total_connections, 5);
    assert_eq!(metrics.estimated_duration, 150.0);
    assert_eq!(metrics.estimated_cost, 430.5);
}

#[test]
fn counts_by_kind_drive_default_labels() {
    let workflow = sample_workflow();
    assert_eq!(workflow.count_of(NodeKind::Task), 1);
    assert_eq!(workflow.count_of(NodeKind::Event), 2);
    assert_eq!(
        NodeKind::Task.default_label(workflow.count_of(NodeKind::Task) + 1),
        "Tâche 2"
    );
}

#[test]
fn edge_sides_follow_the_source_rotation() {
    let mut workflow = sample_workflow();

    // Upright decision: the yes branch leaves from the bottom.
    let yes_edge = workflow.edges[2].clone();
    assert_eq!(workflow.source_side(&yes_edge), Some(Side::Bottom));
    assert_eq!(workflow.target_side(&yes_edge), Some(Side::Top));

    // After a quarter turn it leaves from the left.
    let node = workflow.node_mut("qualification").unwrap();
    if let NodeData::Decision(decision) = &mut node.data {
        decision.rotation = 90;
    }
    assert_eq!(workflow.source_side(&yes_edge), Some(Side::Left));

    // Plain source handles carry their side in the id.
    let start_edge = workflow.edges[0].clone();
    assert_eq!(workflow.source_side(&start_edge), Some(Side::Right));
}
