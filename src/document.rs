//! Typed workflow documents, as exchanged with the canvas.
//!
//! The canvas owns the live node/edge state; this module gives its JSON
//! shape a typed home so the rest of the crate can reason about nodes,
//! edges and their geometry.

use crate::error::DocumentError;
use crate::geometry::{Side, resolve_position};
use crate::log;
use crate::node::{NodeData, NodeKind};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// A node's position on the canvas, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Cosmetic data carried by an edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeData {
    pub label: String,
    pub description: String,
    pub animated: bool,
    /// Stroke color override; absent edges derive their color from the
    /// source handle (see [`crate::geometry::edge_color`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// A connection between two node handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

/// A placed node: identity, position and kind-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(default)]
    pub position: Point,
}

/// A complete workflow diagram.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl WorkflowDefinition {
    /// Parses and validates a canvas JSON document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParse(e.to_string()))?;
        document.validate()?;
        log::debug!(
            "parsed workflow document: {} nodes, {} edges",
            document.nodes.len(),
            document.edges.len()
        );
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::JsonParse(e.to_string()))
    }

    /// Checks structural integrity: unique node ids, no dangling edge
    /// endpoints.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut ids = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(DocumentError::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(DocumentError::EdgeEndpointMissing {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Nodes keyed by id for repeated lookups.
    pub fn node_index(&self) -> AHashMap<&str, &NodeDefinition> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect()
    }

    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeDefinition> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// The side of the source node this edge visually leaves from, taking
    /// the node's rotation into account.
    pub fn source_side(&self, edge: &EdgeDefinition) -> Option<Side> {
        let handle = edge.source_handle.as_deref()?;
        let node = self.node(&edge.source)?;
        handle_side(node.data.rotation(), handle)
    }

    /// The side of the target node this edge arrives at.
    pub fn target_side(&self, edge: &EdgeDefinition) -> Option<Side> {
        let handle = edge.target_handle.as_deref()?;
        let node = self.node(&edge.target)?;
        handle_side(node.data.rotation(), handle)
    }

    /// Headline numbers for the whole diagram.
    pub fn metrics(&self) -> ProcessMetrics {
        let mut metrics = ProcessMetrics {
            total_nodes: self.nodes.len(),
            total_connections: self.edges.len(),
            ..ProcessMetrics::default()
        };
        for node in &self.nodes {
            match &node.data {
                NodeData::Task(task) => {
                    metrics.total_tasks += 1;
                    metrics.estimated_duration += task.duration;
                    metrics.estimated_cost += task.cost;
                }
                NodeData::Decision(_) => metrics.total_decisions += 1,
                NodeData::Event(_) => metrics.total_events += 1,
                NodeData::Formula(_) => metrics.total_formulas += 1,
                NodeData::Scenario(_) => metrics.total_scenarios += 1,
            }
        }
        metrics
    }

    /// Count of nodes of one kind, used to label the next placed node.
    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.data.kind() == kind).count()
    }
}

/// Resolves any handle id to a side, including the rotation-invariant
/// `source-*` family the non-decision nodes use.
fn handle_side(rotation: i32, handle_id: &str) -> Option<Side> {
    if let Some(suffix) = handle_id.strip_prefix("source-") {
        return Side::from_name(suffix);
    }
    resolve_position(rotation, handle_id)
}

/// Aggregate counts and cost/duration estimates for a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub total_nodes: usize,
    pub total_tasks: usize,
    pub total_decisions: usize,
    pub total_events: usize,
    pub total_formulas: usize,
    pub total_scenarios: usize,
    pub total_connections: usize,
    /// Sum of task durations, in minutes.
    pub estimated_duration: f64,
    /// Sum of task costs, in euros.
    pub estimated_cost: f64,
}
