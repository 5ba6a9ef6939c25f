use crate::geometry::{Side, resolve_position};
use crate::node::{EventType, NodeData};

/// Whether a handle starts edges or receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    Source,
    Target,
}

/// A fixed connection point declared by a node.
///
/// A handle can be hidden yet still connectable: existing edges keep their
/// anchor, the dot just isn't drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    pub id: &'static str,
    pub role: HandleRole,
    pub side: Side,
    pub visible: bool,
    pub connectable: bool,
}

impl Handle {
    fn target(id: &'static str, side: Side) -> Self {
        Self {
            id,
            role: HandleRole::Target,
            side,
            visible: true,
            connectable: true,
        }
    }

    fn source(id: &'static str, side: Side) -> Self {
        Self {
            id,
            role: HandleRole::Source,
            side,
            visible: true,
            connectable: true,
        }
    }

    fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    fn suppressed(mut self) -> Self {
        self.visible = false;
        self.connectable = false;
        self
    }
}

/// Handles of a task node: inbound and outbound on every side, with the
/// right target and left source hidden to keep the card uncluttered.
pub fn task_handles() -> Vec<Handle> {
    vec![
        Handle::target("target-left", Side::Left),
        Handle::target("target-top", Side::Top),
        Handle::target("target-bottom", Side::Bottom),
        Handle::target("target-right", Side::Right).hidden(),
        Handle::source("source-right", Side::Right),
        Handle::source("source-bottom", Side::Bottom),
        Handle::source("source-top", Side::Top),
        Handle::source("source-left", Side::Left).hidden(),
    ]
}

/// Handles of a formula node.
pub fn formula_handles() -> Vec<Handle> {
    vec![
        Handle::target("target-left", Side::Left),
        Handle::target("target-top", Side::Top),
        Handle::target("target-bottom", Side::Bottom),
        Handle::source("source-right", Side::Right),
        Handle::source("source-bottom", Side::Bottom),
        Handle::source("source-top", Side::Top),
    ]
}

/// Handles of a scenario node; same layout as a formula node.
pub fn scenario_handles() -> Vec<Handle> {
    formula_handles()
}

/// Handles of an event node. Start events suppress every inbound handle,
/// end events every outbound one.
pub fn event_handles(event_type: EventType) -> Vec<Handle> {
    let targets = [
        Handle::target("target-left", Side::Left),
        Handle::target("target-top", Side::Top),
        Handle::target("target-bottom", Side::Bottom),
        Handle::target("target-right", Side::Right),
    ];
    let sources = [
        Handle::source("source-right", Side::Right),
        Handle::source("source-bottom", Side::Bottom),
        Handle::source("source-top", Side::Top),
        Handle::source("source-left", Side::Left),
    ];

    let mut handles = Vec::with_capacity(8);
    for handle in targets {
        handles.push(if event_type == EventType::Start {
            handle.suppressed()
        } else {
            handle
        });
    }
    for handle in sources {
        handles.push(if event_type == EventType::End {
            handle.suppressed()
        } else {
            handle
        });
    }
    handles
}

/// Handles of a decision node rotated by `rotation` degrees.
///
/// Inbound handles stay put; the `yes`/`no`/`alt`/`back` branches move one
/// clockwise step per 90°. An off-grid rotation falls back to the upright
/// layout.
pub fn decision_handles(rotation: i32) -> Vec<Handle> {
    let branch = |id: &'static str, base: Side| {
        Handle::source(id, resolve_position(rotation, id).unwrap_or(base))
    };

    vec![
        Handle::target("target-left", Side::Left),
        Handle::target("target-top", Side::Top),
        Handle::target("target-right", Side::Right).hidden(),
        Handle::target("target-bottom", Side::Bottom).hidden(),
        branch("yes", Side::Bottom),
        branch("no", Side::Right),
        branch("alt", Side::Top),
        branch("back", Side::Left),
    ]
}

/// The complete, fixed handle set for a node's current data.
pub fn node_handles(data: &NodeData) -> Vec<Handle> {
    match data {
        NodeData::Task(_) => task_handles(),
        NodeData::Decision(decision) => decision_handles(decision.rotation),
        NodeData::Event(event) => event_handles(event.event_type),
        NodeData::Formula(_) => formula_handles(),
        NodeData::Scenario(_) => scenario_handles(),
    }
}
