use serde::{Deserialize, Serialize};

/// Where an event sits in the process lifecycle.
///
/// Start events have no inbound connection points and end events no
/// outbound ones; intermediate events carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Start,
    #[default]
    Intermediate,
    End,
}

/// Data carried by an event node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventData {
    pub label: String,
    pub description: String,
    pub event_type: EventType,
}
