use serde::{Deserialize, Serialize};

/// Data carried by a decision node.
///
/// The four outgoing branches (`yes`, `no`, `alt`, `back`) are part of the
/// node's shape, not its data; `rotation` records how many degrees the user
/// has turned the diamond, which moves those branches around its sides (see
/// [`crate::geometry::resolve_position`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionData {
    pub label: String,
    pub description: String,
    pub rotation: i32,
}
