//! Handle geometry: which side of a node a connection point sits on.
//!
//! Inbound handles carry their side in their id (`target-left`, `target-top`,
//! ...) and never move. The four semantic outgoing handles of a decision node
//! (`yes`, `no`, `alt`, `back`) travel around the diamond as the user rotates
//! it, one clockwise step per 90°.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A compass side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// The next side one quarter turn clockwise (top→right→bottom→left→top).
    pub fn clockwise(self) -> Side {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Parses a lowercase side name. Anything else is `None`.
    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Prefix shared by every inbound handle id.
pub const TARGET_PREFIX: &str = "target-";

/// Resolves the side a handle currently occupies on a node rotated by
/// `rotation` degrees.
///
/// * Inbound handles (`target-<side>`) are rotation-invariant: the side is
///   read straight from the id suffix.
/// * The decision branches `yes`/`no`/`alt`/`back` start at bottom, right,
///   top and left respectively and move one clockwise step per 90° of
///   rotation.
/// * An empty id, an unknown id, or a rotation that is not one of 0, 90,
///   180 or 270 resolves to `None`.
pub fn resolve_position(rotation: i32, handle_id: &str) -> Option<Side> {
    if handle_id.is_empty() {
        return None;
    }

    if let Some(suffix) = handle_id.strip_prefix(TARGET_PREFIX) {
        return Side::from_name(suffix);
    }

    let base = match handle_id {
        "yes" => Side::Bottom,
        "no" => Side::Right,
        "alt" => Side::Top,
        "back" => Side::Left,
        _ => return None,
    };

    let quarter_turns = match rotation {
        0 => 0,
        90 => 1,
        180 => 2,
        270 => 3,
        _ => return None,
    };

    Some((0..quarter_turns).fold(base, |side, _| side.clockwise()))
}

/// Stroke color of an edge, keyed by the semantic handle it leaves from.
///
/// Decision branches are color-coded (green yes, red no, blue alt, purple
/// back); everything else gets the neutral indigo.
pub fn edge_color(source_handle: &str) -> &'static str {
    match source_handle {
        "yes" => "#10b981",
        "no" => "#ef4444",
        "alt" => "#3b82f6",
        "back" => "#8b5cf6",
        _ => "#6366f1",
    }
}
