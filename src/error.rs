use thiserror::Error;

/// Errors raised while reading a workflow document from the canvas.
///
/// The rest of the core is deliberately error-free: geometry lookups return
/// `None`, catalog lookups return empty lists, and list edits ignore
/// out-of-range indices.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParse(String),

    #[error("Node id '{node_id}' appears more than once in the document")]
    DuplicateNodeId { node_id: String },

    #[error("Edge '{edge_id}' references node '{node_id}', which is not in the document")]
    EdgeEndpointMissing { edge_id: String, node_id: String },
}
