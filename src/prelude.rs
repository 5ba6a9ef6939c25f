//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need: node data, geometry, the
//! formula catalog, the view builders and the panel editing operations.
//!
//! # Example
//!
//! ```rust,no_run
//! use canevas::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/workflow.json")?;
//! let workflow = WorkflowDefinition::from_json(&json)?;
//!
//! for node in &workflow.nodes {
//!     let handles = node_handles(&node.data);
//!     println!("{}: {} handles", node.id, handles.len());
//! }
//! # Ok(())
//! # }
//! ```

// Geometry
pub use crate::geometry::{Side, edge_color, resolve_position};

// Node data
pub use crate::node::{
    AssignedVariable, DecisionData, EventData, EventType, FormulaData, NodeData, NodeKind,
    Scenario, ScenarioData, SimulationResult, TaskData, TriggerMode, Value, Variable,
};

// Workflow documents
pub use crate::document::{
    EdgeData, EdgeDefinition, NodeDefinition, Point, ProcessMetrics, WorkflowDefinition,
};

// Formula catalog
pub use crate::catalog::{
    FormulaSelector, FormulaTemplate, TaggedTemplate, TemplateCategory, catalog, search,
    templates_in,
};

// Views and handles
pub use crate::view::{
    DecisionView, EventView, FormulaView, Handle, HandleRole, ResultDisplay, ScenarioNodeState,
    ScenarioTab, ScenarioView, TaskView, format_value, node_handles, truncate,
};

// Panel editing
pub use crate::panel::{
    DecisionPatch, EdgePatch, EventPatch, FormulaPatch, NodePatch, ScenarioEdit, ScenarioPatch,
    TaskPatch, VariableEdit, add_scenario, add_variable, remove_scenario, remove_variable,
    replace_scenario, update_scenario, update_variable,
};

// Error types
pub use crate::error::DocumentError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
