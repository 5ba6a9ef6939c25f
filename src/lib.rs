//! # Canevas - Modeling Canvas Core
//!
//! **Canevas** is the data and geometry core behind a business-process
//! modeling canvas: workflow diagrams made of task, decision, event,
//! formula and scenario nodes, with numeric formulas and what-if scenarios
//! attached to them. The canvas itself (layout, dragging, edge routing) and
//! the formula/simulation engine live outside this crate; canevas owns what
//! sits between them:
//!
//! 1. **Node data**: the typed payload of every node kind, round-tripping
//!    the canvas's camelCase JSON.
//! 2. **Geometry**: which side of a node each connection handle occupies,
//!    including the rotating branches of decision nodes.
//! 3. **Catalog**: the read-only library of predefined business formulas
//!    and the selector dialog state over it.
//! 4. **Views**: pure view models describing what each node displays for
//!    its current data.
//! 5. **Panels**: list editing and partial patches through which property
//!    panels request changes without ever owning the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use canevas::prelude::*;
//! use canevas::panel::list;
//!
//! // A formula node, seeded from the catalog.
//! let mut data = FormulaData {
//!     label: "Marge".to_string(),
//!     ..FormulaData::default()
//! };
//! let selector = FormulaSelector::new();
//! if let Some(choice) = selector.choose(0) {
//!     FormulaPatch::from_template(choice.template, &data.description).apply_to(&mut data);
//! }
//!
//! // The user adds a variable in the property panel.
//! let variables = list::add_variable(&data.variables);
//! FormulaPatch {
//!     variables: Some(variables),
//!     ..FormulaPatch::default()
//! }
//! .apply_to(&mut data);
//!
//! // What the node now renders.
//! let view = FormulaView::build(&data, false);
//! assert!(!view.formula_text.is_empty());
//! ```

pub mod catalog;
pub mod document;
pub mod error;
pub mod geometry;
pub mod log;
pub mod node;
pub mod panel;
pub mod prelude;
pub mod view;
