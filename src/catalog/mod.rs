//! The read-only catalog of predefined business formulas.
//!
//! Templates are reference data: selecting one copies its formula, seed
//! variables and description into the target node, leaving the catalog
//! untouched.

mod builtin;
pub mod selector;

pub use selector::*;

use crate::node::Variable;
use itertools::Itertools;
use std::sync::OnceLock;

/// A predefined, named business formula with example variables.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTemplate {
    pub name: String,
    pub formula: String,
    pub description: String,
    pub variables: Vec<Variable>,
}

impl FormulaTemplate {
    /// Comma-separated seed variable names, as shown under each template in
    /// the selector.
    pub fn variable_summary(&self) -> String {
        self.variables.iter().map(|v| v.name.as_str()).join(", ")
    }
}

/// An ordered group of templates. Each template belongs to exactly one
/// category.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCategory {
    pub category: String,
    pub formulas: Vec<FormulaTemplate>,
}

/// A template together with the category it came from, as produced by
/// [`search`] and the selector's flattened listings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedTemplate<'a> {
    pub category: &'a str,
    pub template: &'a FormulaTemplate,
}

/// The full catalog, in display order. Built once, immutable afterwards.
pub fn catalog() -> &'static [TemplateCategory] {
    static CATALOG: OnceLock<Vec<TemplateCategory>> = OnceLock::new();
    CATALOG.get_or_init(builtin::build_catalog)
}

/// The templates of one category, or an empty slice for an unknown name.
pub fn templates_in(category: &str) -> &'static [FormulaTemplate] {
    catalog()
        .iter()
        .find(|c| c.category == category)
        .map(|c| c.formulas.as_slice())
        .unwrap_or(&[])
}

/// Case-insensitive substring search over template names and descriptions,
/// flattened across every category.
pub fn search(query: &str) -> Vec<TaggedTemplate<'static>> {
    let needle = query.to_lowercase();
    catalog()
        .iter()
        .flat_map(|group| {
            group.formulas.iter().map(|template| TaggedTemplate {
                category: &group.category,
                template,
            })
        })
        .filter(|hit| {
            hit.template.name.to_lowercase().contains(&needle)
                || hit.template.description.to_lowercase().contains(&needle)
        })
        .collect()
}
