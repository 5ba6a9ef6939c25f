use super::{TaggedTemplate, catalog, search};

/// State of the formula selector dialog.
///
/// Browsing by category is the default mode; any nonempty search term
/// switches the listing to a catalog-wide search until the term is cleared.
/// Choosing a template hands it back to the caller, who applies it to the
/// node and dismisses the dialog; the selector itself never touches node
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaSelector {
    selected_category: String,
    search_term: String,
}

impl FormulaSelector {
    /// Opens on the first catalog category with no search term.
    pub fn new() -> Self {
        Self {
            selected_category: catalog()[0].category.clone(),
            search_term: String::new(),
        }
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Switches the browse listing to another category. Has no visible
    /// effect while a search term is active.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// The templates currently listed: search results when a term is set,
    /// otherwise the selected category's templates tagged with it.
    pub fn visible(&self) -> Vec<TaggedTemplate<'static>> {
        if !self.search_term.is_empty() {
            return search(&self.search_term);
        }
        catalog()
            .iter()
            .find(|group| group.category == self.selected_category)
            .map(|group| {
                group
                    .formulas
                    .iter()
                    .map(|template| TaggedTemplate {
                        category: group.category.as_str(),
                        template,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The template at `index` in the current listing, if any. The caller
    /// copies it into the node and closes the dialog.
    pub fn choose(&self, index: usize) -> Option<TaggedTemplate<'static>> {
        self.visible().into_iter().nth(index)
    }
}

impl Default for FormulaSelector {
    fn default() -> Self {
        Self::new()
    }
}
