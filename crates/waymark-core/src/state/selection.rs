//! Selection state and the rendered view it produces.

use crate::config::ALL_CATEGORY;
use crate::search::SearchResult;

/// Current navigation selection: active category and raw query.
///
/// Constructed by and owned by the directory context — never a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    category: String,
    query: String,
}

impl SelectionState {
    /// Initial state: the "all" sentinel and an empty query.
    pub fn new() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            query: String::new(),
        }
    }

    /// Active category id ("all" means no filter).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Active raw query (empty means no search).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` while a search is active.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub(crate) fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub(crate) fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// One category's slice of the grouped catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// Category id
    pub category: String,
    /// Tool ids in catalog order
    pub tools: Vec<String>,
}

/// What the frontend should currently display.
///
/// The context caches the most recent view; rendering it (DOM construction,
/// cards, highlights) is the embedder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderView {
    /// Full catalog grouped by enabled categories in display order
    /// (category = "all", no query). Empty categories are omitted.
    Grouped(Vec<CategorySection>),
    /// Single category listing, sorted by static weight descending
    /// (category ≠ "all", no query).
    CategoryListing {
        category: String,
        results: Vec<SearchResult>,
    },
    /// Flat ranked results (query active, regardless of category).
    SearchResults {
        query: String,
        results: Vec<SearchResult>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.category(), ALL_CATEGORY);
        assert_eq!(state.query(), "");
        assert!(!state.has_query());
    }
}
