//! Read-only catalog store.
//!
//! Holds the tool records and category definitions loaded from the two
//! static JSON documents (`{"links": [...]}` and `{"categories": {...}}`).
//! Everything downstream — index construction, ranking, grouping — borrows
//! from this store; nothing mutates it after load.

pub mod types;

pub use types::{Category, LocalizedText, Pricing, ToolRecord};

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Wire shape of the tools document.
#[derive(Debug, Deserialize)]
struct ToolsDocument {
    #[serde(default)]
    links: Vec<ToolRecord>,
}

/// Wire shape of the categories document.
#[derive(Debug, Deserialize)]
struct CategoriesDocument {
    #[serde(default)]
    categories: BTreeMap<String, Category>,
}

/// Immutable store of tool records and category definitions.
#[derive(Debug)]
pub struct CatalogStore {
    tools: Vec<ToolRecord>,
    categories: BTreeMap<String, Category>,
}

impl CatalogStore {
    /// Builds a store from already-parsed records, mainly for tests.
    pub fn new(tools: Vec<ToolRecord>, categories: BTreeMap<String, Category>) -> Self {
        Self { tools, categories }
    }

    /// Parses the two catalog documents and builds the store.
    ///
    /// Tools referencing a category id absent from the category set are kept
    /// (they remain searchable) but logged, since they will never appear in
    /// the grouped view.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if either document fails to parse. A parse
    /// failure is fatal: no partial catalog is constructed.
    pub fn from_json(tools_json: &str, categories_json: &str) -> Result<Self, CatalogError> {
        let tools: ToolsDocument = serde_json::from_str(tools_json)
            .map_err(|e| CatalogError::ParseTools(e.to_string()))?;
        let categories: CategoriesDocument = serde_json::from_str(categories_json)
            .map_err(|e| CatalogError::ParseCategories(e.to_string()))?;

        let store = Self::new(tools.links, categories.categories);

        for tool in &store.tools {
            if !store.categories.contains_key(&tool.category) {
                warn!(
                    tool_id = %tool.id,
                    category = %tool.category,
                    "Tool references unknown category"
                );
            }
        }

        info!(
            "Loaded {} tools and {} categories",
            store.tools.len(),
            store.categories.len()
        );

        Ok(store)
    }

    /// All tool records, in catalog order.
    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    /// Looks up a tool by id.
    pub fn tool(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Looks up a category definition by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Returns `true` if `id` names an enabled category.
    pub fn is_enabled_category(&self, id: &str) -> bool {
        self.categories.get(id).is_some_and(|c| c.enabled)
    }

    /// Enabled categories in display order.
    ///
    /// Sorted by the `order` field (missing orders sort last via the 999
    /// sentinel); ties break on category id so the ordering is stable
    /// across rebuilds.
    pub fn categories_ordered(&self) -> Vec<(&str, &Category)> {
        let mut ordered: Vec<(&str, &Category)> = self
            .categories
            .iter()
            .filter(|(_, c)| c.enabled)
            .map(|(id, c)| (id.as_str(), c))
            .collect();
        ordered.sort_by_key(|(id, c)| (c.order, *id));
        ordered
    }

    /// Tools belonging to `category_id`, in catalog order.
    pub fn tools_in_category(&self, category_id: &str) -> Vec<&ToolRecord> {
        self.tools
            .iter()
            .filter(|t| t.category == category_id)
            .collect()
    }

    /// Per-category tool counts (for navigation counters).
    pub fn tool_counts_by_category(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for tool in &self.tools {
            *counts.entry(tool.category.clone()).or_default() += 1;
        }
        counts
    }
}
