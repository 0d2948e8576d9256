//! Search index construction.
//!
//! The index is a flat list of [`IndexEntry`] values, one per tool: a
//! normalized lowercase text blob plus the precomputed static weight.
//! Because the blob embeds the active language's name and description, the
//! whole index is rebuilt when the language changes — the catalog is a few
//! hundred records, so a wholesale O(n) rebuild is cheaper than any
//! incremental scheme would be to maintain.

mod weight;

pub use weight::static_weight;

use crate::catalog::ToolRecord;
use tracing::debug;

/// Derived, searchable representation of a tool for one active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Id of the owning [`ToolRecord`] (non-owning reference by id)
    pub tool_id: String,
    /// Normalized lowercase search blob: name, description, category id,
    /// tags, pricing, and id, space-joined
    pub blob: String,
    /// Precomputed static weight
    pub weight: i64,
}

/// Builds the search index for `tools` in `language`.
///
/// Pure and deterministic: the same tool list and language always produce
/// the same entries, in the same (catalog) order. Runs in O(n) over the
/// tool count. Callers swap the returned vector in atomically so a ranking
/// pass never observes a partially built index.
pub fn build_index(tools: &[ToolRecord], language: &str) -> Vec<IndexEntry> {
    let entries: Vec<IndexEntry> = tools
        .iter()
        .map(|tool| {
            let tags = tool.tags.join(" ");
            let blob = [
                tool.name.resolve(language),
                tool.description.resolve(language),
                tool.category.as_str(),
                tags.as_str(),
                tool.pricing.as_str(),
                tool.id.as_str(),
            ]
            .join(" ")
            .to_lowercase()
            .trim()
            .to_string();

            IndexEntry {
                tool_id: tool.id.clone(),
                blob,
                weight: static_weight(tool),
            }
        })
        .collect();

    debug!(
        "Built search index for {} tools (language: {})",
        entries.len(),
        language
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocalizedText, Pricing};

    fn sample_tool() -> ToolRecord {
        ToolRecord {
            id: "writer".to_string(),
            name: LocalizedText::new()
                .with("en", "Ghost Writer")
                .with("zh", "代笔"),
            description: LocalizedText::new().with("en", "Drafts Emails"),
            category: "office".to_string(),
            url: "https://writer.example".to_string(),
            tags: vec!["writing".to_string(), "drafts".to_string()],
            pricing: Pricing::Freemium,
        }
    }

    #[test]
    fn test_blob_composition() {
        let index = build_index(&[sample_tool()], "en");

        assert_eq!(index.len(), 1);
        assert_eq!(
            index[0].blob,
            "ghost writer drafts emails office writing drafts freemium writer"
        );
    }

    #[test]
    fn test_blob_uses_active_language() {
        let index = build_index(&[sample_tool()], "zh");

        // zh name, with the description falling back to "en"
        assert!(index[0].blob.starts_with("代笔 drafts emails"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let tools = vec![sample_tool()];
        let first = build_index(&tools, "en");
        let second = build_index(&tools, "en");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_translations_index_under_id() {
        let tool = ToolRecord {
            id: "nameless".to_string(),
            name: LocalizedText::new(),
            description: LocalizedText::new(),
            category: "misc".to_string(),
            url: "https://x.example".to_string(),
            tags: Vec::new(),
            pricing: Pricing::Unknown,
        };

        let index = build_index(&[tool], "en");
        // The blob still carries category, pricing, and id
        assert_eq!(index[0].blob, "misc  unknown nameless");
        assert!(index[0].blob.contains("nameless"));
    }

    #[test]
    fn test_entries_keep_catalog_order() {
        let mut a = sample_tool();
        a.id = "a".to_string();
        let mut b = sample_tool();
        b.id = "b".to_string();

        let index = build_index(&[a, b], "en");
        assert_eq!(index[0].tool_id, "a");
        assert_eq!(index[1].tool_id, "b");
    }
}
