//! Field-weighted substring ranking over the search index.
//!
//! The engine is deliberately simple: queries are lowercased and split on
//! whitespace, terms are matched by substring containment, and per-term
//! scores are weighted by which *field* of the tool matched rather than by
//! corpus statistics. At catalog scale (a few hundred records) a linear
//! O(n × m) scan beats maintaining an inverted index.

use super::types::{Highlight, HighlightField, SearchResult};
use crate::catalog::{CatalogStore, ToolRecord};
use crate::config::MAX_RESULTS;
use crate::index::IndexEntry;
use tracing::{debug, warn};

/// Per-term field-match scores.
const NAME_SCORE: i64 = 10;
const ID_SCORE: i64 = 8;
const CATEGORY_SCORE: i64 = 6;
const TAG_SCORE: i64 = 4;
const DESCRIPTION_SCORE: i64 = 2;
const BLOB_FALLBACK_SCORE: i64 = 1;

/// Ranking engine for catalog queries.
///
/// Stateless and idempotent per call: all inputs arrive as arguments, so a
/// newer call simply supersedes the output of an older one.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    max_results: usize,
}

impl SearchEngine {
    /// Creates an engine with the production result cap
    /// ([`MAX_RESULTS`]).
    pub fn new() -> Self {
        Self {
            max_results: MAX_RESULTS,
        }
    }

    /// Creates an engine with a custom result cap.
    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Maximum number of results a ranking pass returns.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Scores and ranks index entries for `query`.
    ///
    /// - Empty query (after trimming): every entry becomes a result with
    ///   `score = weight` and no highlights, in index order. The engine does
    ///   not sort this path; callers that want weight ordering sort it
    ///   themselves.
    /// - Non-empty query: the query is lowercased and whitespace-split into
    ///   terms. An entry participates if its blob contains at least one term
    ///   (a term the blob lacks contributes nothing; it does not exclude the
    ///   entry). Each matching term is scored against the tool's fields —
    ///   name, id, category, first matching tag, description, with a
    ///   blob-only fallback — and term scores accumulate additively. The
    ///   final score is that sum multiplied by the entry's static weight;
    ///   entries whose combined score is zero never appear.
    ///
    /// Results are sorted by score descending (stable, so ties keep index
    /// order) and truncated to the result cap.
    pub fn search(
        &self,
        query: &str,
        index: &[IndexEntry],
        catalog: &CatalogStore,
        language: &str,
    ) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return index
                .iter()
                .map(|entry| SearchResult {
                    tool_id: entry.tool_id.clone(),
                    score: entry.weight,
                    highlights: Vec::new(),
                })
                .collect();
        }

        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut results = Vec::new();

        // Candidate cap: scanning may stop once we hold twice the result
        // budget. Final truncation below is authoritative.
        let candidate_cap = self.max_results * 2;

        for entry in index {
            let Some(tool) = catalog.tool(&entry.tool_id) else {
                warn!(tool_id = %entry.tool_id, "Index entry has no catalog record, skipping");
                continue;
            };

            let mut score = 0;
            let mut highlights = Vec::new();

            for term in &terms {
                if entry.blob.contains(term.as_str()) {
                    let (term_score, term_highlights) =
                        score_term(entry, tool, term, language);
                    score += term_score;
                    highlights.extend(term_highlights);
                }
            }

            if score > 0 {
                results.push(SearchResult {
                    tool_id: entry.tool_id.clone(),
                    score: score * entry.weight,
                    highlights,
                });

                if results.len() > candidate_cap {
                    break;
                }
            }
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.max_results);

        debug!(
            "Search for \"{}\" matched {} results ({} terms)",
            query,
            results.len(),
            terms.len()
        );

        results
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores a single term against a tool's fields.
///
/// The blob-level containment check has already passed, so at minimum the
/// fallback point applies.
fn score_term(
    entry: &IndexEntry,
    tool: &ToolRecord,
    term: &str,
    language: &str,
) -> (i64, Vec<Highlight>) {
    let mut score = 0;
    let mut highlights = Vec::new();

    let name = tool.display_name(language).to_lowercase();
    if name.contains(term) {
        score += NAME_SCORE;
        highlights.push(Highlight {
            field: HighlightField::Name,
            term: term.to_string(),
        });
    }

    if tool.id.to_lowercase().contains(term) {
        score += ID_SCORE;
    }

    if tool.category.to_lowercase().contains(term) {
        score += CATEGORY_SCORE;
    }

    // First matching tag only; multiple matching tags don't double count
    if tool
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(term))
    {
        score += TAG_SCORE;
    }

    let description = tool.display_description(language).to_lowercase();
    if description.contains(term) {
        score += DESCRIPTION_SCORE;
        highlights.push(Highlight {
            field: HighlightField::Description,
            term: term.to_string(),
        });
    }

    if score == 0 && entry.blob.contains(term) {
        score += BLOB_FALLBACK_SCORE;
    }

    (score, highlights)
}
