//! Query ranking over the catalog index.
//!
//! - `types`: result types ([`SearchResult`], [`Highlight`], [`HighlightField`])
//! - `engine`: [`SearchEngine`], the field-weighted substring ranker
//!
//! Scoring is substring containment weighted by the matched field (name >
//! id > category > tag > description), with the accumulated per-term score
//! multiplied by the tool's static weight. There is no tokenizer beyond
//! whitespace splitting and no fuzzy matching — at a few hundred records,
//! exact substring scanning is fast and predictable.

mod engine;
pub mod types;

pub use engine::SearchEngine;
pub use types::{Highlight, HighlightField, SearchResult};
