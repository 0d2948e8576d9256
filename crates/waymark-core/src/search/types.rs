//! Result types produced by a ranking pass.

/// Field a query term matched in, for visual emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightField {
    Name,
    Description,
}

/// A (field, term) pair marking where a query term matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Field the term was found in
    pub field: HighlightField,
    /// The lowercase query term that matched
    pub term: String,
}

/// One ranked entry from the most recent ranking pass.
///
/// Transient — recomputed on every search, never persisted. The tool itself
/// is referenced by id; callers resolve it against the catalog store when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Id of the matched tool
    pub tool_id: String,
    /// Final score: per-term field scores summed, multiplied by the static
    /// weight (or the bare weight for the empty query)
    pub score: i64,
    /// Highlight spans collected while scoring
    pub highlights: Vec<Highlight>,
}
