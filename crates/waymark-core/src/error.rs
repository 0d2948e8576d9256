//! Error types for waymark-core.
//!
//! Catalog loading is the only fallible path in the core: ranking and index
//! construction cannot fail for well-formed input, and missing translations
//! are resolved through the fallback chain rather than surfaced as errors.

use thiserror::Error;

/// Errors that can occur while loading catalog data.
///
/// A load failure is fatal to initialization — no partial catalog is ever
/// used. Recovery is a user-initiated reload, not an automatic retry.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The tools document failed to parse
    #[error("Failed to parse tools data: {0}")]
    ParseTools(String),
    /// The categories document failed to parse
    #[error("Failed to parse categories data: {0}")]
    ParseCategories(String),
}
