//! Production configuration constants.
//!
//! These values define the production behavior of the Waymark engine and are
//! referenced from the core modules and the CLI to keep the two in sync.

// =============================================================================
// Search Configuration
// =============================================================================

/// Maximum number of results returned by a ranking pass.
///
/// Candidate accumulation may scan further (see
/// [`SearchEngine`](crate::search::SearchEngine)), but the final result set
/// is always truncated to this count.
pub const MAX_RESULTS: usize = 100;

/// Minimum query length (in characters, after trimming) before a search is
/// worth running. Shorter input should be treated as an empty query.
pub const MIN_QUERY_LENGTH: usize = 1;

/// Recommended debounce interval for search input, in milliseconds.
///
/// Debouncing happens at the embedding boundary (the engine itself is
/// stateless and idempotent per call); this is the interval the reference
/// frontend uses.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Sentinel category id meaning "no category filter".
pub const ALL_CATEGORY: &str = "all";

/// Recommended throttle interval for scroll sampling, in milliseconds.
pub const SCROLL_THROTTLE_MS: u64 = 100;

/// Vertical probe offset for scroll-sync section resolution, in pixels.
///
/// A section is "active" when `scroll_y + offset` falls inside its
/// `[top, bottom)` range.
pub const SCROLLSPY_OFFSET_PX: f64 = 100.0;

/// Cooldown window after a user-initiated category click during which
/// scroll-driven selection updates are suppressed, in milliseconds.
pub const NAV_COOLDOWN_MS: u64 = 500;

// =============================================================================
// Localization Configuration
// =============================================================================

/// Fallback language used when a record carries no translation for the
/// active language.
pub const FALLBACK_LANGUAGE: &str = "en";
