//! Root context wiring catalog, index, ranking, and navigation state.
//!
//! [`DirectoryContext`] is the explicitly constructed root object of the
//! engine: it owns the catalog store, the index cache, the ranking engine,
//! the selection state, the scroll-sync observer, and the event bus.
//! Collaborators the core does not implement — URL parameter access in
//! particular — are injected as trait objects at construction time, with a
//! documented initialization order (catalog → index → view → URL seeding).
//!
//! All operations are synchronous and run to completion; shared state is
//! only ever touched from the caller's thread. The one re-entrancy hazard —
//! click-triggered scrolling racing scroll-triggered selection — is handled
//! by [`NavGuard`], not by locks.

use crate::catalog::CatalogStore;
use crate::config::{ALL_CATEGORY, MIN_QUERY_LENGTH};
use crate::events::{DirectoryEvent, EventBus, ListenerError, SubscriptionId};
use crate::index::{build_index, IndexEntry};
use crate::search::{SearchEngine, SearchResult};
use crate::state::{CategorySection, NavGuard, RenderView, ScrollSync, Section, SelectionState};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// URL query parameter carrying the active search.
pub const URL_PARAM_SEARCH: &str = "search";

/// URL query parameter carrying the active category.
pub const URL_PARAM_CATEGORY: &str = "category";

/// Injected access to the page's URL query parameters.
///
/// The context reads `search` and `category` once at startup and writes
/// them back (without navigation) whenever the selection changes, removing
/// a parameter when it returns to its default.
pub trait UrlParams {
    /// Reads a parameter.
    fn get(&self, name: &str) -> Option<String>;
    /// Sets a parameter.
    fn set(&mut self, name: &str, value: &str);
    /// Removes a parameter.
    fn remove(&mut self, name: &str);
}

/// [`UrlParams`] that stores nothing and reads nothing.
///
/// For embeddings without a URL bar (CLI, tests that don't care).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUrlParams;

impl UrlParams for NoopUrlParams {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _name: &str, _value: &str) {}

    fn remove(&mut self, _name: &str) {}
}

/// In-memory [`UrlParams`] backed by a map.
///
/// The test double for URL round-trip behavior; also usable by embedders
/// that sync the map to a real location elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryUrlParams {
    params: HashMap<String, String>,
}

impl MemoryUrlParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style parameter, for seeding startup state in tests.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl UrlParams for MemoryUrlParams {
    fn get(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    fn remove(&mut self, name: &str) {
        self.params.remove(name);
    }
}

/// The engine's root object.
///
/// Owns every piece of mutable state and exposes the operations the
/// frontend drives: category selection, query changes, language changes,
/// and scroll samples. The most recent [`RenderView`] is cached and
/// returned by reference from every mutating operation.
pub struct DirectoryContext {
    catalog: CatalogStore,
    engine: SearchEngine,
    index: Vec<IndexEntry>,
    language: String,
    selection: SelectionState,
    guard: NavGuard,
    scrollspy: ScrollSync,
    events: EventBus,
    url: Box<dyn UrlParams>,
    view: RenderView,
}

impl DirectoryContext {
    /// Builds a context over `catalog` for `language`.
    ///
    /// Initialization order: the index is built first, the initial view is
    /// rendered (category "all", no query), then the selection is seeded
    /// from the injected URL parameters — `search` first, then `category`,
    /// applying the same transitions user input would. Seeding does not arm
    /// the navigation guard (it is not a user click).
    pub fn new(
        catalog: CatalogStore,
        language: impl Into<String>,
        url: Box<dyn UrlParams>,
    ) -> Self {
        let language = language.into();
        let index = build_index(catalog.tools(), &language);

        let mut context = Self {
            catalog,
            engine: SearchEngine::new(),
            index,
            language,
            selection: SelectionState::new(),
            guard: NavGuard::new(),
            scrollspy: ScrollSync::new(),
            events: EventBus::new(),
            url,
            view: RenderView::Grouped(Vec::new()),
        };
        context.view = context.listing_view();

        info!(
            "Directory context initialized: {} tools indexed (language: {})",
            context.index.len(),
            context.language
        );

        context.seed_from_url();
        context
    }

    /// Replaces the navigation guard, mainly to shorten the cooldown in
    /// tests.
    pub fn with_nav_guard(mut self, guard: NavGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Replaces the ranking engine (e.g. a different result cap).
    pub fn with_engine(mut self, engine: SearchEngine) -> Self {
        self.engine = engine;
        self
    }

    fn seed_from_url(&mut self) {
        let search = self.url.get(URL_PARAM_SEARCH);
        let category = self.url.get(URL_PARAM_CATEGORY);

        if let Some(query) = search {
            if !query.trim().is_empty() {
                self.set_query(&query);
            }
        }
        if let Some(id) = category {
            if id != ALL_CATEGORY {
                self.apply_category(&id, false);
            }
        }
    }

    /// Selects a category from user navigation.
    ///
    /// Arms the navigation guard (the click scrolls the view; scroll-driven
    /// selection must not fight it), writes the `category` URL parameter
    /// (removed for "all"), and emits [`DirectoryEvent::CategoryChanged`].
    ///
    /// If a query is active, the search is re-run instead of cleared. The
    /// fresh ranking pass is NOT restricted to the selected category: the
    /// category filter and the query do not compose, search supersedes the
    /// category. This asymmetry is deliberate (see DESIGN.md).
    ///
    /// Selecting an unknown or disabled category is rejected: the state is
    /// left untouched and the current view returned.
    pub fn select_category(&mut self, id: &str) -> &RenderView {
        self.apply_category(id, true)
    }

    fn apply_category(&mut self, id: &str, user_initiated: bool) -> &RenderView {
        if id != ALL_CATEGORY && !self.catalog.is_enabled_category(id) {
            warn!(category = id, "Ignoring unknown or disabled category");
            return &self.view;
        }

        self.selection.set_category(id);
        if user_initiated {
            self.guard.engage();
        }

        if id == ALL_CATEGORY {
            self.url.remove(URL_PARAM_CATEGORY);
        } else {
            self.url.set(URL_PARAM_CATEGORY, id);
        }

        self.events.publish(&DirectoryEvent::CategoryChanged {
            category: id.to_string(),
        });

        if self.selection.has_query() {
            let query = self.selection.query().to_string();
            self.run_search(&query)
        } else {
            self.view = self.listing_view();
            &self.view
        }
    }

    /// Sets the active query.
    ///
    /// An empty (or whitespace-only) query is equivalent to
    /// [`clear_query`](Self::clear_query). A non-empty query runs a ranking
    /// pass and renders the flat results view regardless of the active
    /// category, emitting `SearchStarted` and `SearchCompleted` around it
    /// and writing the `search` URL parameter.
    pub fn set_query(&mut self, query: &str) -> &RenderView {
        let query = query.trim().to_string();
        if query.len() < MIN_QUERY_LENGTH {
            return self.clear_query();
        }
        self.run_search(&query)
    }

    /// Clears the active query and falls back to the current category's
    /// listing. Removes the `search` URL parameter and emits
    /// [`DirectoryEvent::SearchCleared`].
    pub fn clear_query(&mut self) -> &RenderView {
        self.selection.set_query("");
        self.url.remove(URL_PARAM_SEARCH);
        self.events.publish(&DirectoryEvent::SearchCleared);
        self.view = self.listing_view();
        &self.view
    }

    fn run_search(&mut self, query: &str) -> &RenderView {
        self.selection.set_query(query);
        self.events.publish(&DirectoryEvent::SearchStarted {
            query: query.to_string(),
        });

        let results = self
            .engine
            .search(query, &self.index, &self.catalog, &self.language);

        self.url.set(URL_PARAM_SEARCH, query);
        self.events.publish(&DirectoryEvent::SearchCompleted {
            query: query.to_string(),
            result_count: results.len(),
        });

        self.view = RenderView::SearchResults {
            query: query.to_string(),
            results,
        };
        &self.view
    }

    /// Changes the active language.
    ///
    /// Rebuilds the whole index (the blob embeds language-resolved text)
    /// and swaps it in atomically, then re-runs the active query if one is
    /// set or re-renders the current listing otherwise.
    pub fn set_language(&mut self, language: &str) -> &RenderView {
        self.language = language.to_string();
        self.index = build_index(self.catalog.tools(), &self.language);
        debug!(language, "Rebuilt index for language change");

        if self.selection.has_query() {
            let query = self.selection.query().to_string();
            self.run_search(&query)
        } else {
            self.view = self.listing_view();
            &self.view
        }
    }

    /// Registers the category sections the scroll observer resolves
    /// against (called by the embedder after layout).
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.scrollspy.set_sections(sections);
    }

    /// Feeds one (externally throttled) scroll sample.
    ///
    /// While the navigation guard is engaged the sample is dropped
    /// entirely. Otherwise, when the visible section changes, the selection
    /// category follows it and the new category id is returned so the
    /// embedder can update the navigation highlight — but no re-render, no
    /// URL mutation, and no `CategoryChanged` event happen on this path.
    pub fn handle_scroll(&mut self, scroll_y: f64) -> Option<String> {
        if self.guard.is_suppressed() {
            return None;
        }

        let resolved = self.scrollspy.observe(scroll_y)?.to_string();

        if resolved != ALL_CATEGORY && !self.catalog.is_enabled_category(&resolved) {
            warn!(category = %resolved, "Scroll section references unknown category");
            return None;
        }

        debug!(category = %resolved, "Scroll-sync activated section");
        self.selection.set_category(&resolved);
        Some(resolved)
    }

    fn listing_view(&self) -> RenderView {
        let category = self.selection.category();
        if category == ALL_CATEGORY {
            RenderView::Grouped(self.grouped_sections())
        } else {
            let mut results: Vec<SearchResult> = self
                .index
                .iter()
                .filter(|entry| {
                    self.catalog
                        .tool(&entry.tool_id)
                        .is_some_and(|tool| tool.category == category)
                })
                .map(|entry| SearchResult {
                    tool_id: entry.tool_id.clone(),
                    score: entry.weight,
                    highlights: Vec::new(),
                })
                .collect();
            results.sort_by(|a, b| b.score.cmp(&a.score));

            RenderView::CategoryListing {
                category: category.to_string(),
                results,
            }
        }
    }

    fn grouped_sections(&self) -> Vec<CategorySection> {
        self.catalog
            .categories_ordered()
            .into_iter()
            .filter_map(|(id, _)| {
                let tools: Vec<String> = self
                    .catalog
                    .tools_in_category(id)
                    .into_iter()
                    .map(|tool| tool.id.clone())
                    .collect();
                if tools.is_empty() {
                    None
                } else {
                    Some(CategorySection {
                        category: id.to_string(),
                        tools,
                    })
                }
            })
            .collect()
    }

    /// Subscribes a listener to lifecycle events.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&DirectoryEvent) -> Result<(), ListenerError> + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Unsubscribes a previously registered listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The most recently rendered view.
    pub fn view(&self) -> &RenderView {
        &self.view
    }

    /// Current selection (category + query).
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Injected URL parameter collaborator (read access, for inspection).
    pub fn url_params(&self) -> &dyn UrlParams {
        self.url.as_ref()
    }

    /// Number of entries in the current index.
    pub fn index_len(&self) -> usize {
        self.index.len()
    }
}
