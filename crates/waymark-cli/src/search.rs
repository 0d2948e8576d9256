//! Bridges the CLI to the core engine.
//!
//! Runs a query or a category listing through a [`DirectoryContext`] and
//! flattens the resulting view into display rows the output module can
//! format.

use tracing::info;
use waymark_core::catalog::CatalogStore;
use waymark_core::context::{DirectoryContext, NoopUrlParams};
use waymark_core::index::static_weight;
use waymark_core::search::{Highlight, HighlightField, SearchEngine, SearchResult};
use waymark_core::state::RenderView;

/// One result prepared for display.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub score: i64,
    /// Fields the query matched in ("name", "description"), deduplicated
    pub matched_fields: Vec<String>,
}

/// Runs a ranking pass for `query` and returns display rows.
pub fn execute_search(
    catalog: CatalogStore,
    query: &str,
    limit: usize,
    language: &str,
) -> Vec<ResultRow> {
    let mut ctx = DirectoryContext::new(catalog, language, Box::new(NoopUrlParams))
        .with_engine(SearchEngine::with_max_results(limit));

    info!("Searching for \"{}\" (limit {})", query, limit);
    let view = ctx.set_query(query).clone();
    match view {
        RenderView::SearchResults { results, .. } => rows(ctx.catalog(), language, &results),
        // An all-whitespace query falls back to the grouped view; the CLI
        // treats that as "no results" since main rejects empty queries
        _ => Vec::new(),
    }
}

/// Lists a category (or the whole catalog for "all") and returns display
/// rows in the order the site would render them.
pub fn execute_listing(catalog: CatalogStore, category: &str, language: &str) -> Vec<ResultRow> {
    let mut ctx = DirectoryContext::new(catalog, language, Box::new(NoopUrlParams));

    info!("Listing category \"{}\"", category);
    let view = ctx.select_category(category).clone();
    match view {
        RenderView::CategoryListing { results, .. } => rows(ctx.catalog(), language, &results),
        RenderView::Grouped(sections) => sections
            .iter()
            .flat_map(|section| section.tools.iter())
            .filter_map(|tool_id| {
                let tool = ctx.catalog().tool(tool_id)?;
                row(ctx.catalog(), language, tool_id, static_weight(tool), &[])
            })
            .collect(),
        RenderView::SearchResults { .. } => Vec::new(),
    }
}

fn rows(catalog: &CatalogStore, language: &str, results: &[SearchResult]) -> Vec<ResultRow> {
    results
        .iter()
        .filter_map(|result| row(catalog, language, &result.tool_id, result.score, &result.highlights))
        .collect()
}

fn row(
    catalog: &CatalogStore,
    language: &str,
    tool_id: &str,
    score: i64,
    highlights: &[Highlight],
) -> Option<ResultRow> {
    let tool = catalog.tool(tool_id)?;

    let mut matched_fields = Vec::new();
    for highlight in highlights {
        let field = match highlight.field {
            HighlightField::Name => "name",
            HighlightField::Description => "description",
        };
        if !matched_fields.iter().any(|f| f == field) {
            matched_fields.push(field.to_string());
        }
    }

    Some(ResultRow {
        id: tool.id.clone(),
        name: tool.display_name(language).to_string(),
        description: tool.display_description(language).to_string(),
        category: tool.category.clone(),
        url: tool.url.clone(),
        score,
        matched_fields,
    })
}
