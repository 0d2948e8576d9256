//! End-to-end tests for the directory engine.
//!
//! These exercise the full pipeline — catalog load → index build → ranking →
//! navigation state — through the public `DirectoryContext` API, the way a
//! frontend would drive it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use waymark_core::catalog::CatalogStore;
use waymark_core::config::ALL_CATEGORY;
use waymark_core::context::{
    DirectoryContext, MemoryUrlParams, NoopUrlParams, URL_PARAM_CATEGORY, URL_PARAM_SEARCH,
};
use waymark_core::events::DirectoryEvent;
use waymark_core::index::build_index;
use waymark_core::state::{NavGuard, RenderView, Section};

const TOOLS_JSON: &str = r#"{
    "links": [
        {
            "id": "chatgpt",
            "name": {"en": "ChatGPT", "zh": "聊天助手"},
            "description": {"en": "Conversational assistant"},
            "category": "chat",
            "url": "https://chatgpt.com",
            "tags": ["assistant", "llm"],
            "pricing": "freemium"
        },
        {
            "id": "paintbox",
            "name": {"en": "Paintbox"},
            "description": {"en": "Image generation studio"},
            "category": "creative",
            "url": "https://paintbox.example",
            "tags": ["images"],
            "pricing": "paid"
        },
        {
            "id": "snippet",
            "name": {"en": "Snippet"},
            "description": {"en": "Code completion that feels like chatgpt"},
            "category": "coding",
            "url": "https://snippet.example",
            "pricing": "free"
        },
        {
            "id": "deskmate",
            "name": {"en": "Deskmate"},
            "description": {"en": "Office document helper"},
            "category": "office",
            "url": "/tools/deskmate",
            "pricing": "free"
        }
    ]
}"#;

const CATEGORIES_JSON: &str = r##"{
    "categories": {
        "chat": {"name": {"en": "Chat", "zh": "对话"}, "icon": "💬", "color": "#3B82F6", "order": 1},
        "creative": {"name": {"en": "Creative"}, "icon": "🎨", "color": "#EC4899", "order": 2},
        "office": {"name": {"en": "Office"}, "icon": "📄", "color": "#10B981", "order": 3},
        "coding": {"name": {"en": "Coding"}, "icon": "⌨️", "color": "#F59E0B", "order": 4}
    }
}"##;

fn catalog() -> CatalogStore {
    CatalogStore::from_json(TOOLS_JSON, CATEGORIES_JSON).unwrap()
}

fn context() -> DirectoryContext {
    DirectoryContext::new(catalog(), "en", Box::new(MemoryUrlParams::new()))
}

fn sections() -> Vec<Section> {
    vec![
        Section::new("chat", 0.0, 600.0),
        Section::new("creative", 600.0, 1200.0),
        Section::new("office", 1200.0, 1800.0),
        Section::new("coding", 1800.0, 2400.0),
    ]
}

#[test]
fn test_results_always_contain_a_query_term() {
    let store = catalog();
    let index = build_index(store.tools(), "en");
    let mut ctx = context();

    for query in ["chat", "image code", "free", "assistant office"] {
        let view = ctx.set_query(query).clone();
        let RenderView::SearchResults { results, .. } = view else {
            panic!("expected search results for {query:?}");
        };
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        for result in &results {
            let entry = index.iter().find(|e| e.tool_id == result.tool_id).unwrap();
            assert!(
                terms.iter().any(|t| entry.blob.contains(t.as_str())),
                "result {} for query {query:?} matched no term",
                result.tool_id
            );
            assert!(result.score > 0);
        }
    }
}

#[test]
fn test_empty_query_includes_every_tool_with_weight_score() {
    let store = catalog();
    let index = build_index(store.tools(), "en");
    let engine = waymark_core::search::SearchEngine::new();

    let results = engine.search("", &index, &store, "en");
    assert_eq!(results.len(), store.len());
    for (result, entry) in results.iter().zip(index.iter()) {
        assert_eq!(result.tool_id, entry.tool_id);
        assert_eq!(result.score, entry.weight);
    }
}

#[test]
fn test_no_match_query_yields_empty_results_view() {
    let mut ctx = context();
    match ctx.set_query("zzzzzz") {
        RenderView::SearchResults { results, .. } => assert!(results.is_empty()),
        other => panic!("expected search results view, got {other:?}"),
    }
}

#[test]
fn test_scroll_is_suppressed_during_cooldown() {
    let mut ctx = context();
    ctx.set_sections(sections());

    // User clicks "coding"; the click-triggered smooth scroll will pass
    // through other sections
    ctx.select_category("coding");
    assert_eq!(ctx.selection().category(), "coding");

    // A scroll sample geometrically inside "creative" arrives within the
    // cooldown window: it must not move the selection
    assert_eq!(ctx.handle_scroll(700.0), None);
    assert_eq!(ctx.selection().category(), "coding");
}

#[test]
fn test_scroll_updates_selection_when_guard_is_idle() {
    let mut ctx = context().with_nav_guard(NavGuard::with_cooldown(Duration::ZERO));
    ctx.set_sections(sections());

    assert_eq!(ctx.handle_scroll(700.0).as_deref(), Some("creative"));
    assert_eq!(ctx.selection().category(), "creative");

    // Same section again: no change reported
    assert_eq!(ctx.handle_scroll(750.0), None);

    // Scroll-driven selection never touches the URL or the rendered view
    assert_eq!(ctx.url_params().get(URL_PARAM_CATEGORY), None);
    assert!(matches!(ctx.view(), RenderView::Grouped(_)));
}

#[test]
fn test_scroll_past_all_sections_falls_back_to_first() {
    let mut ctx = context().with_nav_guard(NavGuard::with_cooldown(Duration::ZERO));
    ctx.set_sections(sections());

    assert_eq!(ctx.handle_scroll(99999.0).as_deref(), Some("chat"));
}

#[test]
fn test_category_round_trip_restores_initial_grouped_view() {
    let mut ctx = context();
    let initial = ctx.view().clone();

    ctx.select_category("office");
    assert!(matches!(ctx.view(), RenderView::CategoryListing { .. }));

    let restored = ctx.select_category(ALL_CATEGORY).clone();
    assert_eq!(restored, initial);
}

#[test]
fn test_event_lifecycle_for_search_and_navigation() {
    let events: Rc<RefCell<Vec<DirectoryEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = context();

    let sink = Rc::clone(&events);
    ctx.subscribe(move |event| {
        sink.borrow_mut().push(event.clone());
        Ok(())
    });

    ctx.set_query("chatgpt");
    ctx.select_category("chat");
    ctx.clear_query();

    let seen = events.borrow();
    assert_eq!(
        seen[0],
        DirectoryEvent::SearchStarted {
            query: "chatgpt".to_string()
        }
    );
    // ChatGPT matches by name, Snippet by description
    assert_eq!(
        seen[1],
        DirectoryEvent::SearchCompleted {
            query: "chatgpt".to_string(),
            result_count: 2
        }
    );
    assert_eq!(
        seen[2],
        DirectoryEvent::CategoryChanged {
            category: "chat".to_string()
        }
    );
    // Selecting a category with a query active re-runs the search
    assert!(matches!(seen[3], DirectoryEvent::SearchStarted { .. }));
    assert!(matches!(seen[4], DirectoryEvent::SearchCompleted { .. }));
    assert_eq!(seen[5], DirectoryEvent::SearchCleared);
}

#[test]
fn test_name_match_ranks_above_description_match() {
    let mut ctx = context();
    let view = ctx.set_query("chatgpt").clone();

    let RenderView::SearchResults { results, .. } = view else {
        panic!("expected search results");
    };
    assert_eq!(results.len(), 2);
    // "ChatGPT" matches in its name; "Snippet" only mentions chatgpt in its
    // description. Weights differ here, but the field multiplier dominates.
    assert_eq!(results[0].tool_id, "chatgpt");
    assert_eq!(results[1].tool_id, "snippet");
}

#[test]
fn test_url_round_trip_through_context() {
    let url = MemoryUrlParams::new()
        .with_param(URL_PARAM_SEARCH, "image")
        .with_param(URL_PARAM_CATEGORY, "creative");
    let mut ctx = DirectoryContext::new(catalog(), "en", Box::new(url));

    assert_eq!(ctx.selection().query(), "image");
    assert_eq!(ctx.selection().category(), "creative");

    ctx.clear_query();
    ctx.select_category(ALL_CATEGORY);
    assert_eq!(ctx.url_params().get(URL_PARAM_SEARCH), None);
    assert_eq!(ctx.url_params().get(URL_PARAM_CATEGORY), None);
    assert!(matches!(ctx.view(), RenderView::Grouped(_)));
}

#[test]
fn test_language_round_trip_reindexes_names() {
    let mut ctx = DirectoryContext::new(catalog(), "zh", Box::new(NoopUrlParams));

    // zh index carries the zh name
    let view = ctx.set_query("聊天").clone();
    let RenderView::SearchResults { results, .. } = view else {
        panic!("expected search results");
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tool_id, "chatgpt");

    // Switching to en drops the zh name from the index; the active query is
    // re-run against the rebuilt index
    match ctx.set_language("en") {
        RenderView::SearchResults { results, .. } => assert!(results.is_empty()),
        other => panic!("expected search results, got {other:?}"),
    }
}

#[test]
fn test_grouped_view_follows_category_display_order() {
    let ctx = context();
    let RenderView::Grouped(sections) = ctx.view() else {
        panic!("expected grouped view");
    };
    let order: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(order, vec!["chat", "creative", "office", "coding"]);
}

#[test]
fn test_self_hosted_tool_outweighs_paid_peer_in_listing() {
    let mut ctx = context();
    // office holds only deskmate, so compare across the weight-only path:
    // empty-query scores equal static weights
    let store = catalog();
    let index = build_index(store.tools(), "en");
    let deskmate = index.iter().find(|e| e.tool_id == "deskmate").unwrap();
    let paintbox = index.iter().find(|e| e.tool_id == "paintbox").unwrap();
    assert!(
        deskmate.weight > paintbox.weight,
        "free + self-hosted must outweigh paid external"
    );

    match ctx.select_category("office") {
        RenderView::CategoryListing { results, .. } => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].score, deskmate.weight);
        }
        other => panic!("expected category listing, got {other:?}"),
    }
}
