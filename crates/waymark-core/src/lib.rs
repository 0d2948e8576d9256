//! # Waymark Core
//!
//! Platform-independent engine for a client-side tool directory: catalog
//! storage, search index construction, weighted relevance ranking, and the
//! category/scroll-sync navigation state machine.
//!
//! The crate is frontend-agnostic — rendering, i18n string loading, and
//! input debouncing live in the embedder. The engine consumes the catalog
//! JSON documents plus a handful of injected collaborators and produces
//! ranked [`RenderView`](state::RenderView) values and lifecycle events.
//!
//! ## Modules
//!
//! - [`catalog`] - Read-only store of tool records and categories
//! - [`index`] - Per-language search blob construction and static weights
//! - [`search`] - Field-weighted substring ranking engine
//! - [`state`] - Selection state, scroll-sync observer, navigation guard
//! - [`context`] - [`DirectoryContext`](context::DirectoryContext), the
//!   explicitly constructed root object wiring everything together
//! - [`events`] - Typed event bus for lifecycle notifications
//! - [`config`] - Production configuration constants
//! - [`error`] - Error types for catalog loading
//!
//! ## Usage
//!
//! ```ignore
//! use waymark_core::catalog::CatalogStore;
//! use waymark_core::context::{DirectoryContext, NoopUrlParams};
//!
//! let catalog = CatalogStore::from_json(tools_json, categories_json)?;
//! let mut ctx = DirectoryContext::new(catalog, "en", Box::new(NoopUrlParams));
//!
//! let view = ctx.set_query("image generation");
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod index;
pub mod search;
pub mod state;
