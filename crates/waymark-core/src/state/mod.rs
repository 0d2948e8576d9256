//! Navigation state: selection, scroll-sync, and the re-entrancy guard.
//!
//! - `selection`: active category/query and the [`RenderView`] they produce
//! - `scrollspy`: scroll-position → visible-section resolution
//! - `guard`: suppression token breaking the click/scroll feedback loop

mod guard;
mod scrollspy;
mod selection;

pub use guard::NavGuard;
pub use scrollspy::{ScrollSync, Section};
pub use selection::{CategorySection, RenderView, SelectionState};
