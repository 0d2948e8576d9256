//! Scroll-position to category-section resolution.
//!
//! The embedder registers category sections with their measured vertical
//! bounds (in display order) and feeds throttled scroll samples in. The
//! observer resolves which section a fixed probe offset falls into and
//! reports changes of the active section.

use crate::config::SCROLLSPY_OFFSET_PX;

/// A registered category section with its measured vertical bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Category id this section displays
    pub category: String,
    /// Top edge in page coordinates
    pub top: f64,
    /// Bottom edge in page coordinates
    pub bottom: f64,
}

impl Section {
    /// Creates a section from its category id and bounds.
    pub fn new(category: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            category: category.into(),
            top,
            bottom,
        }
    }
}

/// Maps scroll position to the currently visible category section.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    sections: Vec<Section>,
    active: Option<String>,
    offset: f64,
}

impl ScrollSync {
    /// Creates an observer with the production probe offset
    /// ([`SCROLLSPY_OFFSET_PX`]).
    pub fn new() -> Self {
        Self::with_offset(SCROLLSPY_OFFSET_PX)
    }

    /// Creates an observer with a custom probe offset.
    pub fn with_offset(offset: f64) -> Self {
        Self {
            sections: Vec::new(),
            active: None,
            offset,
        }
    }

    /// Replaces the registered sections (after a re-render or re-layout).
    ///
    /// Resets the last-known active section, since old geometry no longer
    /// applies.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.active = None;
    }

    /// Registered sections, in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Last resolved active section.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Feeds one scroll sample and reports a newly active section.
    ///
    /// The probe is `scroll_y + offset`; the first section (in display
    /// order) whose `[top, bottom)` range contains it wins, and the first
    /// registered section is the fallback when none does. Returns
    /// `Some(category)` only when the resolved section differs from the
    /// last-known one.
    pub fn observe(&mut self, scroll_y: f64) -> Option<&str> {
        let probe = scroll_y + self.offset;

        let resolved = self
            .sections
            .iter()
            .find(|s| s.top <= probe && probe < s.bottom)
            .or_else(|| self.sections.first())?;

        if self.active.as_deref() == Some(resolved.category.as_str()) {
            return None;
        }

        self.active = Some(resolved.category.clone());
        self.active.as_deref()
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new()
    }
}
