//! Catalog record types.
//!
//! These mirror the static JSON documents the directory is built from: a
//! list of tool records and a map of category definitions. Both are
//! immutable after load.

use crate::config::FALLBACK_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display order assigned to categories that don't specify one.
///
/// Sorts them after every explicitly ordered category.
pub const DEFAULT_CATEGORY_ORDER: u32 = 999;

/// Color assigned to categories that don't specify one (neutral gray).
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

/// Per-language text with a fixed fallback chain.
///
/// Lookup resolves `requested → "en" → ""`. A missing translation is never
/// an error; callers that need a non-empty display string fall back further
/// (e.g. [`ToolRecord::display_name`] falls back to the tool id).
///
/// Backed by a `BTreeMap` so iteration order — and therefore everything
/// derived from it, like the keyword-bonus scan — is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Creates an empty localized text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mainly for tests and fixtures.
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(language.into(), text.into());
        self
    }

    /// Returns the exact translation for `language`, if present.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Resolves text through the fallback chain: `language → "en" → ""`.
    pub fn resolve(&self, language: &str) -> &str {
        self.get(language)
            .or_else(|| self.get(FALLBACK_LANGUAGE))
            .unwrap_or("")
    }

    /// Iterates over every translation value, in key order.
    ///
    /// Used by the static weight computation, which scans all language
    /// variants of a name at once.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Returns `true` if no translation is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pricing tier of a tool.
///
/// Unknown or unrecognized tiers deserialize to [`Pricing::Unknown`] rather
/// than failing the whole catalog load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Free,
    Freemium,
    Paid,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for Pricing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tier = String::deserialize(deserializer)?;
        Ok(match tier.as_str() {
            "free" => Pricing::Free,
            "freemium" => Pricing::Freemium,
            "paid" => Pricing::Paid,
            _ => Pricing::Unknown,
        })
    }
}

impl Pricing {
    /// Lowercase wire/blob representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pricing::Free => "free",
            Pricing::Freemium => "freemium",
            Pricing::Paid => "paid",
            Pricing::Unknown => "unknown",
        }
    }
}

/// One catalog entry for a single external or internal tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Unique identifier
    pub id: String,
    /// Per-language display name
    pub name: LocalizedText,
    /// Per-language description
    #[serde(default)]
    pub description: LocalizedText,
    /// Category identifier (foreign key into the category set)
    pub category: String,
    /// Destination URL; root-relative ("/...") means internally hosted
    pub url: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pricing tier
    #[serde(default)]
    pub pricing: Pricing,
}

impl ToolRecord {
    /// Resolves the display name for `language`.
    ///
    /// A record with no usable name in any language still displays (and
    /// indexes) under its id.
    pub fn display_name(&self, language: &str) -> &str {
        let name = self.name.resolve(language);
        if name.is_empty() {
            &self.id
        } else {
            name
        }
    }

    /// Resolves the description for `language` (may be empty).
    pub fn display_description(&self, language: &str) -> &str {
        self.description.resolve(language)
    }

    /// Returns `true` if the URL is a root-relative path, signaling an
    /// internally hosted tool.
    pub fn is_self_hosted(&self) -> bool {
        self.url.starts_with('/')
    }
}

/// A category definition.
///
/// The category id is the key of the categories map, not a field of the
/// record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Per-language display name
    pub name: LocalizedText,
    /// Icon glyph or markup, passed through to the renderer untouched
    #[serde(default)]
    pub icon: String,
    /// Hex color string
    #[serde(default = "default_color")]
    pub color: String,
    /// Display order; lower sorts first
    #[serde(default = "default_order")]
    pub order: u32,
    /// Disabled categories are hidden from navigation and grouping
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Category {
    /// Resolves the display name for `language`, falling back to `id`.
    pub fn display_name<'a>(&'a self, language: &str, id: &'a str) -> &'a str {
        let name = self.name.resolve(language);
        if name.is_empty() {
            id
        } else {
            name
        }
    }
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

fn default_order() -> u32 {
    DEFAULT_CATEGORY_ORDER
}

fn default_enabled() -> bool {
    true
}
