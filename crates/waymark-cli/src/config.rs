//! Configuration and path resolution for the CLI.
//!
//! Locates the two catalog documents across different environments:
//! - Explicit: `--tools` / `--categories` flags
//! - Custom: `$WAYMARK_DATA_DIR` environment variable
//! - Conventional: `data/links_curated.json` and `config/categories.json`
//!   relative to the working directory (the layout the site itself uses)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use waymark_core::catalog::CatalogStore;

/// Tools document file name.
const TOOLS_FILENAME: &str = "links_curated.json";

/// Categories document file name.
const CATEGORIES_FILENAME: &str = "categories.json";

/// Conventional directory of the tools document.
const TOOLS_DIR: &str = "data";

/// Conventional directory of the categories document.
const CATEGORIES_DIR: &str = "config";

/// Environment variable pointing at a directory holding both documents.
const DATA_DIR_ENV: &str = "WAYMARK_DATA_DIR";

/// Resolves the path of the tools document.
pub fn tools_path(custom: Option<&PathBuf>) -> PathBuf {
    resolve_path(custom, TOOLS_DIR, TOOLS_FILENAME)
}

/// Resolves the path of the categories document.
pub fn categories_path(custom: Option<&PathBuf>) -> PathBuf {
    resolve_path(custom, CATEGORIES_DIR, CATEGORIES_FILENAME)
}

fn resolve_path(custom: Option<&PathBuf>, conventional_dir: &str, filename: &str) -> PathBuf {
    if let Some(path) = custom {
        return path.clone();
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Path::new(&dir).join(filename);
    }

    Path::new(conventional_dir).join(filename)
}

/// Loads and parses the catalog from the resolved paths.
///
/// A missing or malformed document is fatal — no partial catalog is used.
pub fn load_catalog(
    tools: Option<&PathBuf>,
    categories: Option<&PathBuf>,
) -> Result<CatalogStore> {
    let tools_path = tools_path(tools);
    let categories_path = categories_path(categories);

    let tools_json = std::fs::read_to_string(&tools_path)
        .with_context(|| format!("Failed to read tools file: {}", tools_path.display()))?;
    let categories_json = std::fs::read_to_string(&categories_path).with_context(|| {
        format!(
            "Failed to read categories file: {}",
            categories_path.display()
        )
    })?;

    CatalogStore::from_json(&tools_json, &categories_json).context("Failed to parse catalog data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path_wins() {
        let custom = PathBuf::from("/tmp/my-tools.json");
        assert_eq!(tools_path(Some(&custom)), custom);
    }

    #[test]
    fn test_conventional_paths() {
        // Only meaningful when the env var is unset, as in a clean test run
        if std::env::var(DATA_DIR_ENV).is_err() {
            assert_eq!(tools_path(None), Path::new("data").join(TOOLS_FILENAME));
            assert_eq!(
                categories_path(None),
                Path::new("config").join(CATEGORIES_FILENAME)
            );
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let missing = PathBuf::from("/nonexistent/tools.json");
        let err = load_catalog(Some(&missing), None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tools.json"));
    }
}
