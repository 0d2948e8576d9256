//! Waymark CLI - Command-line frontend for the catalog search engine.
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! waymark "image generation"
//! waymark "chatgpt" -n 5
//! waymark "query" --json
//!
//! # List a category (weight-ordered), or the whole catalog
//! waymark --category coding
//! waymark --category all
//!
//! # Point at catalog files explicitly
//! waymark "query" --tools data/links_curated.json --categories config/categories.json
//! ```

mod config;
mod output;
mod search;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Waymark catalog search CLI.
///
/// Searches the same catalog data the directory site renders, with the same
/// ranking: field-weighted substring matching multiplied by each tool's
/// static weight.
#[derive(Parser)]
#[command(name = "waymark", version, about)]
struct Cli {
    /// Search query
    query: Option<String>,

    /// List a category instead of searching ("all" lists the whole catalog
    /// grouped by category)
    #[arg(long)]
    category: Option<String>,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value = "10")]
    limit: usize,

    /// Language for names, descriptions, and the search index
    #[arg(long, default_value = "en")]
    lang: String,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Tools data file (default: data/links_curated.json, or $WAYMARK_DATA_DIR)
    #[arg(long)]
    tools: Option<PathBuf>,

    /// Categories data file (default: config/categories.json, or $WAYMARK_DATA_DIR)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog = config::load_catalog(cli.tools.as_ref(), cli.categories.as_ref())?;

    match (&cli.query, &cli.category) {
        (Some(query), _) => {
            let rows = search::execute_search(catalog, query, cli.limit, &cli.lang);
            let out = if cli.json {
                output::format_json(query, &rows)
            } else {
                output::format_human(query, &rows)
            };
            println!("{}", out);
        }
        (None, Some(category)) => {
            let rows = search::execute_listing(catalog, category, &cli.lang);
            let out = if cli.json {
                output::format_json(category, &rows)
            } else {
                output::format_human(category, &rows)
            };
            println!("{}", out);
        }
        (None, None) => {
            eprintln!("No search query or category provided. Use --help for usage information.");
            std::process::exit(1);
        }
    }

    Ok(())
}
