//! Static popularity weight for catalog tools.
//!
//! The weight is a query-independent relevance signal: it is the sole
//! ordering for weight-only listings and the multiplier applied to
//! field-match scores during ranking. It is a pure sum — the order of the
//! bonus terms does not matter.

use crate::catalog::{Pricing, ToolRecord};

/// Base weight every tool receives.
const BASE_WEIGHT: i64 = 20;

/// Bonus for internally hosted tools (root-relative URLs).
const SELF_HOSTED_BONUS: i64 = 30;

/// Cap on the accumulated hype-keyword bonus.
const KEYWORD_BONUS_CAP: i64 = 25;

/// Bonus per distinct hype keyword found in the tool's name.
const KEYWORD_BONUS: i64 = 5;

/// Domains of top-tier tools. Checked before [`POPULAR_DOMAINS`]; a tool
/// never receives both bonuses.
const PREMIUM_DOMAINS: &[&str] = &[
    "chatgpt.com",
    "claude.ai",
    "chat.openai.com",
    "openai.com",
    "midjourney.com",
    "gemini.google.com",
    "perplexity.ai",
    "github.com",
    "notion.so",
    "canva.com",
    "stability.ai",
];

/// Domains of widely used tools one tier below premium.
const POPULAR_DOMAINS: &[&str] = &[
    "leonardo.ai",
    "elevenlabs.io",
    "runwayml.com",
    "synthesia.io",
    "gamma.app",
    "character.ai",
    "huggingface.co",
    "cursor.com",
    "remove.bg",
    "grammarly.com",
    "zapier.com",
    "zoom.us",
];

/// Hype keywords scanned against the name in every language.
const HYPE_KEYWORDS: &[&str] = &[
    "gpt",
    "chatgpt",
    "claude",
    "gemini",
    "midjourney",
    "ai",
    "智能",
];

/// Category affinity bonuses. Categories absent from the table get +0.
const CATEGORY_AFFINITY: &[(&str, i64)] = &[
    ("chat", 15),
    ("creative", 12),
    ("search", 10),
    ("office", 8),
    ("coding", 10),
];

/// Computes the static weight of a tool.
///
/// Deterministic and stateless: identical input always yields identical
/// output.
pub fn static_weight(tool: &ToolRecord) -> i64 {
    let mut weight = BASE_WEIGHT;

    weight += match tool.pricing {
        Pricing::Free => 25,
        Pricing::Freemium => 15,
        Pricing::Paid => 10,
        Pricing::Unknown => 0,
    };

    if PREMIUM_DOMAINS.iter().any(|d| tool.url.contains(d)) {
        weight += 40;
    } else if POPULAR_DOMAINS.iter().any(|d| tool.url.contains(d)) {
        weight += 20;
    }

    // Keyword scan runs over the name in all languages at once, so a tool
    // hyped in any locale benefits regardless of the active language.
    let combined_name = tool
        .name
        .values()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let mut keyword_bonus = 0;
    for keyword in HYPE_KEYWORDS {
        if combined_name.contains(keyword) {
            keyword_bonus += KEYWORD_BONUS;
        }
    }
    weight += keyword_bonus.min(KEYWORD_BONUS_CAP);

    if let Some((_, bonus)) = CATEGORY_AFFINITY
        .iter()
        .find(|(id, _)| *id == tool.category)
    {
        weight += bonus;
    }

    if tool.is_self_hosted() {
        weight += SELF_HOSTED_BONUS;
    }

    weight
}
