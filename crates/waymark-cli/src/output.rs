//! Output formatting for search results and category listings.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use crate::search::ResultRow;
use serde::Serialize;

/// Maximum characters to show in a description snippet.
const SNIPPET_MAX_LEN: usize = 160;

/// JSON output structure.
#[derive(Serialize)]
pub struct JsonOutput {
    pub query: String,
    pub total: usize,
    pub results: Vec<JsonResult>,
}

/// One result in JSON format.
#[derive(Serialize)]
pub struct JsonResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub score: i64,
    /// Fields the query matched in, when searching
    pub matched_fields: Vec<String>,
}

impl From<&ResultRow> for JsonResult {
    fn from(row: &ResultRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            description: row.description.clone(),
            category: row.category.clone(),
            url: row.url.clone(),
            score: row.score,
            matched_fields: row.matched_fields.clone(),
        }
    }
}

/// Formats results as JSON.
pub fn format_json(subject: &str, rows: &[ResultRow]) -> String {
    let output = JsonOutput {
        query: subject.to_string(),
        total: rows.len(),
        results: rows.iter().map(JsonResult::from).collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats results for human-readable terminal output.
pub fn format_human(subject: &str, rows: &[ResultRow]) -> String {
    if rows.is_empty() {
        return format!("No tools found for \"{}\"", subject);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Found {} tool{} for \"{}\":\n\n",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" },
        subject
    ));

    for (i, row) in rows.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}] (score: {})\n",
            i + 1,
            row.name,
            row.category,
            row.score
        ));

        if !row.matched_fields.is_empty() {
            output.push_str(&format!("   matched: {}\n", row.matched_fields.join(", ")));
        }

        output.push_str(&format!("   {}\n", row.url));

        if !row.description.is_empty() {
            output.push_str(&format!(
                "   {}\n",
                truncate_text(&row.description, SNIPPET_MAX_LEN)
            ));
        }

        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Truncates text to a maximum length at a word boundary, adding an
/// ellipsis if needed.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_len).collect();
    if let Some(last_space) = truncated.rfind(' ') {
        format!("{}...", &truncated[..last_space])
    } else {
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(id: &str, name: &str, score: i64) -> ResultRow {
        ResultRow {
            id: id.to_string(),
            name: name.to_string(),
            description: "A helpful tool".to_string(),
            category: "chat".to_string(),
            url: format!("https://{id}.example"),
            score,
            matched_fields: vec!["name".to_string()],
        }
    }

    #[test]
    fn test_format_human_empty() {
        let output = format_human("test query", &[]);
        assert!(output.contains("No tools found"));
    }

    #[test]
    fn test_format_human_single() {
        let rows = vec![make_row("chatgpt", "ChatGPT", 1800)];
        let output = format_human("chatgpt", &rows);
        assert!(output.contains("1 tool"));
        assert!(output.contains("ChatGPT"));
        assert!(output.contains("score: 1800"));
        assert!(output.contains("matched: name"));
    }

    #[test]
    fn test_format_json() {
        let rows = vec![make_row("chatgpt", "ChatGPT", 1800)];
        let output = format_json("chatgpt", &rows);
        assert!(output.contains("\"query\": \"chatgpt\""));
        assert!(output.contains("\"total\": 1"));
        assert!(output.contains("\"score\": 1800"));
        assert!(output.contains("\"matched_fields\""));
    }

    #[test]
    fn test_truncate_text() {
        let short = "Short text";
        assert_eq!(truncate_text(short, 50), short);

        let long = "This is a much longer text that should be truncated at a reasonable point";
        let truncated = truncate_text(long, 30);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 33);
    }

    #[test]
    fn test_truncate_text_multibyte_safe() {
        let text = "智能工具的描述信息，用来验证多字节截断不会崩溃，再补充一些字符";
        let truncated = truncate_text(text, 10);
        assert!(truncated.ends_with("..."));
    }
}
