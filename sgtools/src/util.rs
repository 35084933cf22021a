//! Small convenience helpers for common calls.

use serde_json::Value;
use sgtooling::{ToolCall, ToolExecutionContext};

use crate::ToolKind;

/// Parses a tool name. Accepts canonical names in any case, snake or kebab
/// spellings, service operation names, and a few short aliases.
pub fn parse_tool_kind(value: &str) -> Option<ToolKind> {
    let folded = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect::<String>()
        .to_ascii_lowercase();

    let alias = match folded.as_str() {
        "scraper" | "smartscrape" => Some(ToolKind::SmartScraper),
        "crawl" | "crawler" => Some(ToolKind::SmartCrawler),
        "markdown" => Some(ToolKind::Markdownify),
        "search" => Some(ToolKind::SearchScraper),
        "agentic" => Some(ToolKind::AgenticScraper),
        "credits" => Some(ToolKind::GetCredits),
        "feedback" => Some(ToolKind::SubmitFeedback),
        _ => None,
    };

    alias.or_else(|| {
        ToolKind::ALL.into_iter().find(|kind| {
            kind.name().eq_ignore_ascii_case(&folded)
                || kind.operation().as_str().replace('_', "") == folded
        })
    })
}

/// Tool call for `kind` with JSON arguments.
pub fn tool_call(id: impl Into<String>, kind: ToolKind, arguments: Value) -> ToolCall {
    ToolCall::new(id, kind.name(), arguments.to_string())
}

pub fn execution_context(session_id: impl Into<String>) -> ToolExecutionContext {
    ToolExecutionContext::new(session_id)
}
