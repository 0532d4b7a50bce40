//! Turning one Messages API outcome into something the dashboard can show.
//!
//! The pipeline is: join the text blocks, strip Markdown code fences, then
//! hard-parse a JSON array of [`NewsItem`]s. Any failure along the way, or a
//! failed request before it, yields the fixed demo items instead. [`ingest`]
//! therefore always returns an [`UpdateResult`].

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::{
    error::{ClientError, IngestionFailure},
    models::{format_date, MessagesResponse, NewsItem, UpdateResult},
};

const FENCE: &str = "```";

/// Removes a leading and/or trailing Markdown fence marker.
///
/// The leading marker may carry a language tag (```` ```json ````). The result
/// is trimmed when a marker was removed; input without a marker at either
/// boundary is returned as is.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    let mut stripped = false;

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = rest.trim_start_matches(is_language_tag_char);
        stripped = true;
    }
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
        stripped = true;
    }

    if stripped {
        body.trim()
    } else {
        text
    }
}

fn is_language_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')
}

/// Strips fences from the model's text and parses the news array.
///
/// Every element must be an object. Non-object elements such as `[1, 2, 3]`
/// or `[null]`, and nested objects or arrays inside a field, are a parse
/// failure and the caller falls back to the demo items.
pub fn parse_news_text(text: &str) -> Result<Vec<NewsItem>, IngestionFailure> {
    let body = strip_code_fences(text);
    let items = serde_json::from_str::<Vec<NewsItem>>(body)?;
    Ok(items)
}

pub fn parse_response(response: &MessagesResponse) -> Result<Vec<NewsItem>, IngestionFailure> {
    debug!(
        id = ?response.id,
        model = ?response.model,
        stop_reason = ?response.stop_reason,
        usage = ?response.usage,
        blocks = response.content.len(),
        "Parsing model response"
    );
    parse_news_text(&response.text())
}

/// Never fails: a failed request or unparseable output yields the demo items.
pub fn ingest(
    outcome: Result<MessagesResponse, ClientError>,
    now: DateTime<Local>,
) -> UpdateResult {
    let parsed = outcome
        .map_err(IngestionFailure::from)
        .and_then(|response| parse_response(&response));

    match parsed {
        Ok(items) => {
            info!(count = items.len(), "Fetched live news items");
            UpdateResult::Live {
                items,
                updated_at: now,
            }
        }
        Err(err) => {
            warn!(error = %err, "Error fetching updates, falling back to demo data");
            UpdateResult::Fallback {
                items: fallback_items(&now),
                updated_at: now,
            }
        }
    }
}

/// The three demo items shown whenever live data is unavailable.
pub fn fallback_items(now: &DateTime<Local>) -> Vec<NewsItem> {
    let date = format_date(now);
    vec![
        NewsItem {
            title: "Demo: Claude 4.5 Sonnet Released".to_string(),
            summary: "Anthropic announces Claude 4.5 Sonnet with improved reasoning and coding capabilities. The model shows significant improvements in complex task handling.".to_string(),
            source: "Anthropic Blog".to_string(),
            category: "Models".to_string(),
            date: date.clone(),
        },
        NewsItem {
            title: "Demo: ChatGPT Canvas Update".to_string(),
            summary: "OpenAI enhances Canvas feature with better code editing and collaborative writing tools. Users report improved workflow integration.".to_string(),
            source: "OpenAI".to_string(),
            category: "Tools".to_string(),
            date: date.clone(),
        },
        NewsItem {
            title: "Demo: New Vision Model Research".to_string(),
            summary: "Researchers publish breakthrough paper on multimodal understanding. The approach shows 15% improvement on standard benchmarks.".to_string(),
            source: "arXiv".to_string(),
            category: "Research".to_string(),
            date,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResponseError;
    use crate::models::{Category, ContentBlock, DEMO_MODE_SUFFIX};
    use chrono::TimeZone;
    use reqwest::StatusCode;

    const DEMO_TITLES: [&str; 3] = [
        "Demo: Claude 4.5 Sonnet Released",
        "Demo: ChatGPT Canvas Update",
        "Demo: New Vision Model Research",
    ];

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap()
    }

    fn response(texts: &[&str]) -> MessagesResponse {
        MessagesResponse {
            id: None,
            model: None,
            content: texts
                .iter()
                .map(|t| ContentBlock::Text {
                    text: t.to_string(),
                })
                .collect(),
            stop_reason: None,
            usage: None,
        }
    }

    fn titles(result: &UpdateResult) -> Vec<&str> {
        result.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn strips_tagged_fences() {
        assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn strips_untagged_fences() {
        assert_eq!(strip_code_fences("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fences("```[]```"), "[]");
    }

    #[test]
    fn strips_a_single_fence() {
        assert_eq!(strip_code_fences("```json\n[]"), "[]");
        assert_eq!(strip_code_fences("[]\n```"), "[]");
    }

    #[test]
    fn unfenced_text_is_unchanged() {
        for text in ["[]", "not json at all", "  padded  ", "a ``` in the middle", ""] {
            assert_eq!(strip_code_fences(text), text);
            assert_eq!(strip_code_fences(strip_code_fences(text)), text);
        }
    }

    #[test]
    fn fenced_json_ingests_verbatim() {
        let text = "```json\n[{\"title\":\"A\",\"summary\":\"B\",\"source\":\"C\",\"category\":\"Models\",\"date\":\"2025-01-01\"}]\n```";
        let result = ingest(Ok(response(&[text])), now());

        assert!(!result.is_fallback());
        assert_eq!(
            result.items(),
            &[NewsItem {
                title: "A".to_string(),
                summary: "B".to_string(),
                source: "C".to_string(),
                category: "Models".to_string(),
                date: "2025-01-01".to_string(),
            }]
        );
        assert_eq!(result.items()[0].category(), Some(Category::Models));
        assert!(!result.display_timestamp().ends_with(DEMO_MODE_SUFFIX));
    }

    #[test]
    fn keeps_response_order() {
        let text = r#"[{"title":"3"},{"title":"1"},{"title":"2"}]"#;
        let result = ingest(Ok(response(&[text])), now());
        assert_eq!(titles(&result), vec!["3", "1", "2"]);
    }

    #[test]
    fn joins_text_blocks_before_parsing() {
        let blocks = ["```json\n[{\"title\":\"A\"},", "{\"title\":\"B\"}]\n```"];
        let result = ingest(Ok(response(&blocks)), now());
        assert_eq!(titles(&result), vec!["A", "B"]);
    }

    #[test]
    fn empty_array_is_live() {
        let result = ingest(Ok(response(&["```json\n[]\n```"])), now());
        assert!(!result.is_fallback());
        assert!(result.items().is_empty());
    }

    #[test]
    fn garbage_falls_back_to_demo_items() {
        let result = ingest(Ok(response(&["not json at all"])), now());

        assert!(result.is_fallback());
        assert_eq!(titles(&result), DEMO_TITLES);
        assert!(result.display_timestamp().ends_with(DEMO_MODE_SUFFIX));
        assert!(result.items().iter().all(|i| i.date == "3/4/2025"));
    }

    #[test]
    fn non_array_json_falls_back() {
        let result = ingest(Ok(response(&[r#"{"title":"A"}"#])), now());
        assert!(result.is_fallback());

        let result = ingest(Ok(response(&["[1, 2, 3]"])), now());
        assert!(result.is_fallback());
    }

    #[test]
    fn non_object_elements_fall_back() {
        for text in ["[null]", r#"["A"]"#, r#"[{"title":"A"}, 7]"#] {
            assert!(parse_news_text(text).is_err(), "{text}");
            assert!(ingest(Ok(response(&[text])), now()).is_fallback(), "{text}");
        }
    }

    #[test]
    fn nested_field_values_fall_back() {
        for text in [r#"[{"title":{"en":"A"}}]"#, r#"[{"source":["a","b"]}]"#] {
            assert!(parse_news_text(text).is_err(), "{text}");
            assert_eq!(titles(&ingest(Ok(response(&[text])), now())), DEMO_TITLES);
        }
    }

    #[test]
    fn truncated_array_falls_back() {
        let result = ingest(Ok(response(&[r#"[{"title":"A"},{"title":"#])), now());
        assert!(result.is_fallback());
        assert_eq!(result.items().len(), 3);
    }

    #[test]
    fn no_text_blocks_falls_back() {
        let result = ingest(Ok(response(&[])), now());
        assert!(result.is_fallback());
    }

    #[test]
    fn request_failures_fall_back_like_parse_failures() {
        let parse_failure = ingest(Ok(response(&["nope"])), now());
        let status_failure = ingest(
            Err(ResponseError::http_status(StatusCode::BAD_GATEWAY, "upstream").into()),
            now(),
        );
        let invalid = ingest(Err(ClientError::InvalidRequest("boom".to_string())), now());

        assert_eq!(status_failure, parse_failure);
        assert_eq!(invalid, parse_failure);
        assert_eq!(
            status_failure.display_timestamp(),
            "3/4/2025, 9:30:00 AM (Demo Mode)"
        );
    }
}
