use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Server-side tool declaration, e.g. the web search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Builder, Serialize)]
pub struct MessagesRequest {
    #[builder(into)]
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    /// Tool calls, search results and anything else that is not plain text.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// Text blocks in response order, joined by a newline and trimmed.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_tool_type_field() {
        let req = MessagesRequest::builder()
            .model("claude-sonnet-4-20250514")
            .max_tokens(1000)
            .messages(vec![Message::user("hello")])
            .tools(vec![Tool {
                kind: "web_search_20250305".to_string(),
                name: "web_search".to_string(),
            }])
            .build();

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 1000,
                "messages": [{ "role": "user", "content": "hello" }],
                "tools": [{ "type": "web_search_20250305", "name": "web_search" }]
            })
        );
    }

    #[test]
    fn text_skips_non_text_blocks_and_joins_with_newline() {
        let res: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "content": [
                { "type": "text", "text": "  first" },
                { "type": "server_tool_use", "id": "srvtoolu_1", "name": "web_search", "input": {} },
                { "type": "web_search_tool_result", "tool_use_id": "srvtoolu_1", "content": [] },
                { "type": "text", "text": "second  \n" }
            ],
            "stop_reason": "end_turn"
        }))
        .unwrap();

        assert_eq!(res.content.len(), 4);
        assert_eq!(res.content[1], ContentBlock::Other);
        assert_eq!(res.text(), "first\nsecond");
    }

    #[test]
    fn text_of_response_without_text_blocks_is_empty() {
        let res: MessagesResponse =
            serde_json::from_value(json!({ "content": [{ "type": "image" }] })).unwrap();
        assert_eq!(res.text(), "");
    }

    #[test]
    fn response_without_content_is_rejected() {
        let res = serde_json::from_value::<MessagesResponse>(json!({ "type": "error" }));
        assert!(res.is_err());
    }
}
