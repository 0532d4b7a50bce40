use chrono::Local;
use tracing::instrument;

use crate::{
    client::NewsClient,
    error::ClientError,
    http::{HttpClient, HttpRequest},
    ingest::ingest,
    models::{Message, MessagesRequest, MessagesResponse, Tool, UpdateResult},
    paths::{MESSAGES_PATH, WEB_SEARCH_TOOL_NAME, WEB_SEARCH_TOOL_TYPE},
};

pub const NEWS_PROMPT: &str = r#"Search the web for the latest AI advancements, tool releases, and major updates from the past 24 hours. Focus on:
- New AI model releases or updates
- AI tool enhancements and new features
- Breakthrough research or papers
- Industry news from companies like OpenAI, Anthropic, Google, Meta, etc.

Format your response as a JSON array with this structure:
[
  {
    "title": "Brief headline",
    "summary": "2-3 sentence summary",
    "source": "Source name",
    "category": "Models/Tools/Research/Industry",
    "date": "Today's date"
  }
]

Return ONLY the JSON array, no other text."#;

impl NewsClient {
    pub fn news_request(&self) -> MessagesRequest {
        MessagesRequest::builder()
            .model(self.model.clone())
            .max_tokens(self.max_tokens)
            .messages(vec![Message::user(NEWS_PROMPT)])
            .tools(vec![Tool {
                kind: WEB_SEARCH_TOOL_TYPE.to_string(),
                name: WEB_SEARCH_TOOL_NAME.to_string(),
            }])
            .build()
    }

    /// Asks the model to web-search for the last day's AI news.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn latest_ai_news(&self) -> Result<MessagesResponse, ClientError> {
        let req = HttpRequest::post(MESSAGES_PATH).json(&self.news_request())?;
        self.request::<MessagesResponse>(req).await
    }

    /// One attempt at live news; demo items on any failure.
    pub async fn fetch_updates(&self) -> UpdateResult {
        ingest(self.latest_ai_news().await, Local::now())
    }
}
