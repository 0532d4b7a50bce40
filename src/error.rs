use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Response format error: {0}")]
    ResponseError(#[from] ResponseError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Invalid response: {0}")]
    Invalid(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
}

impl ResponseError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}

/// Everything that can make a fetch fall back to demo data.
///
/// Never returned to callers of [`crate::ingest::ingest`]; it only exists so the
/// failure can be logged with its cause.
#[derive(Debug, Error)]
pub enum IngestionFailure {
    #[error("request failed: {0}")]
    Request(#[from] ClientError),

    #[error("model output is not a JSON array of news items: {0}")]
    Malformed(#[from] serde_json::Error),
}
