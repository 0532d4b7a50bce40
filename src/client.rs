use std::{str::FromStr, time::Duration};

use bon::Builder;
use tracing::debug;

use crate::{
    error::ClientError,
    paths::{BASE_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS},
};

pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_BASE_URL: &str = "AI_DAILY_BASE_URL";
pub const ENV_MODEL: &str = "AI_DAILY_MODEL";
pub const ENV_MAX_TOKENS: &str = "AI_DAILY_MAX_TOKENS";
pub const ENV_TIMEOUT_SECS: &str = "AI_DAILY_TIMEOUT_SECS";

/// Client for the language-model messages endpoint.
///
/// Credentials are optional: without an API key no auth header is sent and the
/// deployment environment (a proxy, for instance) is expected to add one.
#[derive(Debug, Clone, Builder)]
pub struct NewsClient {
    #[builder(into, default = BASE_API_URL.to_string())]
    pub(crate) base_url: String,
    #[builder(into)]
    pub(crate) api_key: Option<String>,
    #[builder(into, default = DEFAULT_MODEL.to_string())]
    pub(crate) model: String,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub(crate) max_tokens: u32,
    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    pub(crate) timeout: Duration,
    #[builder(default = reqwest::Client::new())]
    pub(crate) http_client: reqwest::Client,
}

impl NewsClient {
    pub fn load_from_env() -> Result<Self, ClientError> {
        let api_key = env_var(ENV_API_KEY);
        let base_url = env_var(ENV_BASE_URL).unwrap_or_else(|| BASE_API_URL.to_string());
        let model = env_var(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens = parse_env(ENV_MAX_TOKENS)?.unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout_secs = parse_env(ENV_TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        debug!(
            base_url = %base_url,
            model = %model,
            max_tokens,
            timeout_secs,
            has_api_key = api_key.is_some(),
            "Loaded client configuration from environment"
        );

        Ok(Self::builder()
            .base_url(base_url)
            .maybe_api_key(api_key)
            .model(model)
            .max_tokens(max_tokens)
            .timeout(Duration::from_secs(timeout_secs))
            .build())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ClientError>
where
    T::Err: std::fmt::Display,
{
    env_var(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| ClientError::Config(format!("{key}={raw}: {e}")))
        })
        .transpose()
}
