use reqwest::{header, Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    client::NewsClient,
    error::{ClientError, ResponseError},
    paths::{ANTHROPIC_VERSION, ANTHROPIC_VERSION_HEADER, API_KEY_HEADER},
};

pub struct HttpRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: None,
        }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

// Extension trait to add HTTP methods to NewsClient
#[async_trait::async_trait]
pub trait HttpClient {
    async fn request<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ClientError>;
}

#[async_trait::async_trait]
impl HttpClient for NewsClient {
    async fn request<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ClientError> {
        let res = self.execute_request(req).await?;
        Ok(res.json::<T>().await?)
    }
}

impl NewsClient {
    pub(crate) fn build_url(&self, path: &str) -> Result<Url, ClientError> {
        Url::parse(&self.base_url)
            .map_err(|e| ResponseError::invalid(format!("Invalid base URL '{}': {e}", self.base_url)))?
            .join(path)
            .map_err(|e| ResponseError::invalid(format!("Invalid path '{path}': {e}")).into())
    }

    /// Sends the request once. There is no retry: a failed attempt is final.
    #[instrument(skip(self, req), fields(method = %req.method, path = %req.path))]
    async fn execute_request(&self, req: HttpRequest) -> Result<Response, ClientError> {
        let url = self.build_url(&req.path)?;
        debug!("Built request URL: {}", url);

        let mut request_builder = self
            .http_client
            .request(req.method, url)
            .timeout(self.timeout)
            .header(ANTHROPIC_VERSION_HEADER, ANTHROPIC_VERSION);

        if let Some(api_key) = &self.api_key {
            request_builder = request_builder.header(API_KEY_HEADER, api_key);
        }

        if let Some(body) = &req.body {
            debug!("Adding JSON body to request");
            request_builder = request_builder
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())
                .json(body);
        }

        debug!("Sending HTTP request");
        let res = request_builder.send().await.map_err(|e| {
            warn!("Network error occurred: {}", e);
            ClientError::RequestError(e)
        })?;

        let status = res.status();
        if !status.is_success() {
            error!(
                "Received HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            let body_text = res.text().await.unwrap_or_default();
            return Err(ResponseError::http_status(status, body_text).into());
        }

        info!("HTTP request completed with status: {}", status);

        Ok(res)
    }
}
