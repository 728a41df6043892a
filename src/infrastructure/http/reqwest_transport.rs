//! HTTPS transport for the VK API built on reqwest.

use std::time::Duration;

use crate::config::Config;
use crate::domain::transport::{ApiRequest, VkTransport};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Sends every request as `GET {base_url}{method}?{params}`.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport for `base_url` (a trailing `/` is added if missing).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base).map_err(|e| {
            AppError::configuration(format!("invalid API base URL '{base_url}': {e}"))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vk-link/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url, AppError> {
        Ok(self.base_url.join(request.method.name())?)
    }
}

#[async_trait]
impl VkTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, AppError> {
        let endpoint = self.endpoint(&request)?;
        tracing::debug!(method = request.method.name(), "Calling VK API");

        let response = self
            .client
            .get(endpoint)
            .query(&request.params)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, bytes = body.len(), "VK API responded");

        Ok(serde_json::from_str(&body)?)
    }
}
