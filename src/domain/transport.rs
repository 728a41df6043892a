//! Transport trait for calls to the VK API.

use std::fmt;

use crate::domain::entities::Credential;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// VK API methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    GetShortLink,
    GetLinkStats,
}

impl ApiMethod {
    /// Method name as it appears in the endpoint path.
    pub fn name(self) -> &'static str {
        match self {
            ApiMethod::GetShortLink => "utils.getShortLink",
            ApiMethod::GetLinkStats => "utils.getLinkStats",
        }
    }
}

/// A single GET request: method plus query parameters.
///
/// Built through [`ApiRequest::new`], which always attaches `access_token`
/// and the protocol version `v`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: ApiMethod, credential: &Credential, version: &str) -> Self {
        Self {
            method,
            params: vec![
                ("access_token".to_string(), credential.expose().to_string()),
                ("v".to_string(), version.to_string()),
            ],
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// Looks up a query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| {
                if k == "access_token" {
                    (k.as_str(), "***")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        f.debug_struct("ApiRequest")
            .field("method", &self.method.name())
            .field("params", &params)
            .finish()
    }
}

/// Sends requests to the VK API and returns the decoded JSON envelope.
///
/// Implementations fail with [`AppError::Transport`] for network errors and
/// non-2xx statuses, and with [`AppError::Parse`] when the body is not JSON.
/// Interpreting the `response` / `error` envelope is left to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - HTTPS via reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VkTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, AppError>;
}
