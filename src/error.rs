//! Error taxonomy shared by the client and the CLI driver.
//!
//! Every client operation returns `Result<_, AppError>`; the driver matches on
//! the variant and renders a single diagnostic line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed configuration (e.g. `VK_SERVICE_TOKEN` unset).
    #[error("{0}")]
    Configuration(String),

    /// Network failure, timeout or non-2xx HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The VK API answered with an `error` envelope.
    #[error("{message}")]
    RemoteApi { code: Option<i64>, message: String },

    /// Malformed URL, non-JSON body or a missing response field.
    #[error("parse error: {0}")]
    Parse(String),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn remote(code: Option<i64>, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            code,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Short machine-readable tag used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration_error",
            AppError::Transport(_) => "transport_error",
            AppError::RemoteApi { .. } => "remote_api_error",
            AppError::Parse(_) => "parse_error",
        }
    }
}

/// Renders an error followed by its `source()` chain, joined with `: `.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }

    message
}

/// Maps reqwest failures: body decoding problems are parse errors, everything
/// else (connect, timeout, status) is transport. The request URL is dropped
/// because its query string carries the access token.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        let message = error_chain(&e);
        if e.is_decode() {
            AppError::parse(message)
        } else {
            AppError::transport(message)
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::parse(format!("invalid URL: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::parse(e.to_string())
    }
}
