//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup (after `dotenvy::dotenv()` in
//! `main.rs`) and passed by value into the client; nothing below reads the
//! environment afterwards.
//!
//! ## Required Variables
//!
//! - `VK_SERVICE_TOKEN` - VK service token, sent as `access_token`
//!
//! ## Optional Variables
//!
//! - `VK_API_BASE_URL` - API root (default: `https://api.vk.com/method/`)
//! - `VK_API_VERSION` - protocol version `v` (default: `5.199`)
//! - `VK_SHORT_DOMAIN` - host of short links (default: `vk.cc`)
//! - `VK_HTTP_TIMEOUT` - request timeout in seconds (default: 30, max: 300)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;
use std::time::Duration;

use crate::domain::entities::Credential;
use crate::error::AppError;

pub const TOKEN_VAR: &str = "VK_SERVICE_TOKEN";

pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method/";
pub const DEFAULT_API_VERSION: &str = "5.199";
pub const DEFAULT_SHORT_DOMAIN: &str = "vk.cc";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `VK_SERVICE_TOKEN` is unset or blank.
    pub credential: Option<Credential>,
    pub api_base_url: String,
    pub api_version: String,
    pub short_domain: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

/// Settings the application services need on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_version: String,
    pub short_domain: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            short_domain: DEFAULT_SHORT_DOMAIN.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            short_domain: DEFAULT_SHORT_DOMAIN.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A missing token is not an error here; see [`Config::credential`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if `VK_HTTP_TIMEOUT` is not a number.
    pub fn from_env() -> Result<Self, AppError> {
        let credential = env::var(TOKEN_VAR).ok().and_then(Credential::new);

        let api_base_url =
            env::var("VK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_version =
            env::var("VK_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let short_domain =
            env::var("VK_SHORT_DOMAIN").unwrap_or_else(|_| DEFAULT_SHORT_DOMAIN.to_string());

        let request_timeout_secs = match env::var("VK_HTTP_TIMEOUT") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                AppError::configuration(format!(
                    "VK_HTTP_TIMEOUT must be a number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            credential,
            api_base_url,
            api_version,
            short_domain: short_domain.to_ascii_lowercase(),
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if:
    /// - `api_base_url` is not an http(s) URL
    /// - `api_version` or `short_domain` is empty
    /// - `request_timeout_secs` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<(), AppError> {
        match url::Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(AppError::configuration(format!(
                    "VK_API_BASE_URL must be an http(s) URL, got '{}'",
                    self.api_base_url
                )));
            }
        }

        if self.api_version.trim().is_empty() {
            return Err(AppError::configuration("VK_API_VERSION must not be empty"));
        }

        if self.short_domain.trim().is_empty() {
            return Err(AppError::configuration("VK_SHORT_DOMAIN must not be empty"));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AppError::configuration(format!(
                "VK_HTTP_TIMEOUT must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.request_timeout_secs
            )));
        }

        if self.log_format != "text" && self.log_format != "json" {
            return Err(AppError::configuration(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Returns the token or the configuration error shown to the user.
    pub fn credential(&self) -> Result<&Credential, AppError> {
        self.credential
            .as_ref()
            .ok_or_else(|| AppError::configuration(format!("{TOKEN_VAR} is not set")))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            api_version: self.api_version.clone(),
            short_domain: self.short_domain.clone(),
        }
    }

    /// Logs a configuration summary (token masked).
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!(
            "  Token: {}",
            self.credential
                .as_ref()
                .map(Credential::masked)
                .unwrap_or_else(|| "<unset>".to_string())
        );
        tracing::debug!("  API: {} (v{})", self.api_base_url, self.api_version);
        tracing::debug!("  Short domain: {}", self.short_domain);
        tracing::debug!("  Timeout: {}s", self.request_timeout_secs);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] if an optional variable is malformed.
/// A missing token is reported later by [`Config::credential`].
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config, AppError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
