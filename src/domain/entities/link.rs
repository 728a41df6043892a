//! Link identifiers and the shortening payload.

use serde::Deserialize;
use std::fmt;

/// Path segment identifying a short link in stats queries.
///
/// For `https://vk.cc/abc123` the key is `abc123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkKey(String);

impl LinkKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a successful `utils.getShortLink` call.
///
/// Only `short_url` is required; the other fields are kept when VK sends them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenedLink {
    pub short_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
}
