//! Bearer credential for the VK API.

use std::fmt;

/// Service token sent as `access_token` with every request.
///
/// Constructed once at startup and passed explicitly into each client
/// operation. `Debug` and [`Credential::masked`] never reveal the full value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token. Returns `None` for empty or whitespace-only input.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Raw token for the request query string.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First four characters followed by `***`.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}***")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}
