//! Short link recognition and key extraction.

use crate::domain::entities::LinkKey;
use crate::error::AppError;
use url::Url;

/// Extracts the stats key from a short link.
///
/// The key is the URL path with every leading `/` removed; query and
/// fragment are ignored.
///
/// # Errors
///
/// Returns [`AppError::Parse`] if `link` is not an absolute URL.
///
/// # Examples
///
/// ```ignore
/// let key = extract_key("https://vk.cc/abc123").unwrap();
/// assert_eq!(key.as_str(), "abc123");
/// ```
pub fn extract_key(link: &str) -> Result<LinkKey, AppError> {
    let url = Url::parse(link)?;
    Ok(LinkKey::new(url.path().trim_start_matches('/')))
}

/// Returns true if `link` is served from `short_domain`.
///
/// Only the host is compared: userinfo and the default port are ignored,
/// an explicit non-default port makes the host different, and an unparsable
/// link has no host and is never a short link.
pub fn is_short_domain(link: &str, short_domain: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };

    url.port().is_none()
        && url
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(short_domain))
}
