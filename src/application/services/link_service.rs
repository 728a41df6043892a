//! Link shortening and short link classification.

use std::sync::Arc;

use crate::api::dto::{LinkStatsPayload, into_result, is_success};
use crate::application::services::StatsService;
use crate::config::ApiSettings;
use crate::domain::entities::{ClickStats, Credential, ShortenedLink};
use crate::domain::transport::{ApiMethod, ApiRequest, VkTransport};
use crate::error::AppError;
use crate::utils::extract_key::{extract_key, is_short_domain};

/// Result of [`LinkService::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The input was a known short link.
    Clicks(ClickStats),
    /// The input was shortened; carries the new short URL.
    Shortened(String),
}

/// Service for shortening links and recognising existing short links.
pub struct LinkService<T: VkTransport> {
    transport: Arc<T>,
    stats: StatsService<T>,
    settings: ApiSettings,
}

impl<T: VkTransport> LinkService<T> {
    /// Creates a new link service; the stats service shares the transport.
    pub fn new(transport: Arc<T>, settings: ApiSettings) -> Self {
        Self {
            stats: StatsService::new(Arc::clone(&transport), settings.clone()),
            transport,
            settings,
        }
    }

    pub fn stats(&self) -> &StatsService<T> {
        &self.stats
    }

    /// Shortens `url` and returns the short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteApi`] with VK's `error_msg` on an error envelope.
    /// Returns [`AppError::Transport`] on network or HTTP status failures.
    /// Returns [`AppError::Parse`] if the payload lacks `short_url`.
    pub async fn shorten(&self, credential: &Credential, url: &str) -> Result<String, AppError> {
        Ok(self.shorten_link(credential, url).await?.short_url)
    }

    /// Like [`Self::shorten`] but returns the whole payload.
    pub async fn shorten_link(
        &self,
        credential: &Credential,
        url: &str,
    ) -> Result<ShortenedLink, AppError> {
        let request = ApiRequest::new(
            ApiMethod::GetShortLink,
            credential,
            &self.settings.api_version,
        )
        .with_param("url", url);

        let envelope = self.transport.execute(request).await?;
        let link: ShortenedLink = into_result(envelope)?;

        tracing::debug!(short_url = %link.short_url, "Link shortened");
        Ok(link)
    }

    /// Returns true if `url` is a short link VK knows about.
    ///
    /// URLs on other hosts return `false` without a remote call. For the short
    /// domain, a stats request is sent and the link counts as short when the
    /// envelope has `response` and no `error`.
    ///
    /// # Errors
    ///
    /// Transport failures propagate; they are not treated as "not short".
    pub async fn is_short_link(&self, credential: &Credential, url: &str) -> Result<bool, AppError> {
        if !is_short_domain(url, &self.settings.short_domain) {
            return Ok(false);
        }

        let key = extract_key(url)?;
        let envelope = self.stats.fetch(credential, &key).await?;
        Ok(is_success(&envelope))
    }

    /// Counts clicks for a short link or shortens a long one.
    ///
    /// The existence check and the stats lookup are the same request, so a
    /// known short link costs one remote call. A short-domain URL unknown to
    /// VK is shortened like any other link.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`] and [`StatsService::get_stats`].
    pub async fn classify(
        &self,
        credential: &Credential,
        url: &str,
    ) -> Result<LinkOutcome, AppError> {
        if is_short_domain(url, &self.settings.short_domain) {
            let key = extract_key(url)?;
            let envelope = self.stats.fetch(credential, &key).await?;

            if is_success(&envelope) {
                let payload: LinkStatsPayload = into_result(envelope)?;
                return Ok(LinkOutcome::Clicks(ClickStats::from_records(
                    &payload.stats,
                )));
            }

            tracing::debug!(key = %key, "Not a known short link, shortening instead");
        }

        let short_url = self.shorten(credential, url).await?;
        Ok(LinkOutcome::Shortened(short_url))
    }
}
