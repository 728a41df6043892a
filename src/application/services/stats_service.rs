//! Click statistics for vk.cc short links.

use std::sync::Arc;

use crate::api::dto::{LinkStatsPayload, into_result};
use crate::config::ApiSettings;
use crate::domain::entities::{ClickStats, Credential, LinkKey, StatRecord};
use crate::domain::transport::{ApiMethod, ApiRequest, VkTransport};
use crate::error::AppError;
use crate::utils::extract_key::extract_key;
use serde_json::Value;

/// Interval sent with every stats request.
pub const STATS_INTERVAL: &str = "forever";

/// Service for reading `utils.getLinkStats`.
pub struct StatsService<T: VkTransport> {
    transport: Arc<T>,
    settings: ApiSettings,
}

impl<T: VkTransport> StatsService<T> {
    /// Creates a new statistics service.
    pub fn new(transport: Arc<T>, settings: ApiSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Returns the all-time stat records for a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Parse`] if `short_link` is not a valid URL or the
    /// payload lacks `stats`.
    /// Returns [`AppError::RemoteApi`] if VK answers with an error envelope.
    /// Returns [`AppError::Transport`] on network or HTTP status failures.
    pub async fn get_stats(
        &self,
        credential: &Credential,
        short_link: &str,
    ) -> Result<Vec<StatRecord>, AppError> {
        let key = extract_key(short_link)?;
        let envelope = self.fetch(credential, &key).await?;
        let payload: LinkStatsPayload = into_result(envelope)?;
        Ok(payload.stats)
    }

    /// Sums views over all records for a short link; 0 when VK returns none.
    ///
    /// # Errors
    ///
    /// See [`Self::get_stats`].
    pub async fn count_clicks(&self, credential: &Credential, link: &str) -> Result<u64, AppError> {
        let records = self.get_stats(credential, link).await?;
        let stats = ClickStats::from_records(&records);

        tracing::debug!(
            total = stats.total,
            periods = stats.periods,
            "Counted clicks"
        );

        Ok(stats.total)
    }

    /// Sends the raw stats request and returns the undecoded envelope.
    ///
    /// Shared with [`crate::application::services::LinkService`], which uses
    /// the same request to check whether a link exists.
    pub(crate) async fn fetch(
        &self,
        credential: &Credential,
        key: &LinkKey,
    ) -> Result<Value, AppError> {
        tracing::debug!(key = %key, "Fetching link stats");

        let request = ApiRequest::new(
            ApiMethod::GetLinkStats,
            credential,
            &self.settings.api_version,
        )
        .with_param("key", key.as_str())
        .with_param("interval", STATS_INTERVAL);

        self.transport.execute(request).await
    }
}
