//! Click statistics for a short link.

use serde::Deserialize;

/// One period bucket from `utils.getLinkStats`.
///
/// VK also sends demographic breakdowns (`sex_age`, `countries`, `cities`);
/// those are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub views: u64,
}

/// Aggregated view count across all returned buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickStats {
    pub total: u64,
    pub periods: usize,
}

impl ClickStats {
    /// Sums `views` over `records`. An empty slice yields a total of 0.
    pub fn from_records(records: &[StatRecord]) -> Self {
        Self {
            total: records.iter().map(|r| r.views).sum(),
            periods: records.len(),
        }
    }
}
