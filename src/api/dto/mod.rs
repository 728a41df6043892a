//! Wire types for VK API responses.

pub mod envelope;
pub mod link_stats;

pub use envelope::{ApiErrorBody, into_result, is_success};
pub use link_stats::LinkStatsPayload;
