use serde::Deserialize;

use crate::domain::entities::StatRecord;

/// Payload of a successful `utils.getLinkStats` call.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkStatsPayload {
    #[serde(default)]
    pub key: Option<String>,
    pub stats: Vec<StatRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_with_stats() {
        let payload: LinkStatsPayload = serde_json::from_value(json!({
            "key": "abc123",
            "stats": [{ "timestamp": 1, "views": 3 }, { "timestamp": 2, "views": 7 }]
        }))
        .unwrap();

        assert_eq!(payload.key.as_deref(), Some("abc123"));
        assert_eq!(payload.stats.len(), 2);
    }

    #[test]
    fn test_payload_without_stats_is_rejected() {
        let result = serde_json::from_value::<LinkStatsPayload>(json!({ "key": "abc123" }));
        assert!(result.is_err());
    }
}
