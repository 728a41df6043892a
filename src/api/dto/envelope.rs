//! VK response envelope: `{"response": ...}` or `{"error": {...}}`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Body of the `error` object.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_msg: Option<String>,
}

impl From<ApiErrorBody> for AppError {
    fn from(body: ApiErrorBody) -> Self {
        AppError::remote(
            body.error_code,
            body.error_msg
                .unwrap_or_else(|| "unknown VK API error".to_string()),
        )
    }
}

/// Returns true when the envelope has `response` and no `error`.
pub fn is_success(envelope: &Value) -> bool {
    envelope.get("response").is_some() && envelope.get("error").is_none()
}

/// Unwraps the envelope into the typed `response` payload.
///
/// # Errors
///
/// Returns [`AppError::RemoteApi`] when an `error` object is present.
/// Returns [`AppError::Parse`] when `response` is missing or does not match `T`.
pub fn into_result<T: DeserializeOwned>(mut envelope: Value) -> Result<T, AppError> {
    if let Some(error) = envelope.get_mut("error").map(Value::take) {
        let body: ApiErrorBody = serde_json::from_value(error).unwrap_or(ApiErrorBody {
            error_code: None,
            error_msg: None,
        });
        return Err(body.into());
    }

    let response = envelope
        .get_mut("response")
        .map(Value::take)
        .ok_or_else(|| AppError::parse("missing `response` field"))?;

    Ok(serde_json::from_value(response)?)
}
