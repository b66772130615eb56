//! API Errors
//!
//! Every failure that leaves the gateway is one of these kinds, and each one
//! displays as a single human-readable message.

use serde_json::Value;
use thiserror::Error;

/// Last-resort message when nothing better can be extracted
pub const GENERIC_ERROR: &str = "An error occurred";

/// JSON fields checked for a message before falling back to field errors
const MESSAGE_FIELDS: &[&str] = &["message", "error", "detail"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the backend
    #[error("{0}")]
    AuthenticationExpired(String),
    /// 404 from the backend
    #[error("{0}")]
    NotFound(String),
    /// Any other non-2xx response
    #[error("{message}")]
    Server { status: u16, message: String },
    /// No response at all
    #[error("{0}")]
    Transport(String),
    /// Request body could not be encoded or the response body decoded
    #[error("{0}")]
    Payload(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = error_message(Some(status), body, None);
        match status {
            401 => ApiError::AuthenticationExpired(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    pub fn transport(cause: &str) -> Self {
        ApiError::Transport(error_message(None, "", Some(cause)))
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthenticationExpired(_))
    }
}

/// Reduce a failure to one display string.
///
/// Order: structured error field, raw body, transport/status text, generic fallback.
pub fn error_message(status: Option<u16>, body: &str, transport: Option<&str>) -> String {
    if let Some(message) = structured_message(body) {
        return message;
    }
    if let Some(raw) = non_blank(body) {
        return raw;
    }
    if let Some(cause) = transport.and_then(non_blank) {
        return cause;
    }
    if let Some(status) = status {
        return format!("Request failed with status code {}", status);
    }
    GENERIC_ERROR.to_string()
}

fn structured_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body).ok()? {
        Value::String(s) => non_blank(&s),
        Value::Object(map) => MESSAGE_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str).and_then(non_blank))
            .or_else(|| map.get("errors").and_then(first_field_error))
            .or_else(|| map.get("title").and_then(Value::as_str).and_then(non_blank)),
        _ => None,
    }
}

/// First message of an ASP.NET-style `{"errors": {"Field": ["msg"]}}` map
fn first_field_error(errors: &Value) -> Option<String> {
    errors
        .as_object()?
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .find_map(|v| v.as_str().and_then(non_blank))
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
