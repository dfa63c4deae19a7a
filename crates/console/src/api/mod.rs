//! HTTP gateway to the reservation backend.
//!
//! [`ApiClient`] wraps every backend call: it attaches the bearer token when
//! a session holds one, and it normalizes the backend's error bodies into a
//! single human-readable message. The backend reports errors in three
//! shapes - a `detail` string, a `detail` list of `{loc, msg}` validation
//! entries, or a bare array of such entries - and the gateway flattens all
//! three.

mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Flattened error message from the response body.
        message: String,
    },

    /// 401/403: the session is no longer accepted. The caller must clear
    /// the session store and return to the unauthenticated view.
    #[error("Сессия истекла. Пожалуйста, войдите снова.")]
    AuthRequired,

    /// A success response carried a body that is not valid JSON.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the error demands re-authentication.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

/// Flatten a backend error body into one message.
///
/// Handles the three shapes the backend produces; anything else falls back
/// to the raw body text (or the status line when the body is empty).
pub(crate) fn flatten_error_body(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP {status}");
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    match &value {
        serde_json::Value::Object(object) => match object.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(serde_json::Value::Array(entries)) => flatten_validation_entries(entries),
            _ => body.to_string(),
        },
        serde_json::Value::Array(entries) => flatten_validation_entries(entries),
        _ => body.to_string(),
    }
}

/// Flatten `{loc, msg}` validation entries to `"loc.path: msg"` pairs
/// joined with `"; "`.
fn flatten_validation_entries(entries: &[serde_json::Value]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|entry| {
            let msg = entry
                .get("msg")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("validation error");

            let loc = entry
                .get("loc")
                .and_then(serde_json::Value::as_array)
                .map(|segments| {
                    segments
                        .iter()
                        .map(|segment| match segment {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(".")
                })
                .unwrap_or_default();

            if loc.is_empty() {
                msg.to_string()
            } else {
                format!("{loc}: {msg}")
            }
        })
        .collect();

    parts.join("; ")
}
