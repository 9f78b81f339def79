//! Error Taxonomy
//!
//! Transport, authentication, validation and server rejection failures.
//! None of them are retried.

use serde_json::Value;
use thiserror::Error;

/// Local authentication failures, raised before a request leaves the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no access token stored, log in first")]
    NotLoggedIn,
    #[error("CSRF token cookie `{0}` not found")]
    MissingCsrf(String),
}

/// Failures talking to the lists backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("authentication required (HTTP {0})")]
    Unauthorized(u16),
    #[error("request rejected (HTTP {status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success response
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized(status),
            _ => ApiError::Rejected {
                status,
                detail: detail_from_body(status, body),
            },
        }
    }

    /// 401/403 from the server or a missing local credential
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Auth(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Best-effort human readable reason from an error body.
///
/// Prefers `{"detail": ..}`, then the first field error of a validation map,
/// then the HTTP reason phrase.
pub fn detail_from_body(status: u16, body: &str) -> String {
    let fallback = || {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status))
    };

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match value {
        Value::Object(map) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return detail.clone();
            }
            map.iter()
                .find_map(|(field, v)| first_message(v).map(|msg| format!("{}: {}", field, msg)))
                .unwrap_or_else(fallback)
        }
        other => first_message(&other).unwrap_or_else(fallback),
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}

/// Failures of a list-management action as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list name cannot be empty")]
    EmptyName,
    #[error("invalid movie id `{0}`")]
    InvalidMovieId(String),
    #[error("cancelled")]
    Cancelled,
    #[error("select a list and a movie first")]
    NothingSelected,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ListResult<T> = Result<T, ListError>;

impl ListError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ListError::Api(e) if e.is_auth())
    }
}
