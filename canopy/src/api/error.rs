use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("not found")]
    NotFound { message: Option<String> },
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected status {status}")]
    Unexpected { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Error payload convention of the API: `{"message": "..."}`, sometimes
/// `{"error": "..."}`, often both. Either field may hold something other than
/// a string, so neither is allowed to fail the parse.
#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl ErrorPayload {
    fn into_message(self) -> Option<String> {
        self.message
            .and_then(text)
            .or_else(|| self.error.and_then(text))
    }
}

/// Non-blank text of a payload field. A list of strings (validation errors)
/// is joined into one line.
fn text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

impl ApiError {
    /// Classifies a non-success status together with its raw body.
    pub fn from_status(status: u16, body: &[u8]) -> ApiError {
        let message = serde_json::from_slice::<ErrorPayload>(body)
            .ok()
            .and_then(ErrorPayload::into_message);

        match status {
            404 => ApiError::NotFound { message },
            400..=499 => ApiError::Rejected { status, message },
            _ => ApiError::Unexpected { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message }
            | ApiError::Rejected { message, .. }
            | ApiError::Unexpected { message, .. } => message.as_deref(),
            ApiError::Transport(_) | ApiError::Malformed(_) => None,
        }
    }

    /// What a visitor gets to see. Transport and parsing details never leak.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
