use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown after a form submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Server-supplied message when there is a non-blank one, `fallback` otherwise.
    pub fn failure(message: Option<&str>, fallback: &str) -> Self {
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback);
        Self::error(message)
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LOGIN_FAILED;

    #[test]
    fn failure_prefers_server_message() {
        let notice = Notice::failure(Some("Invalid email or password"), LOGIN_FAILED);
        assert_eq!(notice, Notice::error("Invalid email or password"));
    }

    #[test]
    fn failure_falls_back_on_blank_message() {
        assert_eq!(Notice::failure(None, LOGIN_FAILED).message, LOGIN_FAILED);
        assert_eq!(Notice::failure(Some(" "), LOGIN_FAILED).message, LOGIN_FAILED);
    }
}
