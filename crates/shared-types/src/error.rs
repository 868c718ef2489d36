use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-facing application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    Unauthorized,
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared between the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Parse an AppError out of a raw backend error body.
    ///
    /// Accepts either the serialized `AppError` itself or a body with the
    /// JSON object embedded in surrounding text.
    pub fn from_error_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract a user-displayable message from a raw backend error body,
    /// falling back to a generic string when the body is unparseable.
    pub fn friendly_message(body: &str) -> String {
        match Self::from_error_body(body) {
            Some(err) => err.message,
            None => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
