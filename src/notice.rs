//! Transient user-facing notices.

use serde::Serialize;

use crate::error::{AppError, BackendError};

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_AUTO_DISMISS_MS: u64 = 5000;

/// Shown when the analysis service cannot be reached.
pub const CONNECTION_FAILED: &str = "Failed to connect to the analysis service. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Error,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotice {
    pub kind: NoticeKind,
    pub message: String,
    pub auto_dismiss_ms: u64,
}

impl UserNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            auto_dismiss_ms: NOTICE_AUTO_DISMISS_MS,
        }
    }

    /// Banner announcing which demo scenario is running.
    pub fn demo(category: &str, expected_risk: u8) -> Self {
        Self {
            kind: NoticeKind::Demo,
            message: format!("Demo: {} (Expected Risk: {}%)", category, expected_risk),
            auto_dismiss_ms: NOTICE_AUTO_DISMISS_MS,
        }
    }

    /// Error notice for a failed analysis attempt.
    ///
    /// Service-side rejections show the service's own message; transport
    /// failures collapse into a single "try again" line.
    pub fn from_error(err: &AppError) -> Self {
        let message = match err {
            AppError::Input(input) => input.to_string(),
            AppError::Backend(BackendError::Api { message, .. }) => message.clone(),
            AppError::Backend(_) => CONNECTION_FAILED.to_string(),
            other => other.to_string(),
        };
        Self::error(message)
    }
}
