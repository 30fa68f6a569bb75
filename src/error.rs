//! Failure taxonomy for the data layer.
//!
//! Every repository call resolves into one of three kinds, so callers can
//! branch on kind instead of matching display strings. The rendered text is
//! what the UI shows verbatim.

use thiserror::Error;

/// Fixed message for unreachable-server failures.
pub const CONNECTION_ERROR: &str = "Error de conexión. Verifica tu internet.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server could not be reached at all (DNS, connect, timeout).
    #[error("{CONNECTION_ERROR}")]
    Transport,

    /// The server answered but refused the operation: either a non-2xx
    /// status (`status = Some(..)`) or an HTTP 200 carrying `ok = false`
    /// (`status = None`).
    #[error("{message}")]
    Rejected {
        status: Option<u16>,
        message: String,
    },

    /// Local validation failed before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Business rejection: transport succeeded, the operation did not.
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: None,
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response. The message is taken from
    /// the body's `error`, `errors` or `detail` key (in that order), else
    /// the raw body, else a generic per-status fallback.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ApiError::Rejected {
                status: Some(status),
                message: format!("Error del servidor ({status})."),
            };
        }

        let message = serde_json::from_str::<serde_json::Value>(trimmed)
            .ok()
            .and_then(|value| {
                ["error", "errors", "detail"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(|m| m.as_str())
                        .map(|m| m.to_string())
                })
            })
            .unwrap_or_else(|| trimmed.to_string());

        ApiError::Rejected {
            status: Some(status),
            message,
        }
    }

    /// The user-facing text for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
