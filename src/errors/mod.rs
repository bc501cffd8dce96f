//! Error handling module for the catalog admin engine.
//!
//! Provides a single error type shared by drafts, attachments and the collection synchronizer.
//! Every variant is recoverable: callers store it in an error slot and keep going.

use serde::Deserialize;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const ATTACHMENT_TOO_LARGE: &str = "ATTACHMENT_TOO_LARGE";
    pub const ALREADY_IN_FLIGHT: &str = "ALREADY_IN_FLIGHT";
    pub const REMOTE_FAILURE: &str = "REMOTE_FAILURE";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Draft failed validation; no request was sent
    Validation(String),
    /// Staged binary exceeds the size ceiling
    AttachmentTooLarge { size: usize, limit: usize },
    /// Another create/update/delete is still outstanding
    AlreadyInFlight,
    /// Non-2xx response or transport failure
    Remote {
        status: Option<u16>,
        message: String,
    },
    /// Local file access failed
    Io(String),
    /// Background task failed
    Internal(String),
}

impl AppError {
    /// Build a remote failure from a response body, falling back to `fallback`
    /// when the body carries no usable message.
    pub fn remote(status: Option<u16>, body: &str, fallback: impl Into<String>) -> Self {
        let message = remote_message(body).unwrap_or_else(|| fallback.into());
        AppError::Remote { status, message }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::AttachmentTooLarge { .. } => codes::ATTACHMENT_TOO_LARGE,
            AppError::AlreadyInFlight => codes::ALREADY_IN_FLIGHT,
            AppError::Remote { .. } => codes::REMOTE_FAILURE,
            AppError::Io(_) => codes::IO_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the human-readable message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::AttachmentTooLarge { limit, .. } => {
                format!("Image size should be less than {}MB", limit / (1024 * 1024))
            }
            AppError::AlreadyInFlight => "Another save is already in progress".to_string(),
            AppError::Remote { message, .. } => message.clone(),
            AppError::Io(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// HTTP status of a remote failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        AppError::Remote {
            status: err.status().map(|s| s.as_u16()),
            message: format!("Transport error: {}", err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        AppError::Io(format!("IO error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Task error: {:?}", err);
        AppError::Internal(format!("Task error: {}", err))
    }
}

/// Error body shapes the remote API is known to send.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteErrorBody {
    Message { message: String },
    Envelope { error: ErrorDetails },
    Plain { error: String },
}

/// Nested error details, as sent inside an `error` envelope.
#[derive(Debug, Deserialize)]
struct ErrorDetails {
    message: String,
}

/// Extract a non-blank message from a structured error body.
fn remote_message(body: &str) -> Option<String> {
    let message = match serde_json::from_str::<RemoteErrorBody>(body).ok()? {
        RemoteErrorBody::Message { message } => message,
        RemoteErrorBody::Envelope { error } => error.message,
        RemoteErrorBody::Plain { error } => error,
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
