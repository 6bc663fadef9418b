//! Error types for talking to the LyricLab API.

use thiserror::Error;

/// Errors from API calls and studio actions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the session (HTTP 401).
    #[error("not signed in: {message} (run `lyriclab login` to sign in again)")]
    Unauthorized { message: String },

    /// The requested song does not exist or belongs to someone else.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-success response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The action needs lyrics and there are none.
    #[error("no lyrics to {action}")]
    EmptyLyrics { action: &'static str },

    /// A custom edit was requested without instructions.
    #[error("edit instructions must not be empty")]
    EmptyPrompt,

    /// The local session file could not be read or written.
    #[error("session error: {0}")]
    Session(String),

    /// An error propagated from the core model.
    #[error(transparent)]
    Core(#[from] lyriclab_core::Error),
}

impl ApiError {
    /// Returns `true` when the user has to log in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns `true` when the error indicates the entity was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for failed preconditions, which never reach the
    /// server.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyLyrics { .. } | Self::EmptyPrompt)
    }

    /// Returns `true` when repeating the call later might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Convenience alias for API results.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
