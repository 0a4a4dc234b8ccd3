//! Error types for speech synthesis.

use thiserror::Error;

/// Primary error type for all synthesis operations.
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("{var} not found in environment.")]
    MissingCredential { var: String },

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification of a [`SynthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No API key was available; nothing was sent.
    MissingCredential,
    /// The request, the response, or writing the audio failed.
    RequestFailed,
    /// Local setup problem (e.g. an unreadable env file).
    Configuration,
}

impl SynthError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Api { .. }
            | Self::Network(_)
            | Self::Io(_)
            | Self::InvalidArgument(_) => ErrorKind::RequestFailed,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body text carried by the error, if non-empty.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SynthError>;
