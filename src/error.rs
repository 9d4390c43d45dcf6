//! Custom error types for emojikit with improved type safety and error handling.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for emojikit operations.
#[derive(Error, Debug)]
pub enum EmojikitError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Network/API errors
    #[error("Upstream request failed: {0}")]
    UpstreamError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Rasterizing errors
    #[error("Failed to render {path}: {message}")]
    RenderError { path: String, message: String },

    // Filesystem errors
    #[error("File operation failed: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using EmojikitError
pub type Result<T> = std::result::Result<T, EmojikitError>;

impl EmojikitError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a missing configuration error
    pub fn missing_config(msg: impl Into<String>) -> Self {
        Self::MissingConfig(msg.into())
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for EmojikitError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                if source.message.contains("rate limit") {
                    Self::RateLimitExceeded
                } else if source.status_code == StatusCode::UNAUTHORIZED
                    || source.status_code == StatusCode::FORBIDDEN
                {
                    Self::AuthenticationError(err.to_string())
                } else {
                    Self::UpstreamError(format!("GitHub API error: {}", err))
                }
            }
            _ => Self::UpstreamError(format!("GitHub API error: {}", err)),
        }
    }
}
