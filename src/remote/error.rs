use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single round trip to the remote task service.
///
/// Every variant is a network error from the board's point of view: the
/// caller reports it and leaves local state as it was.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport failure (connect, timeout, reset)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Body could not be encoded or decoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl GatewayError {
    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            GatewayError::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
