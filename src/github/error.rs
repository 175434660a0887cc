//! Network error type shared by the search and raw-content clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to GitHub.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never produced a response (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status that cannot be used.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Transport {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: StatusCode) -> Self {
        FetchError::Status {
            url: url.into(),
            status,
        }
    }

    /// Whether trying the same request again could succeed.
    ///
    /// Timeouts, connection failures, interrupted bodies, 429 and 5xx are
    /// transient; everything else, including decode failures, is permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => {
                source.is_timeout()
                    || source.is_connect()
                    || source.is_request()
                    || source.is_body()
            }
            FetchError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            FetchError::Decode { .. } => false,
        }
    }
}
