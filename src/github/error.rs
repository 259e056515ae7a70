//! Error types exposed by the GitHub lookup layer.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while looking up an issue on GitHub.
///
/// None of these ever reach the chat audience: the dispatcher logs them and
/// drops the reference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The configured API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// GitHub rejected the token (401 or 403).
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub answered with a non-2xx status, or the request never
    /// completed (DNS, connection refused, TLS failure, timeout).
    #[error("{}", transport_message(*status, message))]
    Transport {
        /// HTTP status when GitHub answered; `None` for network failures.
        status: Option<StatusCode>,
        /// Detail from the response body or the transport error.
        message: String,
    },

    /// GitHub answered 2xx but the body lacked a required field or carried
    /// one with the wrong shape.
    #[error("GitHub returned an unexpected issue payload: {message}")]
    Protocol {
        /// Decoder detail naming the offending field.
        message: String,
    },
}

impl LookupError {
    /// HTTP status carried by the failure, if GitHub answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn transport_message(status: Option<StatusCode>, message: &str) -> String {
    match status {
        Some(code) => format!("GitHub returned status {code}: {message}"),
        None => format!("network error talking to GitHub: {message}"),
    }
}
