//! Error mapping helpers for the Octocrab issue gateway.

use http::StatusCode;

use crate::github::error::LookupError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> LookupError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    LookupError::Transport {
        status: None,
        message: format!("{operation} failed: {error}"),
    }
}

/// Pulls GitHub's `message` field out of an error body, if it has one.
pub(super) fn github_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Classifies a non-2xx response. Only 401/403 are singled out; every other
/// status, 404 included, is reported uniformly as a transport failure.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> LookupError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        LookupError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        LookupError::Transport {
            status: Some(status),
            message: format!("{operation} failed: {message}"),
        }
    }
}
