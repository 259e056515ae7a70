//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`, the
//! configured `log_filter`, or `info`, in that order.

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_DIRECTIVE: &str = "info";

/// Failures while installing the global subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter {directive:?}: {message}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser detail.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("logging already initialised: {message}")]
    AlreadyInitialised {
        /// Detail from `tracing-subscriber`.
        message: String,
    },
}

/// Picks the directive to use. Blank values count as unset.
#[must_use]
pub fn select_directive<'a>(from_env: Option<&'a str>, configured: Option<&'a str>) -> &'a str {
    [from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
}

/// Parses a directive into a filter.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the directive is malformed.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|error| LoggingError::InvalidFilter {
        directive: directive.to_owned(),
        message: error.to_string(),
    })
}

/// Installs the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] for a malformed directive and
/// [`LoggingError::AlreadyInitialised`] when called twice.
pub fn init(configured: Option<&str>) -> Result<(), LoggingError> {
    let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(select_directive(from_env.as_deref(), configured))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|error| LoggingError::AlreadyInitialised {
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LoggingError, build_filter, select_directive};

    #[rstest]
    #[case::env_wins(Some("warn"), Some("debug"), "warn")]
    #[case::configured_when_env_unset(None, Some("issuebot=debug"), "issuebot=debug")]
    #[case::blank_env_ignored(Some("  "), Some("debug"), "debug")]
    #[case::default_when_nothing_set(None, None, "info")]
    #[case::default_when_all_blank(Some(""), Some(" "), "info")]
    fn selects_directive(
        #[case] from_env: Option<&str>,
        #[case] configured: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(select_directive(from_env, configured), expected);
    }

    #[rstest]
    fn accepts_target_directive() {
        assert!(build_filter("issuebot=debug,octocrab=warn").is_ok());
    }

    #[rstest]
    fn rejects_unknown_level() {
        let result = build_filter("issuebot=loud");
        assert!(
            matches!(result, Err(LoggingError::InvalidFilter { ref directive, .. }) if directive == "issuebot=loud"),
            "expected InvalidFilter, got {result:?}"
        );
    }
}
