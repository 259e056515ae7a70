//! Errors raised while loading or validating configuration.

use thiserror::Error;

/// Configuration problems. All of them are fatal at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Layered loading (CLI, environment, files) failed.
    #[error("configuration could not be loaded: {message}")]
    Load {
        /// Details from the configuration loader.
        message: String,
    },

    /// No IRC server host was configured.
    #[error("IRC host is required (use --irc-host or ISSUEBOT_IRC_HOST)")]
    MissingHost,

    /// No GitHub token was configured.
    #[error("GitHub token is required (use --github-token, ISSUEBOT_GITHUB_TOKEN, or GITHUB_TOKEN)")]
    MissingToken,

    /// A project seed was not `owner/repo`.
    #[error("project {entry:?} must be in the form owner/repo")]
    InvalidProject {
        /// The offending entry.
        entry: String,
    },

    /// The default repository was blank or a malformed `owner/repo`.
    #[error("default repository {value:?} must be a repository name or owner/repo")]
    InvalidDefaultRepository {
        /// The offending value.
        value: String,
    },

    /// The default owner was blank or contained a `/`.
    #[error("default owner {value:?} must be a non-empty name without '/'")]
    InvalidDefaultOwner {
        /// The offending value.
        value: String,
    },

    /// The lookup timeout was zero.
    #[error("lookup timeout must be at least one second")]
    InvalidTimeout,

    /// The GitHub API base URL could not be parsed.
    #[error("GitHub API base is invalid: {message}")]
    InvalidApiBase {
        /// Parser detail.
        message: String,
    },
}
