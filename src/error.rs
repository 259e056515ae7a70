//! Process-level errors raised while starting or running the bot.

use thiserror::Error;

use crate::chat::ChatError;
use crate::config::ConfigError;
use crate::github::LookupError;
use crate::logging::LoggingError;

/// Anything that stops the process. Per-reference lookup failures never
/// surface here; only failures building the GitHub client do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BotError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The GitHub client could not be built.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The IRC transport failed for good.
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// Logging could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// The reference pattern failed to compile.
    #[error("reference pattern failed to compile: {message}")]
    Pattern {
        /// Detail from the regex engine.
        message: String,
    },

    /// The shutdown signal handler could not be installed.
    #[error("failed to listen for shutdown signal: {message}")]
    Signal {
        /// Underlying I/O error text.
        message: String,
    },
}

impl From<regex::Error> for BotError {
    fn from(error: regex::Error) -> Self {
        Self::Pattern {
            message: error.to_string(),
        }
    }
}
