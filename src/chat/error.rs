//! Errors raised by the IRC transport.

use thiserror::Error;

/// Failures while connecting to or talking with the IRC server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Socket-level failure.
    #[error("IRC connection I/O failed: {message}")]
    Io {
        /// Underlying I/O error text.
        message: String,
    },

    /// TLS could not be configured or the handshake failed.
    #[error("IRC TLS failure: {message}")]
    Tls {
        /// Detail from rustls.
        message: String,
    },

    /// The host cannot be used as a TLS server name.
    #[error("IRC host {host:?} is not a valid TLS server name")]
    InvalidServerName {
        /// The configured host.
        host: String,
    },

    /// A line from the server could not be parsed.
    #[error("malformed IRC line: {line:?}")]
    Protocol {
        /// The raw line.
        line: String,
    },

    /// The server sent `ERROR` and is closing the link.
    #[error("IRC server closed the link: {message}")]
    Server {
        /// Text of the `ERROR` message.
        message: String,
    },

    /// The server closed the connection.
    #[error("IRC connection closed by server")]
    Closed,
}

impl ChatError {
    /// Returns `true` for errors that a reconnect cannot fix.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidServerName { .. })
    }
}

impl From<std::io::Error> for ChatError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
