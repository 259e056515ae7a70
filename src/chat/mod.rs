//! IRC transport binding.
//!
//! Connects to one server (optionally over TLS), registers, joins the
//! configured channels, and feeds every `PRIVMSG` to the [`Dispatcher`].
//! Reconnects after a fixed delay whenever the connection drops.
//!
//! [`Dispatcher`]: crate::relay::Dispatcher

mod connection;
mod error;
mod message;
mod session;
mod tls;

pub use connection::{IrcConnector, IrcStream};
pub use error::ChatError;
pub use message::{Command, IrcMessage, Prefix};
pub use session::{MAX_LINE_BYTES, RECONNECT_DELAY, run_forever, run_session};

/// How the connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Plain TCP.
    Disabled,
    /// TLS with certificates checked against the webpki roots.
    Verified,
    /// TLS accepting any certificate.
    InsecureSkipVerify,
}

/// Everything needed to reach and register with the IRC server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcSettings {
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Nickname, also used as the user name.
    pub nickname: String,
    /// Server password, sent with `PASS` before registration.
    pub password: Option<String>,
    /// Channels joined after the welcome numeric.
    pub channels: Vec<String>,
    /// Transport security.
    pub tls: TlsMode,
}
