//! IRC bot that answers GitHub issue references.
//!
//! Every chat message is scanned for `owner/repo#123`, `repo#123`, and
//! `#123` mentions. Each mention is completed into a full issue coordinate
//! from the configured projects and defaults, looked up on GitHub, and
//! answered with one line: `[#123] title url`.
//!
//! The crate is split by concern:
//!
//! - [`reference`] finds and resolves mentions (pure, no I/O).
//! - [`github`] performs the issue lookup through Octocrab.
//! - [`relay`] runs the per-message pipeline and formats replies.
//! - [`chat`] speaks IRC and feeds messages to the relay.
//! - [`config`] and [`logging`] provide the ambient setup.

pub mod chat;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod reference;
pub mod relay;

pub use chat::{ChatError, IrcConnector, IrcSettings, TlsMode, run_forever};
pub use config::{ConfigError, IssuebotConfig};
pub use error::BotError;
pub use github::{
    IssueCoordinate, IssueGateway, IssueSummary, LookupError, OctocrabIssueGateway,
    PersonalAccessToken,
};
pub use reference::{AliasTable, ReferenceResolver, ReferenceScanner, Resolution, SkipReason};
pub use relay::{Dispatcher, IgnoreList, InboundMessage, OutboundLine, format_reply};
