//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issuebot.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUEBOT_*`, plus the legacy
//!    `GITHUB_TOKEN` for the token
//! 4. **Command-line arguments** – `--irc-host`, `--github-token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! irc_host = "irc.libera.chat"
//! irc_port = 6697
//! irc_tls = true
//! irc_nickname = "issuebot"
//! irc_channels = ["#acme"]
//! ignore = ["otherbot"]
//! github_token = "ghp_example"
//! projects = ["acme/widgets", "acme/gadgets"]
//! default_owner = "acme"
//! default_repo = "acme/widgets"
//! ```
//!
//! The loaded value is immutable for the process lifetime; the relay
//! components built from it are shared by reference.

mod error;

pub use error::ConfigError;

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::chat::{IrcSettings, TlsMode};
use crate::github::locator::parse_api_base;
use crate::github::DEFAULT_API_BASE;
use crate::reference::{AliasTable, ReferenceResolver};
use crate::relay::IgnoreList;

const DEFAULT_IRC_PORT: u16 = 6667;
const DEFAULT_NICKNAME: &str = "issuebot";
const DEFAULT_LOOKUP_TIMEOUT_SECONDS: u64 = 10;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use issuebot::IssuebotConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IssuebotConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUEBOT",
    discovery(
        dotfile_name = ".issuebot.toml",
        config_file_name = "issuebot.toml",
        app_name = "issuebot"
    )
)]
pub struct IssuebotConfig {
    /// IRC server host name. Required.
    #[ortho_config()]
    pub irc_host: Option<String>,

    /// IRC server port. Defaults to 6667.
    #[ortho_config(cli_short = 'p')]
    pub irc_port: u16,

    /// Nickname (and user name) the bot registers with.
    #[ortho_config(cli_short = 'n')]
    pub irc_nickname: String,

    /// Optional server password sent with `PASS`.
    #[ortho_config()]
    pub irc_password: Option<String>,

    /// Channels joined after registration.
    #[ortho_config(cli_short = 'c')]
    pub irc_channels: Vec<String>,

    /// Connects with TLS. Unset means plain TCP.
    ///
    /// Optional so an absent CLI flag leaves the config file value in place.
    #[ortho_config()]
    pub irc_tls: Option<bool>,

    /// Accepts any server certificate when `irc_tls` is set.
    #[ortho_config()]
    pub irc_tls_verify_skip: Option<bool>,

    /// Nicknames or user strings whose messages are never scanned.
    #[ortho_config()]
    pub ignore: Vec<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Falls back to the `GITHUB_TOKEN` environment variable.
    #[ortho_config(cli_short = 't')]
    pub github_token: Option<String>,

    /// `owner/repo` entries used to complete bare repository names.
    #[ortho_config()]
    pub projects: Vec<String>,

    /// Owner used for bare repository names that match no project.
    #[ortho_config(cli_short = 'o')]
    pub default_owner: Option<String>,

    /// Repository used for bare `#123` references.
    #[ortho_config()]
    pub default_repo: Option<String>,

    /// GitHub API base URL; override for GitHub Enterprise.
    #[ortho_config()]
    pub github_api_base: String,

    /// Upper bound on a single issue lookup, in seconds.
    #[ortho_config()]
    pub lookup_timeout_seconds: u64,

    /// `tracing` filter directive, e.g. `issuebot=debug`. `RUST_LOG` wins
    /// when set.
    #[ortho_config()]
    pub log_filter: Option<String>,
}

impl Default for IssuebotConfig {
    fn default() -> Self {
        Self {
            irc_host: None,
            irc_port: DEFAULT_IRC_PORT,
            irc_nickname: DEFAULT_NICKNAME.to_owned(),
            irc_password: None,
            irc_channels: Vec::new(),
            irc_tls: None,
            irc_tls_verify_skip: None,
            ignore: Vec::new(),
            github_token: None,
            projects: Vec::new(),
            default_owner: None,
            default_repo: None,
            github_api_base: DEFAULT_API_BASE.to_owned(),
            lookup_timeout_seconds: DEFAULT_LOOKUP_TIMEOUT_SECONDS,
            log_filter: None,
        }
    }
}

impl IssuebotConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable. Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when no source provides a value.
    pub fn resolve_token(&self) -> Result<String, ConfigError> {
        self.github_token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    /// Returns the IRC host or an error if missing or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHost`] when no host is configured.
    pub fn require_host(&self) -> Result<&str, ConfigError> {
        self.irc_host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .ok_or(ConfigError::MissingHost)
    }

    /// Checks every field the relay depends on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking host, token,
    /// projects, defaults, timeout, and API base in that order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.require_host()?;
        self.resolve_token()?;
        self.alias_table()?;
        self.validate_defaults()?;
        if self.lookup_timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        self.api_base()?;
        Ok(())
    }

    fn validate_defaults(&self) -> Result<(), ConfigError> {
        if let Some(owner) = self.default_owner.as_deref()
            && (owner.trim().is_empty() || owner.contains('/'))
        {
            return Err(ConfigError::InvalidDefaultOwner {
                value: owner.to_owned(),
            });
        }

        if let Some(repo) = self.default_repo.as_deref() {
            let well_formed = match repo.split_once('/') {
                None => !repo.trim().is_empty(),
                Some((owner, name)) => {
                    !owner.is_empty() && !name.is_empty() && !name.contains('/')
                }
            };
            if !well_formed {
                return Err(ConfigError::InvalidDefaultRepository {
                    value: repo.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Builds the alias table from `projects`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProject`] for a malformed entry.
    pub fn alias_table(&self) -> Result<AliasTable, ConfigError> {
        AliasTable::build(&self.projects)
    }

    /// Builds the reference resolver from projects and defaults. Surrounding
    /// whitespace on the defaults is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProject`] for a malformed entry.
    pub fn resolver(&self) -> Result<ReferenceResolver, ConfigError> {
        Ok(ReferenceResolver::new(
            self.alias_table()?,
            trimmed(self.default_owner.as_deref()),
            trimmed(self.default_repo.as_deref()),
        ))
    }

    /// Builds the sender ignore list.
    #[must_use]
    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(self.ignore.iter().cloned())
    }

    /// Parses the GitHub API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] when the URL is malformed.
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        parse_api_base(&self.github_api_base).map_err(|error| ConfigError::InvalidApiBase {
            message: error.to_string(),
        })
    }

    /// Per-lookup deadline.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }

    /// Nickname to register with; a blank value falls back to `issuebot`.
    #[must_use]
    pub fn nickname(&self) -> &str {
        let trimmed = self.irc_nickname.trim();
        if trimmed.is_empty() {
            DEFAULT_NICKNAME
        } else {
            trimmed
        }
    }

    /// Connection settings for the IRC transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHost`] when no host is configured.
    pub fn irc_settings(&self) -> Result<IrcSettings, ConfigError> {
        let tls = match (
            self.irc_tls.unwrap_or(false),
            self.irc_tls_verify_skip.unwrap_or(false),
        ) {
            (false, _) => TlsMode::Disabled,
            (true, false) => TlsMode::Verified,
            (true, true) => TlsMode::InsecureSkipVerify,
        };
        Ok(IrcSettings {
            host: self.require_host()?.to_owned(),
            port: self.irc_port,
            nickname: self.nickname().to_owned(),
            password: self.irc_password.clone().filter(|password| !password.is_empty()),
            channels: self.irc_channels.clone(),
            tls,
        })
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests;
