//! IRC line codec.
//!
//! Inbound lines follow RFC 1459 framing:
//! `[@tags] [:prefix] COMMAND [params...] [:trailing]`.

use super::error::ChatError;

/// Longest message body sent in one `PRIVMSG`, in bytes. Leaves room for
/// the command, target, and the prefix the server prepends within the
/// 512-byte line limit.
const MAX_TEXT_BYTES: usize = 400;

/// Message source, usually `nick!user@host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    /// Nickname or server name.
    pub nick: String,
    /// Ident, when present.
    pub user: Option<String>,
    /// Host, when present.
    pub host: Option<String>,
}

impl Prefix {
    fn parse(text: &str) -> Self {
        let (nick, user, host) = match text.split_once('!') {
            Some((nick, rest)) => match rest.split_once('@') {
                Some((user, host)) => (nick, Some(user), Some(host)),
                None => (nick, Some(rest), None),
            },
            None => match text.split_once('@') {
                Some((nick, host)) => (nick, None, Some(host)),
                None => (text, None, None),
            },
        };
        Self {
            nick: nick.to_owned(),
            user: user.map(ToOwned::to_owned),
            host: host.map(ToOwned::to_owned),
        }
    }
}

/// One parsed inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcMessage {
    /// Source, if the line carried one.
    pub prefix: Option<Prefix>,
    /// Command word or three-digit numeric, upper-cased.
    pub command: String,
    /// Middle parameters followed by the trailing parameter.
    pub params: Vec<String>,
}

impl IrcMessage {
    /// Parses one line; trailing CR/LF is ignored and IRCv3 tags are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Protocol`] when the line has no command.
    pub fn parse(line: &str) -> Result<Self, ChatError> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let untagged = if trimmed.starts_with('@') {
            trimmed.split_once(' ').map_or("", |(_, rest)| rest)
        } else {
            trimmed
        };

        let (prefix, after_prefix) = match untagged.strip_prefix(':') {
            Some(prefixed) => {
                let (source, rest) = prefixed.split_once(' ').unwrap_or((prefixed, ""));
                (Some(Prefix::parse(source)), rest)
            }
            None => (None, untagged),
        };

        let body = after_prefix.trim_start_matches(' ');
        let (command, mut rest) = body.split_once(' ').unwrap_or((body, ""));
        if command.is_empty() {
            return Err(ChatError::Protocol {
                line: trimmed.to_owned(),
            });
        }

        let mut params = Vec::new();
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }
            if let Some(trailing) = rest.strip_prefix(':') {
                params.push(trailing.to_owned());
                break;
            }
            let (param, remainder) = rest.split_once(' ').unwrap_or((rest, ""));
            params.push(param.to_owned());
            rest = remainder;
        }

        Ok(Self {
            prefix,
            command: command.to_ascii_uppercase(),
            params,
        })
    }

    /// Parameter at `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Last parameter, which holds the text of `PRIVMSG`, `PING`, and
    /// `ERROR`.
    #[must_use]
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }
}

/// Outbound commands the bot sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Server password.
    Pass(String),
    /// Set or change nickname.
    Nick(String),
    /// Register user and real name.
    User {
        /// User name (ident).
        user: String,
        /// Real name.
        realname: String,
    },
    /// Join a channel.
    Join(String),
    /// Answer a `PING`.
    Pong(String),
    /// Send text to a channel or nickname.
    Privmsg {
        /// Channel or nickname.
        target: String,
        /// Message body.
        text: String,
    },
}

impl Command {
    /// Renders the command as one CRLF-terminated line. Embedded line
    /// breaks are replaced and long bodies are cut on a character boundary.
    #[must_use]
    pub fn render(&self) -> String {
        let line = match self {
            Self::Pass(password) => format!("PASS {}", single_line(password)),
            Self::Nick(nickname) => format!("NICK {}", single_line(nickname)),
            Self::User { user, realname } => format!(
                "USER {} 0 * :{}",
                single_line(user),
                single_line(realname)
            ),
            Self::Join(channel) => format!("JOIN {}", single_line(channel)),
            Self::Pong(token) => format!("PONG :{}", single_line(token)),
            Self::Privmsg { target, text } => format!(
                "PRIVMSG {} :{}",
                single_line(target),
                truncate_to_bytes(&single_line(text), MAX_TEXT_BYTES)
            ),
        };
        format!("{line}\r\n")
    }
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|character| match character {
            '\r' | '\n' | '\0' => ' ',
            other => other,
        })
        .collect()
}

fn truncate_to_bytes(text: &str, limit: usize) -> String {
    let mut kept = String::with_capacity(limit.min(text.len()));
    for character in text.chars() {
        if kept.len() + character.len_utf8() > limit {
            break;
        }
        kept.push(character);
    }
    kept
}
