//! Ignore-list filtering and reply formatting.

use std::collections::HashSet;

use crate::github::IssueSummary;

/// mIRC bold toggle understood by common IRC clients.
pub const BOLD: char = '\u{2}';

/// Who sent a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Display name (IRC nickname).
    pub display: String,
    /// Underlying user string (IRC ident).
    pub user: String,
}

impl Identity {
    /// Builds an identity from its two representations.
    #[must_use]
    pub fn new(display: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            user: user.into(),
        }
    }
}

/// Senders whose messages are never scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: HashSet<String>,
}

impl IgnoreList {
    /// Builds the list; matching is exact and case-sensitive.
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// See [`should_ignore`].
    #[must_use]
    pub fn should_ignore(&self, identity: &Identity) -> bool {
        should_ignore(identity, self)
    }
}

/// Returns `true` when either the display name or the user string is on the
/// ignore list.
#[must_use]
pub fn should_ignore(identity: &Identity, ignore_list: &IgnoreList) -> bool {
    ignore_list.entries.contains(&identity.display) || ignore_list.entries.contains(&identity.user)
}

/// Renders `[#<number>] <title> <url>` with the number in bold.
///
/// Line breaks in the title or URL are flattened to spaces so a reply is
/// always exactly one chat line.
#[must_use]
pub fn format_reply(summary: &IssueSummary) -> String {
    format!(
        "[{BOLD}#{number}{BOLD}] {title} {url}",
        number = summary.number,
        title = single_line(&summary.title),
        url = single_line(&summary.html_url),
    )
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|character| match character {
            '\r' | '\n' | '\0' => ' ',
            other => other,
        })
        .collect()
}
