//! Data models representing a looked-up issue.

use serde::Deserialize;

/// Normalised issue details used to build the chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    /// Issue number as reported by GitHub.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Canonical HTML URL for displaying to a user.
    pub html_url: String,
}

/// Wire shape of the issue-detail response.
///
/// Every field is required and strictly typed; a missing or mistyped field
/// fails deserialisation and surfaces as a protocol error.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) title: String,
    pub(super) html_url: String,
}

impl From<ApiIssue> for IssueSummary {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            html_url: value.html_url,
        }
    }
}
