//! Octocrab implementation of the issue gateway.

use std::time::Duration;

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::LookupError;
use crate::github::locator::{IssueCoordinate, PersonalAccessToken};
use crate::github::models::{ApiIssue, IssueSummary};

use super::IssueGateway;
use super::error_mapping::{github_message, map_http_error, map_octocrab_error};

/// Octocrab-backed issue gateway with a per-lookup deadline.
pub struct OctocrabIssueGateway {
    client: Octocrab,
    timeout: Duration,
}

impl OctocrabIssueGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Builds an authenticated Octocrab client against `api_base`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidUrl` when the base URI cannot be parsed or
    /// a transport error when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &Url,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let base_uri = api_base
            .as_str()
            .parse::<Uri>()
            .map_err(|error| LookupError::InvalidUrl(error.to_string()))?;
        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| LookupError::InvalidUrl(format!("{api_base}: {error}")))?
            .build()
            .map_err(|error| map_octocrab_error("client setup", &error))?;
        Ok(Self::new(client, timeout))
    }

    async fn fetch_issue(&self, coordinate: &IssueCoordinate) -> Result<IssueSummary, LookupError> {
        let uri: Uri = coordinate
            .issue_path()
            .parse::<Uri>()
            .map_err(|error| LookupError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._get_with_headers(uri, None)
            .await
            .map_err(|error| map_octocrab_error("issue", &error))?;

        let status = response.status();
        let body = self.client.body_to_string(response).await;

        if !status.is_success() {
            let text = body.unwrap_or_default();
            return Err(map_http_error("issue", status, github_message(&text)));
        }

        let text = body.map_err(|error| LookupError::Transport {
            status: Some(status),
            message: format!("issue response read failed: {error}"),
        })?;
        decode_issue(&text)
    }
}

/// Decodes an issue-detail body, insisting on `number`, `title`, and
/// `html_url` with their expected types.
pub(crate) fn decode_issue(body: &str) -> Result<IssueSummary, LookupError> {
    serde_json::from_str::<ApiIssue>(body)
        .map(IssueSummary::from)
        .map_err(|error| LookupError::Protocol {
            message: error.to_string(),
        })
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn issue(&self, coordinate: &IssueCoordinate) -> Result<IssueSummary, LookupError> {
        tokio::time::timeout(self.timeout, self.fetch_issue(coordinate))
            .await
            .map_err(|_| LookupError::Transport {
                status: None,
                message: format!("issue lookup timed out after {:?}", self.timeout),
            })?
    }
}

#[cfg(test)]
mod tests;
