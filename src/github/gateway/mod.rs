//! Gateways for looking up issues through Octocrab.
//!
//! The trait seam lets the relay be exercised with mocks while the Octocrab
//! implementation performs the real HTTP request.

mod error_mapping;
mod issue;

pub use issue::OctocrabIssueGateway;

use async_trait::async_trait;

use crate::github::error::LookupError;
use crate::github::locator::IssueCoordinate;
use crate::github::models::IssueSummary;

/// Gateway that can load a single issue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch the issue summary for the coordinate. One attempt, no retries.
    async fn issue(&self, coordinate: &IssueCoordinate) -> Result<IssueSummary, LookupError>;
}
