//! GitHub issue lookup and token handling.
//!
//! This module wraps Octocrab to fetch a single issue by coordinate and
//! classify the outcome. Errors are mapped into [`LookupError`] variants so
//! the relay can log a precise reason without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::LookupError;
pub use gateway::{IssueGateway, OctocrabIssueGateway};
pub use locator::{
    CoordinateError, DEFAULT_API_BASE, IssueCoordinate, IssueNumber, PersonalAccessToken,
    RepositoryName, RepositoryOwner,
};
pub use models::IssueSummary;

#[cfg(test)]
pub use gateway::MockIssueGateway;
