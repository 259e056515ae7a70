//! Identity wrappers for issue coordinates and API access.

use std::fmt;

use thiserror::Error;
use url::Url;

use super::error::LookupError;

/// Public GitHub API endpoint used when no enterprise base is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Reasons an `owner/repo#number` triple cannot form a coordinate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoordinateError {
    /// The owner half of `owner/repo` was empty.
    #[error("repository owner must not be empty")]
    EmptyOwner,
    /// The repository half of `owner/repo` was empty.
    #[error("repository name must not be empty")]
    EmptyRepository,
    /// The text was not exactly `owner/repo`.
    #[error("repository must be written as owner/repo")]
    MalformedRepository,
    /// The issue number was zero, non-numeric, or out of range.
    #[error("issue number must be a positive integer")]
    InvalidIssueNumber,
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, CoordinateError> {
        if value.is_empty() {
            return Err(CoordinateError::EmptyOwner);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, CoordinateError> {
        if value.is_empty() {
            return Err(CoordinateError::EmptyRepository);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue (or pull request) number; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueNumber(u64);

impl IssueNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, CoordinateError> {
        if value == 0 {
            return Err(CoordinateError::InvalidIssueNumber);
        }
        Ok(Self(value))
    }

    /// Parses decimal digits, rejecting zero and values beyond `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::InvalidIssueNumber`] when the text is not a
    /// positive integer that fits in 64 bits.
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        text.parse::<u64>()
            .map_err(|_| CoordinateError::InvalidIssueNumber)
            .and_then(Self::new)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
///
/// `Debug` is redacted so the token never lands in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, LookupError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LookupError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Parses and normalises the API base URL.
///
/// # Errors
///
/// Returns `LookupError::InvalidUrl` when the value is not an absolute URL
/// with a host.
pub fn parse_api_base(input: &str) -> Result<Url, LookupError> {
    let parsed = Url::parse(input).map_err(|error| LookupError::InvalidUrl(error.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(LookupError::InvalidUrl("URL must include a host".to_owned()));
    }
    Ok(parsed)
}

/// Fully-qualified `owner/repo#number` pointing at one tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueCoordinate {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: IssueNumber,
}

impl IssueCoordinate {
    /// Builds a coordinate from validated parts.
    #[must_use]
    pub const fn new(owner: RepositoryOwner, repository: RepositoryName, number: IssueNumber) -> Self {
        Self {
            owner,
            repository,
            number,
        }
    }

    /// Splits `owner/repo` text on its single separator and pairs it with a
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either half is empty, when the repo
    /// half contains a further `/`, or when the text has no separator.
    pub fn from_owner_repo(owner_repo: &str, number: IssueNumber) -> Result<Self, CoordinateError> {
        let (owner_text, repository_text) = owner_repo
            .split_once('/')
            .ok_or(CoordinateError::MalformedRepository)?;
        if repository_text.contains('/') {
            return Err(CoordinateError::MalformedRepository);
        }
        let owner = RepositoryOwner::new(owner_text)?;
        let repository = RepositoryName::new(repository_text)?;
        Ok(Self::new(owner, repository, number))
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Returns the API path for the issue-detail endpoint.
    pub(crate) fn issue_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}

impl fmt::Display for IssueCoordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}/{}#{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
