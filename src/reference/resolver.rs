//! Completing partial references into issue coordinates.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::github::{CoordinateError, IssueCoordinate, IssueNumber};

use super::alias::AliasTable;
use super::scanner::Candidate;

/// Why a candidate was not acted on. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Bare `#123` with no default repository configured.
    NoDefaultRepository,
    /// Bare repository name with no alias and no default owner.
    UnknownRepository,
    /// `owner/repo` text with an empty half or more than one `/`.
    MalformedRepository,
    /// The digits did not form a positive 64-bit integer.
    InvalidNumber,
}

/// Outcome of resolving one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The candidate names a fully-qualified issue.
    Resolved(IssueCoordinate),
    /// The candidate is not something to look up.
    Skipped(SkipReason),
}

/// Resolves a candidate against the alias table and configured defaults.
///
/// Rules, first match wins:
///
/// 1. No repository text: use `default_repo`, or skip.
/// 2. Repository text without `/`: alias lookup (case-insensitive), else
///    `default_owner/<text>`, else skip.
/// 3. Repository text with `/`: used verbatim.
/// 4. The number must parse as a positive integer, else skip.
///
/// Blank defaults are treated as absent. The function is pure: the same
/// inputs always give the same outcome.
#[must_use]
pub fn resolve(
    candidate: &Candidate<'_>,
    aliases: &AliasTable,
    default_owner: Option<&str>,
    default_repo: Option<&str>,
) -> Resolution {
    let owner_fallback = default_owner.filter(|owner| !owner.is_empty());
    let repo_fallback = default_repo.filter(|repo| !repo.is_empty());

    let Some(repository_text) = candidate.owner_repo.or(repo_fallback) else {
        return Resolution::Skipped(SkipReason::NoDefaultRepository);
    };

    let owner_repo: Cow<'_, str> = if repository_text.contains('/') {
        Cow::Borrowed(repository_text)
    } else if let Some(aliased) = aliases.lookup(repository_text) {
        Cow::Borrowed(aliased)
    } else if let Some(owner) = owner_fallback {
        Cow::Owned(format!("{owner}/{repository_text}"))
    } else {
        return Resolution::Skipped(SkipReason::UnknownRepository);
    };

    let number = match IssueNumber::parse(candidate.number) {
        Ok(number) => number,
        Err(error) => {
            warn!(number = candidate.number, %error, "dropping reference with unusable number");
            return Resolution::Skipped(SkipReason::InvalidNumber);
        }
    };

    match IssueCoordinate::from_owner_repo(&owner_repo, number) {
        Ok(coordinate) => Resolution::Resolved(coordinate),
        Err(error @ (CoordinateError::EmptyOwner
        | CoordinateError::EmptyRepository
        | CoordinateError::MalformedRepository)) => {
            debug!(repository = %owner_repo, %error, "ignoring malformed repository reference");
            Resolution::Skipped(SkipReason::MalformedRepository)
        }
        Err(CoordinateError::InvalidIssueNumber) => Resolution::Skipped(SkipReason::InvalidNumber),
    }
}

/// Resolver bound to one configuration; cheap to share across messages.
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    aliases: AliasTable,
    default_owner: Option<String>,
    default_repo: Option<String>,
}

impl ReferenceResolver {
    /// Creates a resolver from the alias table and optional defaults.
    #[must_use]
    pub const fn new(
        aliases: AliasTable,
        default_owner: Option<String>,
        default_repo: Option<String>,
    ) -> Self {
        Self {
            aliases,
            default_owner,
            default_repo,
        }
    }

    /// Resolves one candidate; see [`resolve`].
    #[must_use]
    pub fn resolve(&self, candidate: &Candidate<'_>) -> Resolution {
        resolve(
            candidate,
            &self.aliases,
            self.default_owner.as_deref(),
            self.default_repo.as_deref(),
        )
    }

    /// The alias table in use.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}
