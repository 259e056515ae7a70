//! Candidate extraction from free-form chat text.

use regex::Regex;

/// Optional `[word chars and /]` token, then `#`, then digits. Word
/// characters are ASCII only.
const REFERENCE_PATTERN: &str = r"([0-9A-Za-z_/]+)?#([0-9]+)";

/// One syntactic match, borrowed from the scanned message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'text> {
    /// Text before `#`: a bare repository name or `owner/repo`. `None` for a
    /// bare `#123`.
    pub owner_repo: Option<&'text str>,
    /// Digits after `#`, unparsed.
    pub number: &'text str,
}

impl<'text> Candidate<'text> {
    /// Builds a candidate; mainly useful in tests.
    #[must_use]
    pub const fn new(owner_repo: Option<&'text str>, number: &'text str) -> Self {
        Self { owner_repo, number }
    }
}

/// Compiled reference pattern.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    pattern: Regex,
}

impl ReferenceScanner {
    /// Compiles the reference pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error; the pattern is a constant so this
    /// only fails if the regex engine rejects it.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(REFERENCE_PATTERN)?,
        })
    }

    /// Returns every non-overlapping candidate in left-to-right order.
    #[must_use]
    pub fn scan<'text>(&self, message: &'text str) -> Vec<Candidate<'text>> {
        self.pattern
            .captures_iter(message)
            .filter_map(|captures| {
                let number = captures.get(2)?.as_str();
                let owner_repo = captures.get(1).map(|found| found.as_str());
                Some(Candidate { owner_repo, number })
            })
            .collect()
    }
}
