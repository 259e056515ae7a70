//! Alias table built from the configured project list.

use std::collections::HashMap;

use crate::config::ConfigError;

/// Immutable map from lower-cased repository name to `owner/repo`.
///
/// Later seeds overwrite earlier ones that share a repository name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    by_repository: HashMap<String, String>,
}

impl AliasTable {
    /// Builds the table from `owner/repo` seeds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProject`] for the first seed that lacks a
    /// `/` or has an empty owner or repository half.
    pub fn build<I, S>(seeds: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_repository = HashMap::new();
        for seed in seeds {
            let entry = seed.as_ref();
            let Some((owner, repository)) = entry.split_once('/') else {
                return Err(ConfigError::InvalidProject {
                    entry: entry.to_owned(),
                });
            };
            if owner.is_empty() || repository.is_empty() {
                return Err(ConfigError::InvalidProject {
                    entry: entry.to_owned(),
                });
            }
            by_repository.insert(repository.to_lowercase(), entry.to_owned());
        }
        Ok(Self { by_repository })
    }

    /// Looks up a bare repository name, ignoring case.
    #[must_use]
    pub fn lookup(&self, repository: &str) -> Option<&str> {
        self.by_repository
            .get(&repository.to_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct repository names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_repository.len()
    }

    /// Returns `true` when no seeds were configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_repository.is_empty()
    }
}
