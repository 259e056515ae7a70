//! Reference detection: finding `owner/repo#123` style mentions in chat text
//! and completing them into issue coordinates.
//!
//! The pieces are deliberately free of I/O:
//!
//! - [`AliasTable`] maps a lower-cased repository name to its configured
//!   `owner/repo`.
//! - [`ReferenceScanner`] extracts every candidate from one message, left to
//!   right.
//! - [`ReferenceResolver`] turns a candidate into an [`IssueCoordinate`] or a
//!   skip, using the alias table and the configured default owner/repo.
//!
//! [`IssueCoordinate`]: crate::github::IssueCoordinate

mod alias;
mod resolver;
mod scanner;

pub use alias::AliasTable;
pub use resolver::{ReferenceResolver, Resolution, SkipReason, resolve};
pub use scanner::{Candidate, ReferenceScanner};

#[cfg(test)]
mod tests;
