//! Case-insensitive substring search over raw record lines.
//!
//! # Responsibility
//! - Validate and normalize user search terms.
//! - Filter stored lines and decode matches.
//!
//! # Invariants
//! - Blank terms are rejected before the store is read.
//! - Matching runs against the whole stored line, so a term may span the
//!   field delimiter.
//! - Matches keep insertion order.

use crate::model::contact::ValidationError;
use crate::model::record::{decode_line, ContactRecord};
use crate::repo::contact_repo::{ContactRepository, StoreResult};

/// Normalized, non-blank search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Builds a query from raw user input.
    ///
    /// # Errors
    /// - `ValidationError::EmptySearchTerm` when `term` is blank.
    pub fn new(term: &str) -> Result<Self, ValidationError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err(ValidationError::EmptySearchTerm);
        }
        Ok(Self { term })
    }

    /// Trimmed, lowercased term as echoed back to the user.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(&self.term)
    }
}

/// Outcome of a search, separating "nothing stored" from "nothing matched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NotInitialized,
    NoMatches,
    Matches(Vec<ContactRecord>),
}

/// Reads the store fresh and returns records whose line contains the term.
pub fn search_records<R>(repo: &R, query: &SearchQuery) -> StoreResult<SearchOutcome>
where
    R: ContactRepository + ?Sized,
{
    let Some(lines) = repo.read_lines()? else {
        return Ok(SearchOutcome::NotInitialized);
    };

    let matches = lines
        .iter()
        .filter(|line| query.matches(line))
        .map(|line| decode_line(line))
        .collect::<Vec<_>>();

    if matches.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }
    Ok(SearchOutcome::Matches(matches))
}
