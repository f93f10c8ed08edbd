//! Contact book use-case service.
//!
//! # Responsibility
//! - Provide initialize/add/list/search entry points for callers.
//! - Turn store states into tagged outcomes instead of errors.
//!
//! # Invariants
//! - Validation failures never touch the store.
//! - Every call re-reads the store; nothing is cached between calls.
//! - Log lines carry counts and lengths, never contact field values.

use crate::model::contact::Contact;
use crate::model::record::{decode_line, ContactRecord};
use crate::repo::contact_repo::{ContactRepository, InitOutcome, StoreResult};
use crate::search::substring::{search_records, SearchOutcome, SearchQuery};
use log::{info, warn};

/// Outcome of listing the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListing {
    /// Backing file does not exist yet.
    NotInitialized,
    /// Backing file exists with zero records.
    Empty,
    Contacts(Vec<ContactRecord>),
}

/// Use-case service wrapper for contact book operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Ensures the backing store exists. Safe to call repeatedly.
    pub fn initialize(&self) -> StoreResult<InitOutcome> {
        self.repo.initialize()
    }

    /// Validates and appends one contact.
    ///
    /// # Contract
    /// - Returns the stored (trimmed) name on success.
    /// - Blank name or phone yields `StoreError::Validation` and leaves the
    ///   store unchanged.
    /// - I/O failures are returned as-is; a partially written line is not
    ///   rolled back.
    pub fn add_contact(&self, name: &str, phone: &str, email: &str) -> StoreResult<String> {
        let contact = match Contact::new(name, phone, email) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(
                    "event=contact_add module=service status=rejected reason={:?}",
                    err
                );
                return Err(err.into());
            }
        };

        self.repo.append_contact(&contact)?;
        info!(
            "event=contact_add module=service status=ok name_len={} has_email={}",
            contact.name().chars().count(),
            !contact.email().is_empty()
        );
        Ok(contact.name().to_string())
    }

    /// Lists every stored contact in insertion order.
    pub fn list_contacts(&self) -> StoreResult<ContactListing> {
        let listing = match self.repo.read_lines()? {
            None => ContactListing::NotInitialized,
            Some(lines) if lines.is_empty() => ContactListing::Empty,
            Some(lines) => {
                ContactListing::Contacts(lines.iter().map(|line| decode_line(line)).collect())
            }
        };

        info!(
            "event=contact_list module=service status=ok outcome={}",
            listing_label(&listing)
        );
        Ok(listing)
    }

    /// Searches stored records by case-insensitive substring.
    ///
    /// A blank term is rejected before the store is read.
    pub fn search_contacts(&self, term: &str) -> StoreResult<SearchOutcome> {
        let query = match SearchQuery::new(term) {
            Ok(query) => query,
            Err(err) => {
                warn!("event=contact_search module=service status=rejected reason={err:?}");
                return Err(err.into());
            }
        };

        self.search(&query)
    }

    /// Searches with an already validated query.
    pub fn search(&self, query: &SearchQuery) -> StoreResult<SearchOutcome> {
        let outcome = search_records(&self.repo, query)?;
        let hits = match &outcome {
            SearchOutcome::Matches(records) => records.len(),
            SearchOutcome::NotInitialized | SearchOutcome::NoMatches => 0,
        };
        info!(
            "event=contact_search module=service status=ok term_len={} hits={}",
            query.term().chars().count(),
            hits
        );
        Ok(outcome)
    }
}

fn listing_label(listing: &ContactListing) -> String {
    match listing {
        ContactListing::NotInitialized => "not_initialized".to_string(),
        ContactListing::Empty => "empty".to_string(),
        ContactListing::Contacts(records) => format!("records:{}", records.len()),
    }
}
