//! Core domain logic for the contact book.
//! This crate owns the record format and every store operation.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::ContactBookConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ValidationError};
pub use model::record::{decode_line, encode_contact, ContactRecord, Field};
pub use repo::contact_repo::{
    ContactRepository, FlatFileContactRepository, InitOutcome, StoreAction, StoreError,
    StoreResult,
};
pub use search::substring::{search_records, SearchOutcome, SearchQuery};
pub use service::contact_service::{ContactListing, ContactService};
