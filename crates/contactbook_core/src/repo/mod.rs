//! Contact Store persistence.
//!
//! # Responsibility
//! - Define the storage contract used by search and service layers.
//! - Keep file handling details inside the core persistence boundary.
//!
//! # Invariants
//! - `initialize` is the only operation that creates the backing file.
//! - File handles never outlive a single repository call.

pub mod contact_repo;
