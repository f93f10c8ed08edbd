//! Contact domain model and on-disk record shape.
//!
//! # Responsibility
//! - Define the validated `Contact` accepted by write paths.
//! - Define the decoded `ContactRecord` produced by read paths.
//!
//! # Invariants
//! - A `Contact` always has a non-empty name and phone.
//! - Decoding never fails; short records surface as `Field::Missing`.

pub mod contact;
pub mod record;
