//! Contact search entry points.
//!
//! # Responsibility
//! - Expose case-insensitive substring search over stored records.
//! - Keep result shaping inside core.

pub mod substring;
