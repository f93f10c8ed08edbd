//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical name/phone/email triple written to the store.
//! - Enforce required-field preconditions before any persistence.
//!
//! # Invariants
//! - `name` and `phone` are trimmed and non-empty.
//! - `email` is trimmed and may be empty.
//! - Contacts carry no identifier; duplicates are allowed.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Precondition failure for caller-provided input.
///
/// Raised before the store is touched; callers recover by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyPhone,
    EmptySearchTerm,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::EmptyPhone => write!(f, "phone number cannot be empty"),
            Self::EmptySearchTerm => write!(f, "search term cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Validated contact ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Builds a contact from raw user input.
    ///
    /// Surrounding whitespace is removed from every field. Name is checked
    /// before phone, so input with both empty reports `EmptyName`.
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` when `name` is blank.
    /// - `ValidationError::EmptyPhone` when `phone` is blank.
    pub fn new(name: &str, phone: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let phone = phone.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if phone.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns whether any field would make the on-disk line ambiguous.
    ///
    /// The flat format has no escaping, so a `,` or line break inside a field
    /// is stored as-is and splits differently on read.
    pub fn has_ambiguous_fields(&self) -> bool {
        [&self.name, &self.phone, &self.email]
            .iter()
            .any(|field| field.contains([',', '\n', '\r']))
    }
}
