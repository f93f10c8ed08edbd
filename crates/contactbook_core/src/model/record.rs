//! Flat-file record codec.
//!
//! # Responsibility
//! - Encode contacts as `name,phone,email\n` lines.
//! - Decode stored lines positionally into per-field variants.
//!
//! # Invariants
//! - No quoting or escaping is applied; the format must stay readable by
//!   existing stores.
//! - Parts beyond the third are ignored.
//! - Decoding is total: every line yields a `ContactRecord`.

use crate::model::contact::Contact;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

pub const FIELD_DELIMITER: char = ',';
pub const RECORD_TERMINATOR: char = '\n';
/// Display placeholder for fields absent from a short or blank record.
pub const MISSING_FIELD_SENTINEL: &str = "N/A";

/// One positional field decoded from a stored line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Text with at least one non-whitespace character, kept verbatim.
    Present(String),
    /// The position exists but is empty or whitespace (e.g. trailing `,`).
    Empty,
    /// The line has fewer parts than this position.
    Missing,
}

impl Field {
    fn from_part(part: Option<&str>) -> Self {
        match part {
            None => Self::Missing,
            Some(value) if value.trim().is_empty() => Self::Empty,
            Some(value) => Self::Present(value.to_string()),
        }
    }

    /// Raw stored text; blank for `Empty` and `Missing`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present(value) => value,
            Self::Empty | Self::Missing => "",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present(value) => f.pad(value),
            Self::Empty | Self::Missing => f.pad(MISSING_FIELD_SENTINEL),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Empty | Self::Missing => serializer.serialize_none(),
        }
    }
}

/// Contact as read back from one stored line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub name: Field,
    pub phone: Field,
    pub email: Field,
    /// Stored line without its terminator, used for substring search.
    #[serde(skip)]
    pub raw: String,
}

/// Serializes a contact as one terminated record line.
pub fn encode_contact(contact: &Contact) -> String {
    format!(
        "{name}{d}{phone}{d}{email}{t}",
        name = contact.name(),
        phone = contact.phone(),
        email = contact.email(),
        d = FIELD_DELIMITER,
        t = RECORD_TERMINATOR,
    )
}

/// Decodes a stored line, tolerating short and over-long records.
pub fn decode_line(line: &str) -> ContactRecord {
    let raw = line.trim();
    let mut parts = raw.split(FIELD_DELIMITER);

    ContactRecord {
        name: Field::from_part(parts.next()),
        phone: Field::from_part(parts.next()),
        email: Field::from_part(parts.next()),
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_line, encode_contact, Field};
    use crate::model::contact::Contact;

    #[test]
    fn encode_joins_fields_with_terminator() {
        let contact = Contact::new("Ana", "555-1234", "ana@x.com").unwrap();
        assert_eq!(encode_contact(&contact), "Ana,555-1234,ana@x.com\n");

        let no_email = Contact::new("Bob", "555-9999", "").unwrap();
        assert_eq!(encode_contact(&no_email), "Bob,555-9999,\n");
    }

    #[test]
    fn decode_recovers_encoded_contact() {
        let contact = Contact::new("Ana", "555-1234", "ana@x.com").unwrap();
        let record = decode_line(&encode_contact(&contact));

        assert_eq!(record.name.as_str(), contact.name());
        assert_eq!(record.phone.as_str(), contact.phone());
        assert_eq!(record.email.as_str(), contact.email());
        assert_eq!(record.raw, "Ana,555-1234,ana@x.com");
    }

    #[test]
    fn decode_marks_short_records_missing() {
        let record = decode_line("Carol");
        assert_eq!(record.name, Field::Present("Carol".to_string()));
        assert_eq!(record.phone, Field::Missing);
        assert_eq!(record.email, Field::Missing);
        assert_eq!(record.phone.to_string(), "N/A");
    }

    #[test]
    fn decode_distinguishes_empty_from_missing() {
        let record = decode_line("Bob,555-9999,");
        assert_eq!(record.email, Field::Empty);
        assert_eq!(record.email.to_string(), "N/A");
        assert_eq!(record.email.as_str(), "");
    }

    #[test]
    fn decode_treats_whitespace_only_parts_as_empty() {
        let record = decode_line("Bob, ,x@y.com");
        assert_eq!(record.phone, Field::Empty);
        assert_eq!(record.phone.to_string(), "N/A");
        assert_eq!(record.email.as_str(), "x@y.com");
    }

    #[test]
    fn decode_ignores_extra_parts() {
        let record = decode_line("Doe, Jane,555,jd@x.com");
        assert_eq!(record.name.as_str(), "Doe");
        assert_eq!(record.phone.as_str(), " Jane");
        assert_eq!(record.email.as_str(), "555");
    }

    #[test]
    fn decode_strips_carriage_return() {
        let record = decode_line("Ana,555,ana@x.com\r\n");
        assert_eq!(record.email.as_str(), "ana@x.com");
    }

    #[test]
    fn field_display_honors_width() {
        assert_eq!(format!("{:<6}|", Field::Present("Ana".to_string())), "Ana   |");
        assert_eq!(format!("{:<5}|", Field::Missing), "N/A  |");
    }
}
