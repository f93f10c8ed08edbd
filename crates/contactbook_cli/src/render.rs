//! Console rendering of store outcomes.

use crate::cli::OutputFormat;
use contactbook_core::{ContactListing, ContactRecord, SearchOutcome};
use std::io::{self, Write};

const NAME_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 15;
const EMAIL_WIDTH: usize = 30;
const RULE_WIDTH: usize = NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH;

pub const NOT_INITIALIZED_MESSAGE: &str =
    "Contact file not found. Please add some contacts first.";
pub const NO_CONTACTS_MESSAGE: &str = "No contacts found.";

/// Fixed-width table with a rule above and below the rows.
pub fn write_table<W: Write>(out: &mut W, records: &[ContactRecord]) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(
        out,
        "{:<NAME_WIDTH$}{:<PHONE_WIDTH$}{:<EMAIL_WIDTH$}",
        "Name", "Phone", "Email"
    )?;
    writeln!(out, "{rule}")?;
    for record in records {
        writeln!(
            out,
            "{:<NAME_WIDTH$}{:<PHONE_WIDTH$}{:<EMAIL_WIDTH$}",
            record.name, record.phone, record.email
        )?;
    }
    writeln!(out, "{rule}")
}

fn write_json<W: Write>(out: &mut W, records: &[ContactRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)
}

pub fn write_listing<W: Write>(
    out: &mut W,
    listing: &ContactListing,
    format: OutputFormat,
) -> io::Result<()> {
    match (listing, format) {
        (ContactListing::NotInitialized, OutputFormat::Table) => {
            writeln!(out, "{NOT_INITIALIZED_MESSAGE}")
        }
        (ContactListing::NotInitialized, OutputFormat::Json) => writeln!(out, "null"),
        (ContactListing::Empty, OutputFormat::Table) => writeln!(out, "{NO_CONTACTS_MESSAGE}"),
        (ContactListing::Empty, OutputFormat::Json) => write_json(out, &[]),
        (ContactListing::Contacts(records), OutputFormat::Table) => write_table(out, records),
        (ContactListing::Contacts(records), OutputFormat::Json) => write_json(out, records),
    }
}

pub fn write_search<W: Write>(
    out: &mut W,
    term: &str,
    outcome: &SearchOutcome,
    format: OutputFormat,
) -> io::Result<()> {
    match (outcome, format) {
        (SearchOutcome::NotInitialized, OutputFormat::Table) => {
            writeln!(out, "{NOT_INITIALIZED_MESSAGE}")
        }
        (SearchOutcome::NotInitialized, OutputFormat::Json) => writeln!(out, "null"),
        (SearchOutcome::NoMatches, OutputFormat::Table) => {
            writeln!(out, "No contacts found matching '{term}'.")
        }
        (SearchOutcome::NoMatches, OutputFormat::Json) => write_json(out, &[]),
        (SearchOutcome::Matches(records), OutputFormat::Table) => {
            writeln!(out, "\n--- Search Results for '{term}' ---")?;
            write_table(out, records)
        }
        (SearchOutcome::Matches(records), OutputFormat::Json) => write_json(out, records),
    }
}

#[cfg(test)]
mod tests {
    use super::{write_listing, write_search, write_table};
    use crate::cli::OutputFormat;
    use contactbook_core::{decode_line, ContactListing, SearchOutcome};

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_pads_columns_to_fixed_widths() {
        let records = vec![decode_line("Ana,555-1234,ana@x.com")];
        let text = rendered(|out| write_table(out, &records));
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(&lines[0][..20], "Name                ");
        assert_eq!(&lines[0][20..35], "Phone          ");
        assert_eq!(lines[1], "-".repeat(65));
        assert_eq!(lines[2].len(), 65);
        assert!(lines[2].starts_with("Ana                 555-1234       ana@x.com"));
        assert_eq!(lines[3], "-".repeat(65));
    }

    #[test]
    fn blank_email_renders_sentinel() {
        let records = vec![decode_line("Bob,555-9999,")];
        let text = rendered(|out| write_table(out, &records));
        assert!(text.contains("Bob                 555-9999       N/A"));
    }

    #[test]
    fn listing_states_have_distinct_messages() {
        let empty = rendered(|out| write_listing(out, &ContactListing::Empty, OutputFormat::Table));
        let missing = rendered(|out| {
            write_listing(out, &ContactListing::NotInitialized, OutputFormat::Table)
        });
        assert_eq!(empty, "No contacts found.\n");
        assert!(missing.contains("Contact file not found"));
        assert!(!empty.contains("Name"));
    }

    #[test]
    fn search_no_matches_echoes_term() {
        let text = rendered(|out| {
            write_search(out, "zed", &SearchOutcome::NoMatches, OutputFormat::Table)
        });
        assert_eq!(text, "No contacts found matching 'zed'.\n");
    }

    #[test]
    fn json_output_for_missing_store_is_null() {
        let listing = rendered(|out| {
            write_listing(out, &ContactListing::NotInitialized, OutputFormat::Json)
        });
        let search = rendered(|out| {
            write_search(out, "ana", &SearchOutcome::NotInitialized, OutputFormat::Json)
        });

        for text in [listing, search] {
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert!(value.is_null());
        }
        let empty = rendered(|out| write_listing(out, &ContactListing::Empty, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&empty).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn json_listing_emits_records() {
        let listing = ContactListing::Contacts(vec![decode_line("Bob,555-9999,")]);
        let text = rendered(|out| write_listing(out, &listing, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Bob");
        assert!(value[0]["email"].is_null());
    }
}
