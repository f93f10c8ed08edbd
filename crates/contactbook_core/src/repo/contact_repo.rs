//! Contact repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Create the backing file on first start.
//! - Append encoded records and read stored lines in insertion order.
//!
//! # Invariants
//! - Writes only ever append; existing lines are never rewritten.
//! - Reads on an absent file report `None`, never create it.
//! - Blank lines are not records.
//! - Undecodable bytes are replaced per line; other records stay readable.

use crate::model::contact::{Contact, ValidationError};
use crate::model::record::encode_contact;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// File step that failed inside a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Create,
    Read,
    Append,
}

impl Display for StoreAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Append => "append",
        };
        f.write_str(name)
    }
}

/// Error for contact store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    /// Backing file is absent on a write path.
    NotInitialized(PathBuf),
    /// Underlying I/O failure.
    Access {
        action: StoreAction,
        path: PathBuf,
        source: io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotInitialized(path) => {
                write!(f, "contact file `{}` has not been created yet", path.display())
            }
            Self::Access {
                action,
                path,
                source,
            } => write!(
                f,
                "failed to {action} contact file `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotInitialized(_) => None,
            Self::Access { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Result of preparing the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyPresent,
}

/// Storage contract for the contact book.
pub trait ContactRepository {
    /// Creates the backing store if absent. Idempotent.
    fn initialize(&self) -> StoreResult<InitOutcome>;
    /// Appends one contact after all existing records.
    fn append_contact(&self, contact: &Contact) -> StoreResult<()>;
    /// Returns stored record lines in insertion order, or `None` when the
    /// store has not been initialized.
    fn read_lines(&self) -> StoreResult<Option<Vec<String>>>;
}

/// Append-only contact store backed by one delimited text file.
#[derive(Debug, Clone)]
pub struct FlatFileContactRepository {
    path: PathBuf,
}

impl FlatFileContactRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn access_error(&self, action: StoreAction, source: io::Error) -> StoreError {
        error!(
            "event=store_io module=repo status=error action={} path={} error={}",
            action,
            self.path.display(),
            source
        );
        StoreError::Access {
            action,
            path: self.path.clone(),
            source,
        }
    }
}

impl ContactRepository for FlatFileContactRepository {
    fn initialize(&self) -> StoreResult<InitOutcome> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                info!(
                    "event=store_init module=repo status=ok outcome=created path={}",
                    self.path.display()
                );
                Ok(InitOutcome::Created)
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                info!(
                    "event=store_init module=repo status=ok outcome=already_present path={}",
                    self.path.display()
                );
                Ok(InitOutcome::AlreadyPresent)
            }
            Err(err) => Err(self.access_error(StoreAction::Create, err)),
        }
    }

    fn append_contact(&self, contact: &Contact) -> StoreResult<()> {
        if contact.has_ambiguous_fields() {
            warn!(
                "event=store_append module=repo status=warn reason=ambiguous_fields path={}",
                self.path.display()
            );
        }

        let mut file = match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "event=store_append module=repo status=error error_code=not_initialized path={}",
                    self.path.display()
                );
                return Err(StoreError::NotInitialized(self.path.clone()));
            }
            Err(err) => return Err(self.access_error(StoreAction::Append, err)),
        };

        let line = encode_contact(contact);
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|err| self.access_error(StoreAction::Append, err))?;

        info!(
            "event=store_append module=repo status=ok bytes={} path={}",
            line.len(),
            self.path.display()
        );
        Ok(())
    }

    fn read_lines(&self) -> StoreResult<Option<Vec<String>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=store_read module=repo status=ok outcome=not_initialized path={}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) => return Err(self.access_error(StoreAction::Read, err)),
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|err| self.access_error(StoreAction::Read, err))?;
            if read == 0 {
                break;
            }
            // Invalid UTF-8 stays local to its own line.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if !line.trim().is_empty() {
                lines.push(line.to_string());
            }
        }

        info!(
            "event=store_read module=repo status=ok records={} path={}",
            lines.len(),
            self.path.display()
        );
        Ok(Some(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRepository, FlatFileContactRepository, InitOutcome, StoreError};
    use crate::model::contact::Contact;
    use tempfile::TempDir;

    #[test]
    fn initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileContactRepository::new(dir.path().join("contacts.txt"));

        assert_eq!(repo.initialize().unwrap(), InitOutcome::Created);
        assert_eq!(repo.initialize().unwrap(), InitOutcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "");
    }

    #[test]
    fn initialize_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        std::fs::write(&path, "Ana,555,a@x.com\n").unwrap();

        let repo = FlatFileContactRepository::new(&path);
        assert_eq!(repo.initialize().unwrap(), InitOutcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Ana,555,a@x.com\n");
    }

    #[test]
    fn initialize_reports_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileContactRepository::new(dir.path().join("absent").join("contacts.txt"));

        let err = repo.initialize().unwrap_err();
        assert!(matches!(err, StoreError::Access { .. }), "unexpected: {err}");
    }

    #[test]
    fn append_requires_initialized_store() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileContactRepository::new(dir.path().join("contacts.txt"));
        let contact = Contact::new("Ana", "555", "").unwrap();

        let err = repo.append_contact(&contact).unwrap_err();
        assert!(matches!(err, StoreError::NotInitialized(_)));
        assert!(!repo.path().exists());
    }

    #[test]
    fn read_lines_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        std::fs::write(&path, "Ana,555,\n\n   \nBob,777,b@x.com\n").unwrap();

        let lines = FlatFileContactRepository::new(&path)
            .read_lines()
            .unwrap()
            .unwrap();
        assert_eq!(lines, vec!["Ana,555,", "Bob,777,b@x.com"]);
    }

    #[test]
    fn read_lines_keeps_records_around_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        std::fs::write(&path, b"Ana,555,\r\nB\xff\xfe,777,\nCarl,888,c@x.com").unwrap();

        let lines = FlatFileContactRepository::new(&path)
            .read_lines()
            .unwrap()
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Ana,555,");
        assert!(lines[1].ends_with(",777,"));
        assert!(lines[1].contains('\u{FFFD}'));
        assert_eq!(lines[2], "Carl,888,c@x.com");
    }

    #[test]
    fn read_lines_on_absent_file_does_not_create_it() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileContactRepository::new(dir.path().join("contacts.txt"));

        assert!(repo.read_lines().unwrap().is_none());
        assert!(!repo.path().exists());
    }
}
