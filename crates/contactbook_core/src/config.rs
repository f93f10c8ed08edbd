//! Process-wide configuration defaults.
//!
//! # Responsibility
//! - Name the default store location and logging settings.
//! - Resolve relative paths before they reach the logging backend.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.txt";
const LOG_DIR_APP_SEGMENT: &str = "contactbook";

/// Runtime settings shared by every store operation in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBookConfig {
    /// Backing file, relative paths resolve against the working directory.
    pub contacts_file: PathBuf,
    pub log_level: String,
    /// Always absolute; see [`ContactBookConfig::with_log_dir`].
    pub log_dir: PathBuf,
}

impl Default for ContactBookConfig {
    fn default() -> Self {
        Self {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: default_log_level().to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl ContactBookConfig {
    pub fn with_contacts_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.contacts_file = path.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Sets the log directory, anchoring relative paths at `cwd`.
    pub fn with_log_dir(mut self, dir: impl AsRef<Path>, cwd: &Path) -> Self {
        self.log_dir = absolutize(dir.as_ref(), cwd);
        self
    }
}

/// `<temp_dir>/contactbook/logs`.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_DIR_APP_SEGMENT).join("logs")
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
