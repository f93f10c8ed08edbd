//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use contactbook_core::config::DEFAULT_CONTACTS_FILE;
use std::path::PathBuf;

/// Flat-file contact book
#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "Store and search contacts in a text file")]
pub struct Cli {
    /// Contact file to read and append to
    #[arg(short, long, global = true, env = "CONTACTBOOK_FILE", default_value = DEFAULT_CONTACTS_FILE)]
    pub file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CONTACTBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rotating log files
    #[arg(long, global = true, env = "CONTACTBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Output format for listed contacts
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add one contact
    Add {
        name: String,
        phone: String,
        #[arg(default_value = "")]
        email: String,
    },
    /// List all contacts
    List,
    /// Search contacts by case-insensitive substring
    Search { term: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
