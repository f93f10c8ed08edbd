//! Contact book command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start file logging, then dispatch to the menu or a one-shot command.

mod cli;
mod menu;
mod render;

use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use contactbook_core::{
    init_logging, logging_status, ContactBookConfig, ContactService, FlatFileContactRepository, SearchQuery,
    StoreError,
};
use log::{error, info};
use menu::Menu;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    // The contact book stays usable without a log file.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    if let Some((level, log_dir)) = logging_status() {
        info!(
            "event=cli_start module=cli status=ok mode={} store={} level={} log_dir={}",
            if cli.command.is_some() { "oneshot" } else { "interactive" },
            config.contacts_file.display(),
            level,
            log_dir.display()
        );
    }

    let service = ContactService::new(FlatFileContactRepository::new(&config.contacts_file));
    let result = match cli.command {
        None => run_interactive(&service, &config),
        Some(command) => run_command(&service, command, cli.format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> ContactBookConfig {
    let mut config = ContactBookConfig::default().with_contacts_file(&cli.file);
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.as_str());
    }
    if let Some(dir) = &cli.log_dir {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
        config = config.with_log_dir(dir, &cwd);
    }
    config
}

fn run_interactive(
    service: &ContactService<FlatFileContactRepository>,
    config: &ContactBookConfig,
) -> io::Result<ExitCode> {
    let label = config.contacts_file.display().to_string();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(service, stdin.lock(), stdout.lock()).run(&label)?;
    Ok(ExitCode::SUCCESS)
}

fn run_command(
    service: &ContactService<FlatFileContactRepository>,
    command: Command,
    format: OutputFormat,
) -> io::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        Command::Add { name, phone, email } => service
            .initialize()
            .and_then(|_| service.add_contact(&name, &phone, &email))
            .map(|stored| writeln!(out, "Contact '{stored}' added successfully!")),
        Command::List => service
            .list_contacts()
            .map(|listing| render::write_listing(&mut out, &listing, format)),
        Command::Search { term } => {
            match SearchQuery::new(&term).map_err(StoreError::from) {
                Ok(query) => service
                    .search(&query)
                    .map(|outcome| render::write_search(&mut out, query.term(), &outcome, format)),
                Err(err) => Err(err),
            }
        }
    };

    match result {
        Ok(written) => {
            written?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
