//! Interactive menu loop.
//!
//! Every store failure is reported to the user and the loop continues;
//! only console I/O errors end it early.

use crate::cli::OutputFormat;
use crate::render::{write_listing, write_search};
use contactbook_core::{ContactRepository, ContactService, InitOutcome, SearchQuery, StoreError};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'svc, R: ContactRepository, I, O> {
    service: &'svc ContactService<R>,
    input: I,
    output: O,
}

impl<'svc, R, I, O> Menu<'svc, R, I, O>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(service: &'svc ContactService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Initializes the store, then loops until exit or end of input.
    pub fn run(&mut self, store_label: &str) -> io::Result<()> {
        match self.service.initialize() {
            Ok(InitOutcome::Created) => {
                writeln!(self.output, "'{store_label}' created successfully.")?
            }
            Ok(InitOutcome::AlreadyPresent) => {}
            Err(err) => writeln!(self.output, "Error creating file '{store_label}': {err}")?,
        }

        loop {
            writeln!(self.output, "\n--- Contact Book Menu ---")?;
            writeln!(self.output, "1. Add Contact")?;
            writeln!(self.output, "2. View All Contacts")?;
            writeln!(self.output, "3. Search Contact")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Enter your choice (1-4): ")? else {
                debug!("event=menu_eof module=cli status=ok");
                return Ok(());
            };

            let flow = match choice.as_str() {
                "1" => self.add_contact()?,
                "2" => self.view_contacts()?,
                "3" => self.search_contacts()?,
                "4" => {
                    writeln!(self.output, "Exiting Contact Book. Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 4."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Add New Contact ---")?;
        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Enter email address: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.add_contact(&name, &phone, &email) {
            Ok(stored) => writeln!(self.output, "Contact '{stored}' added successfully!")?,
            Err(StoreError::Validation(_)) => writeln!(
                self.output,
                "Name and phone number cannot be empty. Contact not added."
            )?,
            Err(err) => {
                warn!("event=menu_add module=cli status=error error={err}");
                writeln!(self.output, "Error adding contact to file: {err}")?
            }
        }
        Ok(Flow::Continue)
    }

    fn view_contacts(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- All Contacts ---")?;
        match self.service.list_contacts() {
            Ok(listing) => write_listing(&mut self.output, &listing, OutputFormat::Table)?,
            Err(err) => {
                warn!("event=menu_list module=cli status=error error={err}");
                writeln!(self.output, "Error reading contacts from file: {err}")?
            }
        }
        Ok(Flow::Continue)
    }

    fn search_contacts(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Search Contact ---")?;
        let Some(term) = self.prompt("Enter name or phone number to search: ")? else {
            return Ok(Flow::Exit);
        };

        let query = match SearchQuery::new(&term) {
            Ok(query) => query,
            Err(_) => {
                writeln!(self.output, "Search term cannot be empty.")?;
                return Ok(Flow::Continue);
            }
        };

        match self.service.search(&query) {
            Ok(outcome) => {
                write_search(&mut self.output, query.term(), &outcome, OutputFormat::Table)?
            }
            Err(err) => {
                warn!("event=menu_search module=cli status=error error={err}");
                writeln!(self.output, "Error searching contacts in file: {err}")?
            }
        }
        Ok(Flow::Continue)
    }

    /// Returns the trimmed reply, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
