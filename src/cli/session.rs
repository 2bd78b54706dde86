//! Interactive prompt session
//!
//! Reads commands line by line, runs them against the address book, and
//! writes a reply for each. Errors from the service layer are rendered here;
//! nothing short of an I/O failure ends the session early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::command::{Command, ParseError};
use crate::book::AddressBook;
use crate::config::Settings;
use crate::display::{format_birthday_list, format_contact_list, format_help};
use crate::error::{ContactError, ContactResult, Field};
use crate::services::{AddOutcome, ContactService};

/// What the session does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),
    /// End the session
    Exit,
}

/// Today's date in local time
fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fixed message for a rejected field value
pub fn validation_message(field: Field) -> &'static str {
    match field {
        Field::Name => "The name must include letters only.",
        Field::Phone => "The phone must consist of 10 digits.",
        Field::Birthday => "Invalid date format. Use DD.MM.YYYY",
    }
}

/// Render errors that every command reports the same way
fn render_error(err: &ContactError) -> String {
    match err {
        ContactError::InvalidValue { field, .. } => validation_message(*field).to_string(),
        ContactError::NotFound {
            entity_type: "Phone",
            identifier,
        } => format!("Phone number {} not found", identifier),
        ContactError::NotFound { .. } => "Contact not found".to_string(),
        ContactError::Io(msg) => msg.clone(),
    }
}

/// A prompt session over one address book
pub struct Session {
    book: AddressBook,
    settings: Settings,
    clock: fn() -> NaiveDate,
}

impl Session {
    /// Create a session with an empty address book
    pub fn new(settings: Settings) -> Self {
        Self::with_book(AddressBook::new(), settings)
    }

    /// Create a session over an existing address book
    pub fn with_book(book: AddressBook, settings: Settings) -> Self {
        Self {
            book,
            settings,
            clock: local_today,
        }
    }

    /// Replace the source of "today" used by the birthdays command
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// The address book
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run the prompt loop until `exit`/`close` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> ContactResult<()> {
        info!("session started");
        writeln!(output, "{}", self.settings.greeting)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                break;
            }

            // Undecodable bytes become U+FFFD and fall through to "Invalid command."
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Some(Reply::Continue(message)) => writeln!(output, "{}", message)?,
                Some(Reply::Exit) => break,
                None => {}
            }
        }

        writeln!(output, "{}", self.settings.farewell)?;
        info!(contacts = self.book.len(), "session ended");
        Ok(())
    }

    /// Parse and execute one line; `None` for blank lines
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match Command::parse(line) {
            Ok(command) => Some(self.execute(command)),
            Err(ParseError::Empty) => None,
            Err(err) => {
                warn!(input = line.trim(), error = ?err, "rejected input");
                Some(Reply::Continue(err.to_string()))
            }
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Reply {
        let today = (self.clock)();
        let list_format = self.settings.birthday_list_format.clone();
        let mut service = ContactService::new(&mut self.book);

        let message = match command {
            Command::Exit => return Reply::Exit,

            Command::Hello => "How can I help you?".to_string(),

            Command::Help => format_help(),

            Command::Add { name, phone } => match service.add_contact(&name, &phone) {
                Ok(AddOutcome::Added) => "Contact added.".to_string(),
                Ok(AddOutcome::Updated) => "Contact updated.".to_string(),
                Err(err) => render_error(&err),
            },

            Command::Change { name, old, new } => match service.change_contact(&name, &old, &new) {
                Ok(()) => "Contact updated successfully".to_string(),
                Err(ContactError::NotFound {
                    entity_type: "Phone",
                    ..
                }) => "Old phone number not found for this contact".to_string(),
                Err(err) => render_error(&err),
            },

            Command::Phone { name } => match service.show_phone(&name) {
                Ok(record) => record.phones_line(),
                Err(err) => render_error(&err),
            },

            Command::All => format_contact_list(&service.all()),

            Command::AddBirthday { name, date } => match service.add_birthday(&name, &date) {
                Ok(()) => "Birthday added.".to_string(),
                Err(err) => render_error(&err),
            },

            Command::ShowBirthday { name } => match service.show_birthday(&name) {
                Ok(Some(birthday)) => format!("{}'s birthday: {}", name, birthday),
                Ok(None) => format!("{} doesn't have a birthday set.", name),
                Err(err) => render_error(&err),
            },

            Command::Birthdays => format_birthday_list(&service.birthdays(today), &list_format),

            Command::RemovePhone { name, phone } => match service.remove_phone(&name, &phone) {
                Ok(removed) => format!("Phone number {} deleted", removed),
                Err(err) => render_error(&err),
            },

            Command::Delete { name } => match service.delete_contact(&name) {
                Ok(_) => format!("Record {} deleted", name),
                Err(err) => render_error(&err),
            },
        };

        Reply::Continue(message)
    }
}
