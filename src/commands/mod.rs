//! Command layer: parsing, handlers, and the dispatcher that turns every
//! handler failure into user-facing text.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use crate::error::BookResult;
use crate::models::AddressBook;
use tracing::warn;

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(msg) | Self::Exit(msg) => msg,
        }
    }
}

/// Format a handler outcome, rendering errors as `"<ErrorKind>: <message>"`.
pub fn render(result: BookResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Command failed");
            format!("{}: {}", e.kind(), e)
        }
    }
}

/// Run `command` against `book`.
///
/// This never fails: handler errors come back as text inside the reply.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    window_days: u32,
) -> Reply {
    let result = match command {
        Command::Exit => return Reply::Exit("Good bye!".to_string()),
        Command::Unknown => return Reply::Continue("Invalid command.".to_string()),
        Command::Hello => Ok(handlers::hello()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(&book.get_upcoming_birthdays(window_days)),
    };
    Reply::Continue(render(result))
}
