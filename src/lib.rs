//! Contact Assistant - an interactive command-line address book.
//!
//! Contacts live in memory for the lifetime of the process. Each contact has
//! a unique name, any number of ten-digit phone numbers, and an optional
//! birthday, and the assistant can list birthdays coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **commands**: Input parsing, command handlers, and the dispatcher
//! - **cli**: The read-dispatch-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use cli::{Repl, State};
pub use commands::{dispatch, parse_input, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Record, UpcomingBirthday};
