//! Interactive command loop.
//!
//! Reads one line at a time, dispatches it, and prints the reply until an
//! exit command (or end of input) arrives.

use crate::commands::{dispatch, parse_input, Reply};
use crate::models::AddressBook;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Lifecycle of the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// The command loop and the address book it owns.
pub struct Repl<R, W> {
    input: R,
    output: W,
    book: AddressBook,
    window_days: u32,
    state: State,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, window_days: u32) -> Self {
        Self {
            input,
            output,
            book: AddressBook::new(),
            window_days,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Print the greeting and process lines until terminated.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", GREETING)?;
        while self.state == State::Running {
            self.step()?;
        }
        info!(contacts = self.book.len(), "Command loop finished");
        Ok(())
    }

    /// Prompt, read one line, and handle it.
    ///
    /// End of input terminates the loop without printing a reply.
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Terminated {
            return Ok(self.state);
        }

        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(self.output)?;
            self.state = State::Terminated;
            return Ok(self.state);
        }

        let (command, args) = parse_input(&line);
        debug!(?command, argc = args.len(), "Dispatching");

        let reply = dispatch(command, &args, &mut self.book, self.window_days);
        writeln!(self.output, "{}", reply.message())?;

        if let Reply::Exit(_) = reply {
            self.state = State::Terminated;
        }
        Ok(self.state)
    }
}
