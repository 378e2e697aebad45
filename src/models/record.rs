//! A single contact entry.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        self.push_phone(Phone::new(value)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: Phone) {
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `value`. Absent phones are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(idx) = self.position_of(value) {
            self.phones.remove(idx);
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no phone equals `old`
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let idx = self
            .position_of(old)
            .ok_or_else(|| BookError::NotFound("This number does not exist".to_string()))?;
        self.phones[idx] = Phone::new(new)?;
        debug!(contact = %self.name, old, new, "Edited phone");
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse `value` as `DD.MM.YYYY` and set it, replacing any previous birthday.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
