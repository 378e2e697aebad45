//! In-memory store of contacts keyed by name.

use crate::domain::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Local, NaiveDate};
use indexmap::IndexMap;
use tracing::{debug, info};

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The occurrence inside the window, formatted `DD.MM.YYYY`
    pub congratulation_date: String,
}

/// All contacts, keyed by `Record::name`.
///
/// Lookups are hashed; `iter` follows insertion order. Mutation is
/// only possible through `add_record`, `find_mut` and `delete`, so a key
/// always matches the name of the record it maps to.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position in `iter`.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            debug!(name = %key, "Inserted new record");
        } else {
            debug!(name = %key, "Replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access for in-place phone and birthday edits.
    ///
    /// `Record` has no name setter, so the key invariant survives.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        if self.records.shift_remove(name).is_none() {
            return Err(BookError::NotFound("Name not found".to_string()));
        }
        info!(name, "Deleted record");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Birthdays within `window_days` of the local date, inclusive.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays falling in `[today, today + window_days]`.
    ///
    /// Each birthday is projected onto `today`'s year, or onto the next year
    /// if that date has already passed. Records without a birthday are
    /// skipped. Results follow insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.occurrence_in(today.year())?;
                let next = if this_year < today {
                    birthday.occurrence_in(today.year() + 1)?
                } else {
                    this_year
                };

                let days_until = (next - today).num_days();
                (days_until <= window).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: next.format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }
}
