//! Command handlers.
//!
//! Each handler takes the positional arguments (and the address book where
//! needed) and returns the text to show the user. Failures are returned as
//! `BookError` and turned into text by `commands::dispatch`.

use crate::domain::{Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record, UpcomingBirthday};
use tracing::{debug, info};

pub const NO_DATA: &str = "No data available";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Return the first `N` arguments, or `MissingArguments` with `usage`.
fn require<'a, const N: usize>(args: &'a [String], usage: &str) -> BookResult<[&'a str; N]> {
    if args.len() < N {
        return Err(BookError::MissingArguments(usage.to_string()));
    }
    Ok(std::array::from_fn(move |i| args[i].as_str()))
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact if needed and attach the phone.
///
/// A phone already on the record is not added a second time.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = require::<2>(args, "Give me name and phone please.")?;
    // Reject a bad phone before a new record is created for it
    let phone = Phone::new(phone)?;

    let message = match book.find_mut(name) {
        Some(record) => {
            if record.find_phone(phone.as_str()).is_none() {
                record.push_phone(phone);
            } else {
                debug!(name, phone = %phone, "Phone already recorded");
            }
            "Contact updated."
        }
        None => {
            let mut record = Record::new(Name::new(name)?);
            record.push_phone(phone);
            book.add_record(record);
            "Contact added."
        }
    };

    info!(name, "{}", message);
    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] =
        require::<3>(args, "Give me name, old phone and new phone please.")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::NotFound(CONTACT_NOT_FOUND.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show the contact with all of its phones.
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let Some(name) = args.first() else {
        return Ok("Enter user name.".to_string());
    };

    book.find(name)
        .map(Record::to_string)
        .ok_or_else(|| BookError::NotFound(CONTACT_NOT_FOUND.to_string()))
}

/// `all`: every contact, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok(NO_DATA.to_string());
    }

    let lines: Vec<String> = book.iter().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, date] = require::<2>(args, "Give me name and birthday please.")?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.add_birthday(date)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = require::<1>(args, "Enter user name.")?;

    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not found.".to_string(),
    })
}

/// `birthdays`: one `<name>: <DD.MM.YYYY>` line per contact to congratulate.
pub fn birthdays(upcoming: &[UpcomingBirthday]) -> BookResult<String> {
    if upcoming.is_empty() {
        return Ok(NO_DATA.to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_require_exact_and_extra() {
        let a = args(&["John", "1234567890", "extra"]);
        let [name, phone] = require::<2>(&a, "usage").unwrap();
        assert_eq!((name, phone), ("John", "1234567890"));

        let err = require::<2>(&a[..1], "usage").unwrap_err();
        assert_eq!(err, BookError::MissingArguments("usage".to_string()));
    }

    #[test]
    fn test_add_contact_does_not_duplicate() {
        let mut book = AddressBook::new();
        let a = args(&["John", "1234567890"]);

        assert_eq!(add_contact(&a, &mut book).unwrap(), "Contact added.");
        assert_eq!(add_contact(&a, &mut book).unwrap(), "Contact updated.");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["John", "12"]), &mut book).unwrap_err();

        assert_eq!(err.kind(), "ValidationError");
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_add_contact_second_phone_for_existing_record() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();

        let err = add_contact(&args(&["John", "bad"]), &mut book).unwrap_err();
        assert_eq!(err.kind(), "ValidationError");

        assert_eq!(
            add_contact(&args(&["John", "2222222222"]), &mut book).unwrap(),
            "Contact updated."
        );
        let phones: Vec<&str> = book
            .find("John")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        assert_eq!(phones, vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = AddressBook::new();
        let err = change_contact(&args(&["Ghost", "1111111111", "2222222222"]), &mut book)
            .unwrap_err();
        assert_eq!(err, BookError::NotFound(CONTACT_NOT_FOUND.to_string()));
    }

    #[test]
    fn test_show_phone_without_name() {
        let book = AddressBook::new();
        assert_eq!(show_phone(&[], &book).unwrap(), "Enter user name.");
    }

    #[test]
    fn test_show_birthday_missing() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();

        assert_eq!(
            show_birthday(&args(&["John"]), &book).unwrap(),
            "Birthday not found."
        );
        assert_eq!(
            show_birthday(&args(&["Ghost"]), &book).unwrap(),
            CONTACT_NOT_FOUND
        );
    }

    #[test]
    fn test_birthdays_lists_window() {
        use chrono::NaiveDate;

        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        add_birthday(&args(&["John", "05.06.1990"]), &mut book).unwrap();
        add_contact(&args(&["Jane", "5555555555"]), &mut book).unwrap();
        add_birthday(&args(&["Jane", "10.06.1990"]), &mut book).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            birthdays(&book.upcoming_birthdays_from(today, 7)).unwrap(),
            "John: 05.06.2024"
        );
        assert_eq!(
            birthdays(&book.upcoming_birthdays_from(today, 9)).unwrap(),
            "John: 05.06.2024\nJane: 10.06.2024"
        );

        let later = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(
            birthdays(&book.upcoming_birthdays_from(later, 7)).unwrap(),
            NO_DATA
        );
    }
}
