//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact attributes: names,
//! phone numbers, and birthdays. These value objects validate at
//! construction time so invalid data cannot be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
