//! The capability shared by every typed contact attribute.

use std::fmt;

/// A single validated value attached to a contact.
///
/// Implementors hold exactly one value and render it through `Display`.
pub trait Field: fmt::Display {
    /// The wrapped value type.
    type Value;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;
}
