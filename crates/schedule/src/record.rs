//! Birthday record types.

use chrono::NaiveDate;

/// An unvalidated birthday record, as produced by an input reader.
///
/// The birthdate is still a string at this point; parsing it is the
/// validator's job so that a malformed date surfaces as a schedule error
/// rather than an I/O error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBirthday {
    /// Employee name, expected to be unique across one input set.
    pub name: String,
    /// Birthdate in `YYYY-MM-DD` form.
    pub birthdate: String,
}

impl RawBirthday {
    /// Creates a raw record from name and birthdate strings.
    pub fn new(name: impl Into<String>, birthdate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthdate: birthdate.into(),
        }
    }
}

/// A validated birthday record: trimmed non-empty name, parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    /// Employee name, trimmed, unique within the validated set.
    pub name: String,
    /// Parsed birthdate.
    pub birthdate: NaiveDate,
}
