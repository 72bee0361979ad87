//! Input validation: the gate in front of all date arithmetic.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::ScheduleError;
use crate::record::{BirthdayRecord, RawBirthday};

/// Validates raw birthday records into parsed ones, preserving input order.
///
/// Checks run per record, in input order, and short-circuit on the first
/// failure:
///
/// 1. the trimmed name is non-empty,
/// 2. the name has not been seen earlier in this input (exact,
///    case-sensitive match),
/// 3. the birthdate parses as a real `YYYY-MM-DD` calendar date
///    (`"2020-02-30"` and `"2020-13-01"` are rejected).
///
/// # Errors
///
/// Returns the first [`ScheduleError`] encountered; no partial result is
/// produced.
pub fn validate_records(records: &[RawBirthday]) -> Result<Vec<BirthdayRecord>, ScheduleError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut validated = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::EmptyName { index });
        }
        if !seen.insert(name) {
            return Err(ScheduleError::DuplicateName {
                name: name.to_string(),
            });
        }

        let value = record.birthdate.trim();
        let birthdate = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            ScheduleError::InvalidDate {
                value: value.to_string(),
            }
        })?;

        validated.push(BirthdayRecord {
            name: name.to_string(),
            birthdate,
        });
    }

    Ok(validated)
}
