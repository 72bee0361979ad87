//! CSV reader for birthday records.

use std::path::Path;

use gateau_schedule::RawBirthday;

use crate::error::IoError;

/// Reads a headerless `name,YYYY-MM-DD` CSV file into raw records.
///
/// Fields are trimmed; rows may carry extra columns, which are ignored.
/// Only the CSV *shape* is checked here — date syntax and name uniqueness
/// are validated by the schedule engine so that they surface under its
/// error taxonomy.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing path,
/// [`IoError::MalformedRow`] when a row has fewer than two fields, and
/// [`IoError::EmptyInput`] when the file holds no records.
pub fn read_birthdays(path: &Path) -> Result<Vec<RawBirthday>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| IoError::Csv {
            reason: e.to_string(),
        })?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| IoError::Csv {
            reason: e.to_string(),
        })?;
        if row.len() < 2 {
            return Err(IoError::MalformedRow { line: index + 1 });
        }
        records.push(RawBirthday::new(&row[0], &row[1]));
    }

    if records.is_empty() {
        return Err(IoError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(records)
}
