//! Error types for gateau-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the gateau-io crate.
///
/// Covers missing or unreadable files and rows that do not have the
/// expected CSV shape. Whether the *contents* of a row make sense is the
/// schedule engine's concern, not this crate's.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the input file contains no records at all.
    #[error("no records in {}", path.display())]
    EmptyInput {
        /// Path to the empty file.
        path: PathBuf,
    },

    /// Returned when a row does not carry at least a name and a date field.
    #[error("malformed row at line {line}: expected \"name,YYYY-MM-DD\"")]
    MalformedRow {
        /// One-based line number of the offending row.
        line: usize,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("birthdays.csv"),
        };
        assert_eq!(err.to_string(), "file not found: birthdays.csv");
    }

    #[test]
    fn error_malformed_row() {
        let err = IoError::MalformedRow { line: 3 };
        assert_eq!(
            err.to_string(),
            "malformed row at line 3: expected \"name,YYYY-MM-DD\""
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
