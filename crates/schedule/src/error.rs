//! Error types for the gateau-schedule crate.

/// Error type for cake-day computation.
///
/// All three variants are detected during input validation, before any date
/// arithmetic runs, and all are fatal: no partial schedule is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a record's name is empty after trimming.
    #[error("empty name in record {index}")]
    EmptyName {
        /// Zero-based position of the offending record in the input.
        index: usize,
    },

    /// Returned when a name occurs more than once in the input.
    #[error("duplicate name: {name:?}")]
    DuplicateName {
        /// The name that was seen before.
        name: String,
    },

    /// Returned when a birthdate is not a real `YYYY-MM-DD` calendar date.
    #[error("invalid birthdate: {value:?} (expected a real YYYY-MM-DD date)")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_name() {
        let err = ScheduleError::EmptyName { index: 3 };
        assert_eq!(err.to_string(), "empty name in record 3");
    }

    #[test]
    fn error_duplicate_name() {
        let err = ScheduleError::DuplicateName {
            name: "Dave".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate name: \"Dave\"");
    }

    #[test]
    fn error_invalid_date() {
        let err = ScheduleError::InvalidDate {
            value: "1979-19-26".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid birthdate: \"1979-19-26\" (expected a real YYYY-MM-DD date)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ScheduleError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ScheduleError>();
    }
}
