//! Error types for the gateau-calendar crate.

/// Error type for all fallible operations in the gateau-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values
/// and "day Month" holiday descriptors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a holiday descriptor cannot be parsed as "day Month".
    #[error("invalid holiday spec: {spec:?} (expected \"day Month\", e.g. \"25 December\")")]
    InvalidHoliday {
        /// The descriptor that failed to parse.
        spec: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_invalid_holiday() {
        let err = CalendarError::InvalidHoliday {
            spec: "25 Frimaire".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid holiday spec: \"25 Frimaire\" (expected \"day Month\", e.g. \"25 December\")"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
