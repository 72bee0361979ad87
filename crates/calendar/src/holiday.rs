//! Holiday specifications in "day Month" form.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::month_day::MonthDay;

/// English month names, lowercase, index 0 = January.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Display forms of the month names, index 0 = January.
const MONTH_NAMES_DISPLAY: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A recurring office holiday, specified as a day and month.
///
/// Holidays are parsed from "day Month" descriptors such as `"25 December"`
/// and re-materialized in concrete years by the closure resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidaySpec {
    month_day: MonthDay,
}

impl HolidaySpec {
    /// Creates a holiday spec from a day and month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// for out-of-range values.
    pub fn new(day: u8, month: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            month_day: MonthDay::new(month, day)?,
        })
    }

    /// Parses a "day Month" descriptor such as `"25 December"`.
    ///
    /// The month name is matched case-insensitively against the full
    /// English names.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHoliday`] when the descriptor does
    /// not have the two-token shape or names an impossible date.
    pub fn parse(spec: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidHoliday {
            spec: spec.to_string(),
        };

        let mut tokens = spec.split_whitespace();
        let day_token = tokens.next().ok_or_else(invalid)?;
        let month_token = tokens.next().ok_or_else(invalid)?;
        if tokens.next().is_some() {
            return Err(invalid());
        }

        let day: u8 = day_token.parse().map_err(|_| invalid())?;
        let lowered = month_token.to_lowercase();
        let month = MONTH_NAMES
            .iter()
            .position(|name| *name == lowered)
            .ok_or_else(invalid)? as u8
            + 1;

        Self::new(day, month).map_err(|_| invalid())
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.month_day.day()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month_day.month()
    }

    /// Materializes the holiday in a concrete year.
    ///
    /// A February 29 spec resolves to March 1 in common years, the same
    /// rule month-day keys follow.
    pub fn date_in(self, year: i32) -> NaiveDate {
        self.month_day.resolve_in_year(year)
    }
}

impl std::fmt::Display for HolidaySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month_name = MONTH_NAMES_DISPLAY[usize::from(self.month()) - 1];
        write!(f, "{} {}", self.day(), month_name)
    }
}

/// The default closure set: New Year's Day, Christmas Day and Boxing Day.
pub fn default_holidays() -> Vec<HolidaySpec> {
    // Literal day/month pairs, valid by inspection.
    [(1, 1), (25, 12), (26, 12)]
        .into_iter()
        .map(|(day, month)| HolidaySpec::new(day, month).expect("default holidays are valid"))
        .collect()
}
