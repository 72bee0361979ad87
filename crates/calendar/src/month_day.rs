//! Year-free month-day keys and leap-year arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Number of days in each month (index 0 unused, index 1 = January, ...,
/// index 12 = December). February carries 29 because a month-day key must
/// be able to represent a leap-day birthday.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date with the year stripped, used to group birthdays.
///
/// Ordering is `(month, day)`, so a `BTreeMap` keyed by `MonthDay` iterates
/// in calendar order from January 1 to December 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay` from a month and day number.
    ///
    /// February 29 is accepted: the key space must cover leap-day birthdays
    /// even though not every year can materialize them.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Strips the year from a concrete date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=29/30/31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Materializes this month-day in a concrete year.
    ///
    /// February 29 resolves to March 1 in a common year, so a leap-day key
    /// stays resolvable when the surrounding years of a leap target year
    /// are processed.
    pub fn resolve_in_year(self, year: i32) -> NaiveDate {
        let (month, day) = if self.month == 2 && self.day == 29 && !is_leap_year(year) {
            (3, 1)
        } else {
            (self.month, self.day)
        };
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .expect("MonthDay is validated on construction")
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Proleptic Gregorian leap-year rule: divisible by 4, not by 100 unless
/// also by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
