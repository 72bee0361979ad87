//! Office closure resolution and working-day arithmetic.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::holiday::HolidaySpec;

/// Returns the calendar day after `date`.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt()
        .expect("date arithmetic stays within chrono's supported range")
}

/// Returns the calendar day before `date`.
pub fn prev_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt()
        .expect("date arithmetic stays within chrono's supported range")
}

/// Concrete office closures for a target year and its two neighbours,
/// plus the working-day predicate built on top of them.
///
/// Weekends are not stored: the office is implicitly closed on Saturday and
/// Sunday, and [`is_working_day`](Self::is_working_day) folds both rules
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeCalendar {
    closures: BTreeSet<NaiveDate>,
}

impl OfficeCalendar {
    /// Expands holiday specs into concrete closure dates for
    /// `target_year - 1`, `target_year` and `target_year + 1`.
    ///
    /// Specs are materialized year by year in list order. A holiday landing
    /// on a day that is already non-working (weekend, or a closure resolved
    /// earlier) is rolled forward to the next working day, so the office
    /// never loses a closure to a weekend. The neighbouring years are
    /// included because birthdays near a year boundary can postpone cake
    /// into the adjacent year.
    pub fn resolve(specs: &[HolidaySpec], target_year: i32) -> Self {
        let mut calendar = Self::default();
        for year in (target_year - 1)..=(target_year + 1) {
            for spec in specs {
                let date = spec.date_in(year);
                let closure = if calendar.is_working_day(date) {
                    date
                } else {
                    calendar.next_working_day(date)
                };
                calendar.closures.insert(closure);
                if closure != date {
                    debug!(holiday = %spec, %date, observed = %closure, "holiday rolled forward");
                }
            }
        }
        calendar
    }

    /// Returns `true` when the office is open on `date`: not a Saturday or
    /// Sunday and not a resolved closure.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.closures.contains(&date)
    }

    /// Returns the first working day strictly after `date`.
    pub fn next_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut day = next_day(date);
        while !self.is_working_day(day) {
            day = next_day(day);
        }
        day
    }

    /// Returns the second working day strictly after `date`.
    pub fn next_next_working_day(&self, date: NaiveDate) -> NaiveDate {
        self.next_working_day(self.next_working_day(date))
    }

    /// The resolved closure dates in ascending order.
    pub fn closures(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.closures.iter().copied()
    }
}
