//! The full pipeline and its caching object surface.

use tracing::debug;

use gateau_calendar::OfficeCalendar;

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::export::{export_schedule, CakeDay};
use crate::index::{index_birthdays, normalize_leap_day};
use crate::merge::{enforce_cake_free, merge_coincident};
use crate::record::RawBirthday;
use crate::stack::build_stack;
use crate::validate::validate_records;

/// Computes the cake-day schedule for one set of birthday records.
///
/// This is the whole engine as a pure function: validate, index, fold leap
/// days, resolve closures, place raw cake days across the target year and
/// its neighbours, run the coincidence and cake-free passes, and export the
/// target-year slice.
///
/// # Errors
///
/// Returns the first validation failure; no partial schedule accompanies
/// an error.
pub fn compute_cake_days(
    records: &[RawBirthday],
    config: &ScheduleConfig,
) -> Result<Vec<CakeDay>, ScheduleError> {
    let validated = validate_records(records)?;

    let mut index = index_birthdays(&validated);
    normalize_leap_day(&mut index, config.year());

    let office = OfficeCalendar::resolve(config.holidays(), config.year());

    let mut stack = build_stack(&index, &office, config.year());
    debug!(entries = stack.len(), "raw cake-day stack built");
    merge_coincident(&mut stack);
    enforce_cake_free(&mut stack, &office);

    Ok(export_schedule(stack, config.year()))
}

/// Object surface over [`compute_cake_days`] with a compute-once cache.
///
/// The first successful [`cake_days`](Self::cake_days) call freezes the
/// planner: the result is cached and later configuration calls are ignored.
/// Repeated reads therefore never re-run the pipeline and never observe a
/// different schedule. Callers that want different parameters build a new
/// planner (or use `compute_cake_days` directly).
#[derive(Debug, Clone)]
pub struct CakeDayPlanner {
    records: Vec<RawBirthday>,
    config: ScheduleConfig,
    cached: Option<Vec<CakeDay>>,
}

impl CakeDayPlanner {
    /// Creates a planner over one set of raw records with the default
    /// configuration.
    pub fn new(records: Vec<RawBirthday>) -> Self {
        Self {
            records,
            config: ScheduleConfig::new(),
            cached: None,
        }
    }

    /// Sets the target year. Ignored once a schedule has been computed.
    pub fn set_year(&mut self, year: i32) {
        if self.cached.is_some() {
            debug!(year, "planner is frozen, ignoring year change");
            return;
        }
        self.config = std::mem::take(&mut self.config).with_year(year);
    }

    /// Sets the holiday list. Ignored once a schedule has been computed.
    pub fn set_holidays<I, S>(&mut self, specs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.cached.is_some() {
            debug!("planner is frozen, ignoring holiday change");
            return;
        }
        self.config = std::mem::take(&mut self.config).with_holidays(specs);
    }

    /// The active configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the schedule, computing it on the first call.
    ///
    /// # Errors
    ///
    /// Returns the validation failure of the underlying pipeline. Failures
    /// are not cached: they are deterministic in the input, so a retry
    /// without changing the records fails identically.
    pub fn cake_days(&mut self) -> Result<&[CakeDay], ScheduleError> {
        if self.cached.is_none() {
            self.cached = Some(compute_cake_days(&self.records, &self.config)?);
        }
        Ok(self
            .cached
            .as_deref()
            .expect("cache was just populated above"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RawBirthday> {
        vec![RawBirthday::new("Andrew", "1979-10-21")]
    }

    #[test]
    fn computes_on_first_read() {
        let mut planner = CakeDayPlanner::new(records());
        planner.set_year(2020);
        let schedule = planner.cake_days().unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].names, ["Andrew"]);
    }

    #[test]
    fn year_change_after_read_is_ignored() {
        let mut planner = CakeDayPlanner::new(records());
        planner.set_year(2020);
        let first = planner.cake_days().unwrap().to_vec();

        planner.set_year(2021);
        assert_eq!(planner.config().year(), 2020);
        assert_eq!(planner.cake_days().unwrap(), first);
    }

    #[test]
    fn holiday_change_after_read_is_ignored() {
        let mut planner = CakeDayPlanner::new(records());
        planner.set_year(2020);
        let first = planner.cake_days().unwrap().to_vec();

        planner.set_holidays(["21 October", "22 October", "23 October"]);
        assert_eq!(planner.cake_days().unwrap(), first);
    }

    #[test]
    fn validation_failure_is_not_cached() {
        let mut planner = CakeDayPlanner::new(vec![
            RawBirthday::new("Dave", "1986-06-26"),
            RawBirthday::new("Dave", "1990-01-01"),
        ]);
        planner.set_year(2020);
        assert!(planner.cake_days().is_err());
        // Still unfrozen: configuration changes keep working.
        planner.set_year(2021);
        assert_eq!(planner.config().year(), 2021);
    }
}
