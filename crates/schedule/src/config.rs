//! Schedule configuration: target year and holiday set.

use chrono::Datelike;
use tracing::warn;

use gateau_calendar::{default_holidays, HolidaySpec};

/// Years the engine accepts as a target; anything else falls back to the
/// current calendar year.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=2999;

/// Target year and holiday set for one schedule computation.
///
/// Misconfiguration never errors: an out-of-range year keeps the default
/// (the current calendar year, resolved once at construction) and invalid
/// holiday descriptors are skipped with a warning. The schedule pipeline
/// itself is clock-free; this is the only place "now" is consulted.
///
/// # Example
///
/// ```ignore
/// use gateau_schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::new()
///     .with_year(2020)
///     .with_holidays(["1 January", "25 December", "26 December"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    year: i32,
    holidays: Vec<HolidaySpec>,
}

impl ScheduleConfig {
    /// Creates a configuration with the current calendar year and the
    /// default holiday set (New Year's Day, Christmas Day, Boxing Day).
    pub fn new() -> Self {
        Self {
            year: chrono::Utc::now().date_naive().year(),
            holidays: default_holidays(),
        }
    }

    /// Sets the target year.
    ///
    /// Values outside 1970..=2999 are ignored and the previous year (the
    /// current calendar year, unless set before) stays in effect.
    pub fn with_year(mut self, year: i32) -> Self {
        if YEAR_RANGE.contains(&year) {
            self.year = year;
        } else {
            warn!(year, "target year out of range, keeping {}", self.year);
        }
        self
    }

    /// Sets the holiday list from "day Month" descriptors.
    ///
    /// Descriptors that fail to parse are skipped with a warning, and
    /// duplicates are dropped while preserving first-seen order. An empty
    /// surviving list falls back to the default set, so the office never
    /// silently loses all its closures.
    pub fn with_holidays<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<HolidaySpec> = Vec::new();
        for spec in specs {
            match HolidaySpec::parse(spec.as_ref()) {
                Ok(holiday) => {
                    if !parsed.contains(&holiday) {
                        parsed.push(holiday);
                    }
                }
                Err(err) => warn!(%err, "skipping holiday spec"),
            }
        }
        self.holidays = if parsed.is_empty() {
            default_holidays()
        } else {
            parsed
        };
        self
    }

    /// The target year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The holiday specs, in configuration order.
    pub fn holidays(&self) -> &[HolidaySpec] {
        &self.holidays
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_holidays() {
        let config = ScheduleConfig::new();
        assert_eq!(config.holidays(), default_holidays());
        assert!(YEAR_RANGE.contains(&config.year()));
    }

    #[test]
    fn with_year_accepts_range() {
        assert_eq!(ScheduleConfig::new().with_year(2020).year(), 2020);
        assert_eq!(ScheduleConfig::new().with_year(1970).year(), 1970);
        assert_eq!(ScheduleConfig::new().with_year(2999).year(), 2999);
    }

    #[test]
    fn with_year_ignores_out_of_range() {
        let default_year = ScheduleConfig::new().year();
        assert_eq!(ScheduleConfig::new().with_year(1969).year(), default_year);
        assert_eq!(ScheduleConfig::new().with_year(3000).year(), default_year);
        // An earlier valid value survives a later invalid one.
        assert_eq!(
            ScheduleConfig::new().with_year(2020).with_year(-5).year(),
            2020
        );
    }

    #[test]
    fn with_holidays_parses_descriptors() {
        let config = ScheduleConfig::new().with_holidays(["4 July", "25 December"]);
        let rendered: Vec<String> = config.holidays().iter().map(|h| h.to_string()).collect();
        assert_eq!(rendered, ["4 July", "25 December"]);
    }

    #[test]
    fn with_holidays_skips_invalid_entries() {
        let config = ScheduleConfig::new().with_holidays(["4 July", "32 Nowhere"]);
        assert_eq!(config.holidays().len(), 1);
    }

    #[test]
    fn with_holidays_deduplicates() {
        let config = ScheduleConfig::new().with_holidays(["25 December", "25 december"]);
        assert_eq!(config.holidays().len(), 1);
    }

    #[test]
    fn all_invalid_falls_back_to_defaults() {
        let config = ScheduleConfig::new().with_holidays(["nonsense"]);
        assert_eq!(config.holidays(), default_holidays());
    }

    #[test]
    fn empty_list_falls_back_to_defaults() {
        let config = ScheduleConfig::new().with_holidays(Vec::<String>::new());
        assert_eq!(config.holidays(), default_holidays());
    }
}
