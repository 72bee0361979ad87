//! Pure conversion functions: TOML config structs -> crate API config types.

use gateau_schedule::ScheduleConfig;

use crate::config::ScheduleToml;

/// Builds a [`ScheduleConfig`] from the TOML schedule section plus an
/// optional CLI year override (the override wins).
///
/// Out-of-range years and unparseable holiday descriptors are handled by
/// the engine's own fallback rules rather than rejected here.
pub fn build_schedule_config(toml: &ScheduleToml, year_override: Option<i32>) -> ScheduleConfig {
    let mut config = ScheduleConfig::new();
    if let Some(year) = year_override.or(toml.year) {
        config = config.with_year(year);
    }
    if !toml.holidays.is_empty() {
        config = config.with_holidays(&toml.holidays);
    }
    config
}
