//! Raw cake-day placement: birthdays to first-eligible working days.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use gateau_calendar::{MonthDay, OfficeCalendar};

use crate::index::NameSet;

/// Maps every birthday onto its raw cake-day date.
///
/// Each month-day key is re-materialized in `target_year - 1`, `target_year`
/// and `target_year + 1`: a birthday's cake day, or a closure-driven
/// postponement, can land in the neighbouring year, and entries there must
/// exist for the merge passes to see cross-boundary adjacency.
///
/// Placement rule: the birthday itself is always taken as a day off. On a
/// working-day birthday the cake lands on the next working day; when the
/// office is closed on the birthday the day off shifts too, and the cake
/// lands on the working day after that.
pub fn build_stack(
    index: &BTreeMap<MonthDay, NameSet>,
    office: &OfficeCalendar,
    target_year: i32,
) -> BTreeMap<NaiveDate, NameSet> {
    let mut stack: BTreeMap<NaiveDate, NameSet> = BTreeMap::new();
    for (month_day, names) in index {
        for year in (target_year - 1)..=(target_year + 1) {
            let birthdate = month_day.resolve_in_year(year);
            let cake_day = if office.is_working_day(birthdate) {
                office.next_working_day(birthdate)
            } else {
                office.next_next_working_day(birthdate)
            };
            stack
                .entry(cake_day)
                .or_default()
                .extend(names.iter().cloned());
        }
    }
    stack
}
