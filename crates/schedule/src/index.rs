//! Grouping birthdays by month-day and folding leap days.

use std::collections::{BTreeMap, BTreeSet};

use gateau_calendar::{is_leap_year, MonthDay};

use crate::record::BirthdayRecord;

/// Names grouped per cake-relevant date or month-day.
///
/// `BTreeSet` carries the NameSet invariant: deduplicated and
/// alphabetically sorted.
pub type NameSet = BTreeSet<String>;

/// Strips years from validated records and groups names per month-day.
///
/// People born on the same month-day (any year) share one entry. The
/// `BTreeMap` iterates keys in calendar order, which the stack builder
/// relies on.
pub fn index_birthdays(records: &[BirthdayRecord]) -> BTreeMap<MonthDay, NameSet> {
    let mut index: BTreeMap<MonthDay, NameSet> = BTreeMap::new();
    for record in records {
        index
            .entry(MonthDay::from_date(record.birthdate))
            .or_default()
            .insert(record.name.clone());
    }
    index
}

/// Folds a February 29 entry into March 1 when the target year is common.
///
/// A leap-day birthday must still resolve deterministically in non-leap
/// years; treating it as March 1 keeps every later stage oblivious to the
/// distinction. In a leap target year the entry is left alone.
pub fn normalize_leap_day(index: &mut BTreeMap<MonthDay, NameSet>, target_year: i32) {
    if is_leap_year(target_year) {
        return;
    }
    let feb_29 = MonthDay::new(2, 29).expect("February 29 is a valid key");
    if let Some(names) = index.remove(&feb_29) {
        let mar_1 = MonthDay::new(3, 1).expect("March 1 is a valid key");
        index.entry(mar_1).or_default().extend(names);
    }
}
