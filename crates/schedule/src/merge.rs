//! The two reconciliation passes over the cake-day stack.
//!
//! Both passes walk a snapshot of the keys in ascending date order with a
//! one-shot skip flag: after a day is merged away, the day it merged into
//! is not itself treated as a "today" in the same pass. Runs of three or
//! more adjacent days therefore collapse pairwise, not transitively; the
//! cake-free pass then relocates the survivors.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use gateau_calendar::{next_day, prev_day, OfficeCalendar};

use crate::index::NameSet;

/// Merges each cake day into the day after it when both hold cake.
///
/// Two cake days in a row become one large cake on the second day: today's
/// names move into tomorrow's entry and today's entry is deleted.
pub fn merge_coincident(stack: &mut BTreeMap<NaiveDate, NameSet>) {
    let dates: Vec<NaiveDate> = stack.keys().copied().collect();
    let mut skip = false;
    for date in dates {
        if skip {
            skip = false;
            continue;
        }
        let tomorrow = next_day(date);
        if stack.contains_key(&tomorrow) {
            if let Some(names) = stack.remove(&date) {
                stack.entry(tomorrow).or_default().extend(names);
                skip = true;
            }
        }
    }
}

/// Relocates any cake day that immediately follows another one.
///
/// The day after a cake day is cake-free: a violating day's names move to
/// the next working day (merging into whatever is already there) and the
/// violating entry is deleted. This can push cake across a weekend or a
/// closure block, and across a year boundary.
pub fn enforce_cake_free(stack: &mut BTreeMap<NaiveDate, NameSet>, office: &OfficeCalendar) {
    let dates: Vec<NaiveDate> = stack.keys().copied().collect();
    let mut skip = false;
    for date in dates {
        if skip {
            skip = false;
            continue;
        }
        if stack.contains_key(&prev_day(date)) {
            if let Some(names) = stack.remove(&date) {
                let target = office.next_working_day(date);
                stack.entry(target).or_default().extend(names);
                skip = true;
            }
        }
    }
}
