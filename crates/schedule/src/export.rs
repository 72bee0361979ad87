//! Final schedule entries: the target-year slice of the stack.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::index::NameSet;

/// One cake day in the final schedule.
///
/// Exactly one of `small` and `large` is 1: a single recipient gets a small
/// cake, two or more share a large one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CakeDay {
    /// The date the cake is provided.
    pub date: NaiveDate,
    /// 1 when exactly one person receives cake on this day.
    pub small: u8,
    /// 1 when two or more people share the cake.
    pub large: u8,
    /// Recipients, deduplicated and alphabetically sorted.
    pub names: Vec<String>,
}

/// Filters the reconciled stack down to the target year and classifies
/// each entry, in ascending date order.
pub fn export_schedule(stack: BTreeMap<NaiveDate, NameSet>, target_year: i32) -> Vec<CakeDay> {
    stack
        .into_iter()
        .filter(|(date, _)| date.year() == target_year)
        .map(|(date, names)| {
            let single = names.len() == 1;
            CakeDay {
                date,
                small: u8::from(single),
                large: u8::from(!single),
                names: names.into_iter().collect(),
            }
        })
        .collect()
}
