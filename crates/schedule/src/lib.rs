//! # gateau-schedule
//!
//! The cake-day rule engine. Takes raw `(name, birthdate)` records and a
//! target year, applies the office's calendar and health rules, and emits
//! a validated, date-ordered schedule of small and large cakes.
//!
//! The pipeline runs nine stages in a fixed order, each consuming the
//! previous stage's structure:
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Validate | `validate` | reject malformed, duplicate or empty records |
//! | Index | `index` | strip years, group names per month-day |
//! | Leap fix | `index` | fold Feb 29 into Mar 1 in common target years |
//! | Closures | via `gateau-calendar` | expand holidays across target ± 1 |
//! | Place | `stack` | raw cake days on first eligible working days |
//! | Coincide | `merge` | two cake days in a row become one large cake |
//! | Cake-free | `merge` | relocate cake that follows a cake day |
//! | Export | `export` | target-year slice, small/large classification |
//!
//! # Quick start
//!
//! ```ignore
//! use gateau_schedule::{compute_cake_days, RawBirthday, ScheduleConfig};
//!
//! let records = vec![RawBirthday::new("Andrew", "1979-10-21")];
//! let config = ScheduleConfig::new().with_year(2020);
//!
//! let schedule = compute_cake_days(&records, &config)?;
//! assert_eq!(schedule[0].date.to_string(), "2020-10-22");
//! ```
//!
//! The engine is a pure function over `(records, config)`; the
//! [`CakeDayPlanner`] wrapper adds a compute-once cache for callers that
//! prefer an object surface.

mod config;
mod error;
mod export;
mod index;
mod merge;
mod planner;
mod record;
mod stack;
mod validate;

pub use config::ScheduleConfig;
pub use error::ScheduleError;
pub use export::CakeDay;
pub use index::NameSet;
pub use planner::{compute_cake_days, CakeDayPlanner};
pub use record::{BirthdayRecord, RawBirthday};
pub use validate::validate_records;
