//! # gateau-calendar
//!
//! Office calendar rules on top of the proleptic Gregorian calendar:
//! year-free month-day keys, "day Month" holiday specs, concrete closure
//! resolution and working-day arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"25 December\""] -->|"HolidaySpec::parse()"| B["HolidaySpec"]
//!     B -->|"OfficeCalendar::resolve()"| C["OfficeCalendar"]
//!     C -->|".is_working_day()"| D["bool"]
//!     C -->|".next_working_day()"| E["NaiveDate"]
//!     F["NaiveDate"] -->|"MonthDay::from_date()"| G["MonthDay"]
//!     G -->|".resolve_in_year()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use gateau_calendar::{default_holidays, MonthDay, OfficeCalendar};
//!
//! // Closures for 2019..=2021, weekend-falling holidays rolled forward.
//! let office = OfficeCalendar::resolve(&default_holidays(), 2020);
//! assert!(!office.is_working_day(chrono::NaiveDate::from_ymd_opt(2020, 12, 25).unwrap()));
//!
//! // Month-day keys strip the year and re-materialize in any year.
//! let key = MonthDay::new(2, 29)?;
//! let in_common_year = key.resolve_in_year(2021); // March 1
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | Year-free month-day keys and the leap-year rule |
//! | `holiday` | "day Month" holiday specs and the default closure set |
//! | `office` | Closure resolution and the working-day oracle |
//! | `error` | Error types |

mod error;
mod holiday;
mod month_day;
mod office;

pub use error::CalendarError;
pub use holiday::{default_holidays, HolidaySpec};
pub use month_day::{is_leap_year, MonthDay};
pub use office::{next_day, prev_day, OfficeCalendar};
