//! # leavemax-calendar
//!
//! Classifies each date of a range as a day off (weekend or public holiday)
//! or a workday.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use leavemax_calendar::{HolidaySet, build_calendar};
//!
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let days = build_calendar(from, to, &HolidaySet::reference_2024()).unwrap();
//! assert_eq!(days.len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Classified calendar date |
//! | `holidays` | Named holiday tables |
//! | `build` | Range classification |
//! | `error` | Error types |

mod build;
mod day;
mod error;
mod holidays;

pub use build::build_calendar;
pub use day::{CalendarDay, is_weekend, weekday_index};
pub use error::CalendarError;
pub use holidays::HolidaySet;
