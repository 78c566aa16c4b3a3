//! Enumeration and ranking of leave windows.
//!
//! Given a classified calendar from `leavemax-calendar`, this crate finds the
//! contiguous spans where a few leave days bridge weekends and holidays into
//! a longer break, and ranks them by days off per leave day spent.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use leavemax_calendar::{HolidaySet, build_calendar};
//! use leavemax_windows::{LeaveBudget, Selection, enumerate_windows, rank_windows};
//!
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let days = build_calendar(from, to, &HolidaySet::reference_2024()).unwrap();
//!
//! let windows = enumerate_windows(&days, LeaveBudget::new(21).unwrap());
//! let ranked = rank_windows(windows);
//! let table = Selection::default().apply(ranked).unwrap();
//! assert!(table.len() <= 100);
//! ```
//!
//! # Architecture
//!
//! ```text
//! enumerate_windows()      (enumerate.rs)
//!   └─ Vec<Window>         leaves_used in 1..=budget
//! rank_windows()           (rank.rs)
//!   ├─ drop efficiency <= 1
//!   └─ keep longest per (start date, leaves used)
//! Selection::apply()       (select.rs)
//!   ├─ filter by window length
//!   ├─ sort by efficiency, descending
//!   └─ truncate to top N
//! ```

pub mod budget;
pub mod enumerate;
pub mod error;
pub mod rank;
pub mod select;
pub mod window;

pub use budget::LeaveBudget;
pub use enumerate::enumerate_windows;
pub use error::WindowError;
pub use rank::{PERIOD_DATE_FORMAT, RankedWindow, efficiency, rank_windows};
pub use select::Selection;
pub use window::Window;
