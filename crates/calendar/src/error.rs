//! Error types for the leavemax-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the leavemax-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the start of a date range falls after its end.
    #[error("invalid date range: {from} is after {to}")]
    InvalidRange {
        /// First date of the requested range.
        from: NaiveDate,
        /// Last date of the requested range.
        to: NaiveDate,
    },

    /// Returned when the same holiday name is registered twice.
    #[error("duplicate holiday name: {name:?}")]
    DuplicateHoliday {
        /// The name that was already present.
        name: String,
    },
}
