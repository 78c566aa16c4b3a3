//! Day-by-day classification of a date range.

use chrono::NaiveDate;
use tracing::debug;

use crate::day::CalendarDay;
use crate::error::CalendarError;
use crate::holidays::HolidaySet;

/// Classifies every date in `[from, to]` as day off or workday.
///
/// The result holds exactly one entry per date, in ascending order with no
/// gaps. A date is a holiday when it appears anywhere in `holidays`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `from` is after `to`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leavemax_calendar::{HolidaySet, build_calendar};
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let days = build_calendar(from, to, &HolidaySet::reference_2024()).unwrap();
///
/// assert_eq!(days.len(), 7);
/// assert!(days[0].is_holiday()); // New Year's Day
/// assert_eq!(days.iter().filter(|d| d.is_day_off()).count(), 3);
/// ```
pub fn build_calendar(
    from: NaiveDate,
    to: NaiveDate,
    holidays: &HolidaySet,
) -> Result<Vec<CalendarDay>, CalendarError> {
    if from > to {
        return Err(CalendarError::InvalidRange { from, to });
    }
    let days: Vec<CalendarDay> = from
        .iter_days()
        .take_while(|d| *d <= to)
        .map(|d| CalendarDay::new(d, holidays.contains(d)))
        .collect();
    debug!(
        from = %from,
        to = %to,
        n_days = days.len(),
        n_off = days.iter().filter(|d| d.is_day_off()).count(),
        "calendar built"
    );
    Ok(days)
}
