//! Candidate leave windows.

use chrono::NaiveDate;
use leavemax_calendar::CalendarDay;

/// A contiguous run of calendar days that spends at least one leave day.
///
/// Borrows its days from the calendar it was cut from. Every accessor is
/// derived from that slice, so `leaves_used + days off == total_days_off`
/// always holds and `leaves_used` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    days: &'a [CalendarDay],
    leaves_used: usize,
}

impl<'a> Window<'a> {
    /// Builds a window over `days`.
    ///
    /// Returns `None` if `days` is empty or contains no workday, since such
    /// a span needs no leave.
    pub fn spanning(days: &'a [CalendarDay]) -> Option<Self> {
        let leaves_used = days.iter().filter(|d| !d.is_day_off()).count();
        (leaves_used > 0).then_some(Self { days, leaves_used })
    }

    /// Caller guarantees `leaves_used` is the non-zero workday count of `days`.
    pub(crate) fn from_parts(days: &'a [CalendarDay], leaves_used: usize) -> Self {
        debug_assert!(leaves_used > 0);
        debug_assert_eq!(
            leaves_used,
            days.iter().filter(|d| !d.is_day_off()).count()
        );
        Self { days, leaves_used }
    }

    /// First date of the window.
    pub fn start_date(&self) -> NaiveDate {
        self.days[0].date()
    }

    /// Last date of the window.
    pub fn end_date(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date()
    }

    /// The classified days spanned, in date order.
    pub fn days(&self) -> &'a [CalendarDay] {
        self.days
    }

    /// The dates spanned, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + 'a {
        self.days.iter().map(|d| d.date())
    }

    /// Workdays inside the window, each of which costs one leave day.
    pub fn leaves_used(&self) -> usize {
        self.leaves_used
    }

    /// Length of the window in days.
    pub fn total_days_off(&self) -> usize {
        self.days.len()
    }

    /// Weekend and holiday dates inside the window.
    pub fn free_days(&self) -> usize {
        self.total_days_off() - self.leaves_used
    }
}
