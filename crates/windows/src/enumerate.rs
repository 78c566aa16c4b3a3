//! Two-pointer sweep over a day-off calendar.

use leavemax_calendar::CalendarDay;
use tracing::debug;

use crate::budget::LeaveBudget;
use crate::window::Window;

/// Enumerates contiguous windows whose workdays fit within `budget`.
///
/// The sweep grows `[start, end)` one day at a time and emits every window
/// that spends between one and `budget` leave days. As soon as a window
/// exceeds the budget, the sweep restarts from the next start position with
/// a two-day window; that start is then not revisited by the outer loop.
/// Longer windows from an exhausted start are therefore never probed, and
/// the one-day window at a restarted start is skipped.
///
/// Runs in O(n²) for a calendar of `n` days. An empty calendar yields no
/// windows.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leavemax_calendar::{HolidaySet, build_calendar};
/// use leavemax_windows::{LeaveBudget, enumerate_windows};
///
/// // Mon 2024-01-08 .. Sun 2024-01-14
/// let from = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// let days = build_calendar(from, to, &HolidaySet::new()).unwrap();
///
/// let windows = enumerate_windows(&days, LeaveBudget::new(1).unwrap());
/// assert!(windows.iter().all(|w| w.leaves_used() == 1));
/// ```
pub fn enumerate_windows(calendar: &[CalendarDay], budget: LeaveBudget) -> Vec<Window<'_>> {
    let n = calendar.len();
    let budget = budget.get();
    let off_prefix = day_off_prefix(calendar);

    let mut windows = Vec::new();
    let mut resets = 0usize;
    let mut start = 0usize;
    let mut end = 1usize;

    while start < n {
        while end < n + 1 {
            let mut leaves = leaves_in(&off_prefix, start, end);
            if leaves > budget {
                start += 1;
                end = start + 1;
                leaves = 0;
                resets += 1;
            }
            if leaves > 0 {
                windows.push(Window::from_parts(&calendar[start..end], leaves));
            }
            end += 1;
        }
        start += 1;
        end = start + 1;
    }

    debug!(
        n_days = n,
        budget,
        n_windows = windows.len(),
        n_resets = resets,
        "windows enumerated"
    );
    windows
}

/// `prefix[i]` is the number of days off in `calendar[..i]`.
fn day_off_prefix(calendar: &[CalendarDay]) -> Vec<usize> {
    let mut prefix = Vec::with_capacity(calendar.len() + 1);
    let mut running = 0usize;
    prefix.push(running);
    for day in calendar {
        running += usize::from(day.is_day_off());
        prefix.push(running);
    }
    prefix
}

/// Workdays in `[start, end)`.
fn leaves_in(off_prefix: &[usize], start: usize, end: usize) -> usize {
    (end - start) - (off_prefix[end] - off_prefix[start])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leavemax_calendar::{HolidaySet, build_calendar};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Mon 2024-01-08 .. Sun 2024-01-14.
    fn plain_week() -> Vec<CalendarDay> {
        build_calendar(ymd(2024, 1, 8), ymd(2024, 1, 14), &HolidaySet::new()).unwrap()
    }

    fn spans(windows: &[Window<'_>], first: NaiveDate) -> Vec<(i64, i64, usize)> {
        windows
            .iter()
            .map(|w| {
                (
                    (w.start_date() - first).num_days(),
                    (w.end_date() - first).num_days() + 1,
                    w.leaves_used(),
                )
            })
            .collect()
    }

    #[test]
    fn prefix_counts() {
        let days = plain_week();
        assert_eq!(day_off_prefix(&days), vec![0, 0, 0, 0, 0, 0, 1, 2]);
        let prefix = day_off_prefix(&days);
        assert_eq!(leaves_in(&prefix, 0, 7), 5);
        assert_eq!(leaves_in(&prefix, 5, 7), 0);
        assert_eq!(leaves_in(&prefix, 4, 6), 1);
    }

    #[test]
    fn empty_calendar() {
        assert!(enumerate_windows(&[], LeaveBudget::new(5).unwrap()).is_empty());
    }

    #[test]
    fn zero_budget_emits_nothing() {
        let days = plain_week();
        assert!(enumerate_windows(&days, LeaveBudget::new(0).unwrap()).is_empty());
    }

    #[test]
    fn exact_sweep_order_with_resets() {
        // Budget 3 over Mon..Sun: start 0 overflows at [0,4), restarts at
        // [1,3); overflows again at [1,5), restarts at [2,4).
        let days = plain_week();
        let windows = enumerate_windows(&days, LeaveBudget::new(3).unwrap());
        assert_eq!(
            spans(&windows, ymd(2024, 1, 8)),
            vec![
                (0, 1, 1),
                (0, 2, 2),
                (0, 3, 3),
                (1, 3, 2),
                (1, 4, 3),
                (2, 4, 2),
                (2, 5, 3),
                (2, 6, 3),
                (2, 7, 3),
                (3, 4, 1),
                (3, 5, 2),
                (3, 6, 2),
                (3, 7, 2),
                (4, 5, 1),
                (4, 6, 1),
                (4, 7, 1),
            ]
        );
    }

    #[test]
    fn restart_skips_single_day_window() {
        // Budget 1 over Mon..Fri: [0,2) overflows, restart jumps to [1,3),
        // which also overflows, and so on. Only [0,1) is ever emitted.
        let days = build_calendar(ymd(2024, 1, 8), ymd(2024, 1, 12), &HolidaySet::new()).unwrap();
        let windows = enumerate_windows(&days, LeaveBudget::new(1).unwrap());
        assert_eq!(spans(&windows, ymd(2024, 1, 8)), vec![(0, 1, 1)]);
    }

    #[test]
    fn weekend_only_runs_not_emitted() {
        let days = build_calendar(ymd(2024, 1, 13), ymd(2024, 1, 14), &HolidaySet::new()).unwrap();
        assert!(enumerate_windows(&days, LeaveBudget::new(10).unwrap()).is_empty());
    }

    #[test]
    fn all_workdays_within_budget() {
        // Mon..Fri with budget 5: the whole span fits.
        let days = build_calendar(ymd(2024, 1, 8), ymd(2024, 1, 12), &HolidaySet::new()).unwrap();
        let windows = enumerate_windows(&days, LeaveBudget::new(5).unwrap());
        let longest = windows.iter().map(|w| w.total_days_off()).max().unwrap();
        assert_eq!(longest, 5);
        assert!(windows.iter().all(|w| w.leaves_used() == w.total_days_off()));
        assert_eq!(windows.len(), 15);
    }

    #[test]
    fn budget_never_exceeded() {
        let days =
            build_calendar(ymd(2024, 1, 1), ymd(2024, 3, 31), &HolidaySet::reference_2024())
                .unwrap();
        for budget in [1, 2, 5, 10] {
            for w in enumerate_windows(&days, LeaveBudget::new(budget).unwrap()) {
                assert!(w.leaves_used() >= 1);
                assert!(w.leaves_used() <= budget as usize);
            }
        }
    }
}
