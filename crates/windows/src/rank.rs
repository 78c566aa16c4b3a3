//! Efficiency ranking and dominance pruning.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::window::Window;

/// `strftime` pattern for each end of a [`RankedWindow::period`] label.
pub const PERIOD_DATE_FORMAT: &str = "%a, %d %b %Y";

/// A surviving window with its efficiency and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWindow<'a> {
    window: Window<'a>,
    efficiency: f64,
    period: String,
}

impl<'a> RankedWindow<'a> {
    fn new(window: Window<'a>) -> Self {
        let period = format!(
            "{} - {}",
            window.start_date().format(PERIOD_DATE_FORMAT),
            window.end_date().format(PERIOD_DATE_FORMAT)
        );
        Self {
            efficiency: efficiency(&window),
            window,
            period,
        }
    }

    /// The underlying window.
    pub fn window(&self) -> &Window<'a> {
        &self.window
    }

    /// Days off gained per leave day spent.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Display label such as `Mon, 01 Jan 2024 - Sun, 07 Jan 2024`.
    pub fn period(&self) -> &str {
        &self.period
    }

    /// First date of the window.
    pub fn start_date(&self) -> NaiveDate {
        self.window.start_date()
    }

    /// Last date of the window.
    pub fn end_date(&self) -> NaiveDate {
        self.window.end_date()
    }

    /// Leave days spent.
    pub fn leaves_used(&self) -> usize {
        self.window.leaves_used()
    }

    /// Length of the window in days.
    pub fn total_days_off(&self) -> usize {
        self.window.total_days_off()
    }

    /// The dates spanned, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + 'a {
        self.window.dates()
    }
}

/// Days off per leave day spent. A window always spends at least one day.
pub fn efficiency(window: &Window<'_>) -> f64 {
    window.total_days_off() as f64 / window.leaves_used() as f64
}

/// Ranks enumerated windows.
///
/// Windows that return no more days off than leave spent (efficiency ≤ 1)
/// are dropped. Of the windows sharing a start date and leave cost, only the
/// longest is kept; for a fixed start and cost, a longer window also has the
/// later end and the higher efficiency. Output is ordered by start date,
/// then leaves used.
pub fn rank_windows(windows: Vec<Window<'_>>) -> Vec<RankedWindow<'_>> {
    let n_in = windows.len();
    let mut best: BTreeMap<(NaiveDate, usize), Window<'_>> = BTreeMap::new();
    for window in windows {
        // Integer form of efficiency > 1.
        if window.total_days_off() <= window.leaves_used() {
            continue;
        }
        best.entry((window.start_date(), window.leaves_used()))
            .and_modify(|kept| {
                if window.total_days_off() > kept.total_days_off() {
                    *kept = window;
                }
            })
            .or_insert(window);
    }
    let ranked: Vec<RankedWindow<'_>> = best.into_values().map(RankedWindow::new).collect();
    debug!(n_in, n_ranked = ranked.len(), "windows ranked");
    ranked
}
