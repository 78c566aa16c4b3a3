//! Serializable output rows and plain-text rendering.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use leavemax_calendar::{CalendarDay, HolidaySet};
use leavemax_windows::{PERIOD_DATE_FORMAT, RankedWindow};

/// Result of a `plan` run.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub summary: PlanSummary,
    pub windows: Vec<WindowRow>,
    pub holidays: Vec<HolidayMarker>,
}

/// Inputs and pipeline counts for a `plan` run.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub leaves_available: i64,
    pub min_days: usize,
    pub max_days: usize,
    pub top: Option<usize>,
    pub n_calendar_days: usize,
    pub n_days_off: usize,
    pub n_enumerated: usize,
    pub n_ranked: usize,
    pub n_selected: usize,
}

/// One selected leave window.
#[derive(Debug, Serialize)]
pub struct WindowRow {
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leaves_used: usize,
    pub days_off: usize,
    pub efficiency: f64,
    pub dates: Vec<String>,
    pub holidays: Vec<String>,
}

impl WindowRow {
    pub fn new(ranked: &RankedWindow<'_>, holidays: &HolidaySet) -> Self {
        Self {
            period: ranked.period().to_string(),
            start_date: ranked.start_date(),
            end_date: ranked.end_date(),
            leaves_used: ranked.leaves_used(),
            days_off: ranked.total_days_off(),
            efficiency: ranked.efficiency(),
            dates: ranked
                .dates()
                .map(|d| d.format(PERIOD_DATE_FORMAT).to_string())
                .collect(),
            holidays: holidays
                .between(ranked.start_date(), ranked.end_date())
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }
}

/// A named holiday inside the scanned range.
#[derive(Debug, Serialize)]
pub struct HolidayMarker {
    pub name: String,
    pub date: NaiveDate,
}

impl HolidayMarker {
    /// Markers for every holiday in `[from, to]`, in date order.
    pub fn within(holidays: &HolidaySet, from: NaiveDate, to: NaiveDate) -> Vec<Self> {
        holidays
            .between(from, to)
            .into_iter()
            .map(|(name, date)| Self {
                name: name.to_string(),
                date,
            })
            .collect()
    }
}

/// One classified date for the `calendar` subcommand.
#[derive(Debug, Serialize)]
pub struct CalendarRow {
    pub date: NaiveDate,
    pub weekday: String,
    pub weekend: bool,
    pub holiday: bool,
    pub day_off: bool,
    pub holiday_names: Vec<String>,
}

impl CalendarRow {
    pub fn new(day: CalendarDay, holidays: &HolidaySet) -> Self {
        Self {
            date: day.date(),
            weekday: day.date().format("%a").to_string(),
            weekend: day.is_weekend(),
            holiday: day.is_holiday(),
            day_off: day.is_day_off(),
            holiday_names: holidays.names_on(day.date()).map(str::to_string).collect(),
        }
    }
}

/// Renders a plan report as an aligned text table.
pub fn plan_table(report: &PlanReport) -> String {
    let s = &report.summary;
    let mut out = String::new();
    let top = match s.top {
        Some(n) => format!("Top {n}"),
        None => "All".to_string(),
    };
    let _ = writeln!(
        out,
        "{top} ways to use {} days of leave for {} to {} consecutive days off ({} to {})",
        s.leaves_available, s.min_days, s.max_days, s.from, s.to
    );
    let _ = writeln!(
        out,
        "{} days scanned, {} off; {} windows enumerated, {} ranked, {} shown",
        s.n_calendar_days, s.n_days_off, s.n_enumerated, s.n_ranked, s.n_selected
    );
    out.push('\n');

    if report.windows.is_empty() {
        out.push_str("No leave windows match.\n");
    } else {
        let _ = writeln!(
            out,
            "{:>4}  {:<35}  {:>6}  {:>8}  {:>10}  Holidays",
            "#", "Period", "Leaves", "Days off", "Days/leave"
        );
        for (i, row) in report.windows.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}  {:<35}  {:>6}  {:>8}  {:>10.2}  {}",
                i + 1,
                row.period,
                row.leaves_used,
                row.days_off,
                row.efficiency,
                row.holidays.join(", ")
            );
        }
    }

    if !report.holidays.is_empty() {
        out.push_str("\nHolidays in range:\n");
        for marker in &report.holidays {
            let _ = writeln!(
                out,
                "  {}  {}",
                marker.date.format(PERIOD_DATE_FORMAT),
                marker.name
            );
        }
    }
    out
}

/// Renders calendar rows as an aligned text table.
pub fn calendar_table(rows: &[CalendarRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}  {:<3}  {:<7}  {:<7}  Holiday", "Date", "Day", "Weekend", "Day off");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10}  {:<3}  {:<7}  {:<7}  {}",
            row.date.to_string(),
            row.weekday,
            yes_no(row.weekend),
            yes_no(row.day_off),
            row.holiday_names.join(", ")
        );
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Writes `text` to `output`, or to stdout when no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")
        }
    }
}
