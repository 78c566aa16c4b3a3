//! Calendar command: show the day-off classification of the scanned range.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use leavemax_calendar::build_calendar;

use crate::cli::{CalendarArgs, OutputFormat};
use crate::config;
use crate::convert;
use crate::report::{self, CalendarRow};

/// Print one row per date of the configured range.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let cfg = config::load(args.range.config.as_deref())?;
    let from = args.range.from.unwrap_or(cfg.plan.from);
    let to = args.range.to.unwrap_or(cfg.plan.to);
    let holidays = convert::build_holidays(cfg.holidays.as_ref())?;

    let days = build_calendar(from, to, &holidays).context("failed to build calendar")?;
    let rows: Vec<CalendarRow> = days
        .iter()
        .filter(|d| !args.off_only || d.is_day_off())
        .map(|&d| CalendarRow::new(d, &holidays))
        .collect();
    info!(n_days = days.len(), n_rows = rows.len(), "calendar classified");

    let text = match args.range.format {
        OutputFormat::Table => report::calendar_table(&rows),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).context("failed to serialize calendar")?
        }
    };
    report::emit(&text, args.range.output.as_deref())
}
