//! Plan command: enumerate, rank, and select leave windows.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use leavemax_calendar::{HolidaySet, build_calendar};
use leavemax_windows::{LeaveBudget, Selection, enumerate_windows, rank_windows};

use crate::cli::{OutputFormat, PlanArgs};
use crate::config::{self, PlanToml};
use crate::convert;
use crate::report::{self, HolidayMarker, PlanReport, PlanSummary, WindowRow};

/// Run the leave planning pipeline.
pub fn run(args: PlanArgs) -> Result<()> {
    let _cmd = info_span!("plan").entered();

    // 1. Load config and apply CLI overrides
    let cfg = config::load(args.range.config.as_deref())?;
    let mut plan = cfg.plan;
    apply_overrides(&mut plan, &args);

    // 2. Convert to core types
    let holidays = convert::build_holidays(cfg.holidays.as_ref())?;
    let budget = convert::build_budget(&plan)?;
    let selection = convert::build_selection(&plan, args.all)?;

    // 3. Run pipeline
    let report = build_report(&plan, &holidays, budget, &selection)?;

    // 4. Render
    let text = match args.range.format {
        OutputFormat::Table => report::plan_table(&report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("failed to serialize plan report")?
        }
    };
    report::emit(&text, args.range.output.as_deref())?;
    if let Some(path) = &args.range.output {
        info!(path = %path.display(), "plan written");
    }
    Ok(())
}

/// Overlays command-line values on the `[plan]` table.
fn apply_overrides(plan: &mut PlanToml, args: &PlanArgs) {
    if let Some(from) = args.range.from {
        plan.from = from;
    }
    if let Some(to) = args.range.to {
        plan.to = to;
    }
    if let Some(leaves) = args.leaves {
        plan.leaves = leaves;
    }
    if let Some(min_days) = args.min_days {
        plan.min_days = min_days;
    }
    if let Some(max_days) = args.max_days {
        plan.max_days = max_days;
    }
    if let Some(top) = args.top {
        plan.top = top;
    }
}

/// Builds the calendar, ranks windows, and selects the rows to display.
fn build_report(
    plan: &PlanToml,
    holidays: &HolidaySet,
    budget: LeaveBudget,
    selection: &Selection,
) -> Result<PlanReport> {
    let days = build_calendar(plan.from, plan.to, holidays).context("failed to build calendar")?;
    let n_days_off = days.iter().filter(|d| d.is_day_off()).count();
    info!(
        from = %plan.from,
        to = %plan.to,
        n_days = days.len(),
        n_days_off,
        n_holidays = holidays.len(),
        "calendar built"
    );

    let windows = enumerate_windows(&days, budget);
    let n_enumerated = windows.len();
    let ranked = rank_windows(windows);
    let n_ranked = ranked.len();
    let selected = selection
        .apply(ranked)
        .context("failed to select leave windows")?;
    info!(n_enumerated, n_ranked, n_selected = selected.len(), "windows ranked");

    Ok(PlanReport {
        summary: PlanSummary {
            from: plan.from,
            to: plan.to,
            leaves_available: plan.leaves,
            min_days: selection.min_days(),
            max_days: selection.max_days(),
            top: selection.top(),
            n_calendar_days: days.len(),
            n_days_off,
            n_enumerated,
            n_ranked,
            n_selected: selected.len(),
        },
        windows: selected
            .iter()
            .map(|r| WindowRow::new(r, holidays))
            .collect(),
        holidays: HolidayMarker::within(holidays, plan.from, plan.to),
    })
}
