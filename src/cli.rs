use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Leave planner: find where a few leave days buy the longest breaks.
#[derive(Parser)]
#[command(
    name = "leavemax",
    version,
    about = "Rank leave windows that bridge weekends and public holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Enumerate, rank, and select leave windows.
    Plan(PlanArgs),
    /// Show the day-off classification of the scanned range.
    Calendar(CalendarArgs),
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Options shared by every subcommand that scans a date range.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Path to TOML configuration file. Built-in defaults are used if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first date of the scan (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Override last date of the scan (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Override leave days available.
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=365)
    )]
    pub leaves: Option<i64>,

    /// Override shortest break to show, in days.
    #[arg(long)]
    pub min_days: Option<usize>,

    /// Override longest break to show, in days.
    #[arg(long)]
    pub max_days: Option<usize>,

    /// Override number of windows to show.
    #[arg(short, long, conflicts_with = "all")]
    pub top: Option<usize>,

    /// Show every selected window instead of the top N.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Only list days off.
    #[arg(long)]
    pub off_only: bool,
}
