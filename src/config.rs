use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level leavemax configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeavemaxConfig {
    /// Scan range, budget, and display settings.
    #[serde(default)]
    pub plan: PlanToml,

    /// Holiday name -> date. Omit to use the built-in 2024 reference table.
    #[serde(default)]
    pub holidays: Option<BTreeMap<String, NaiveDate>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_from")]
    pub from: NaiveDate,
    #[serde(default = "default_to")]
    pub to: NaiveDate,
    #[serde(default = "default_leaves")]
    pub leaves: i64,
    #[serde(default = "default_min_days")]
    pub min_days: usize,
    #[serde(default = "default_max_days")]
    pub max_days: usize,
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
            leaves: default_leaves(),
            min_days: default_min_days(),
            max_days: default_max_days(),
            top: default_top(),
        }
    }
}

fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}
fn default_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("2024-12-31 is a valid date")
}
fn default_leaves() -> i64 {
    21
}
fn default_min_days() -> usize {
    5
}
fn default_max_days() -> usize {
    20
}
fn default_top() -> usize {
    100
}

/// Loads the TOML file at `path`, or returns built-in defaults when no path
/// is given.
pub fn load(path: Option<&Path>) -> Result<LeavemaxConfig> {
    let Some(path) = path else {
        return Ok(LeavemaxConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
