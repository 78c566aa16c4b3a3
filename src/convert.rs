//! Pure conversion functions: TOML config structs -> crate API types.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use leavemax_calendar::HolidaySet;
use leavemax_windows::{LeaveBudget, Selection};

use crate::config::PlanToml;

/// Builds the holiday set, falling back to the 2024 reference table when the
/// config has no `[holidays]` table.
pub fn build_holidays(holidays: Option<&BTreeMap<String, NaiveDate>>) -> Result<HolidaySet> {
    match holidays {
        None => Ok(HolidaySet::reference_2024()),
        Some(table) => HolidaySet::from_entries(table.iter().map(|(name, &date)| (name.as_str(), date)))
            .context("invalid [holidays] table"),
    }
}

/// Builds a [`LeaveBudget`] from `[plan].leaves`.
pub fn build_budget(plan: &PlanToml) -> Result<LeaveBudget> {
    LeaveBudget::new(plan.leaves).context("invalid [plan].leaves")
}

/// Builds a [`Selection`] from the `[plan]` window-length range and row limit.
///
/// `unlimited` drops the row limit.
pub fn build_selection(plan: &PlanToml, unlimited: bool) -> Result<Selection> {
    let top = if unlimited { None } else { Some(plan.top) };
    let selection = Selection::new(plan.min_days, plan.max_days).with_top(top);
    selection
        .validate()
        .context("invalid [plan] window selection")?;
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavemax_windows::WindowError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn holidays_default_to_reference() {
        let set = build_holidays(None).unwrap();
        assert_eq!(set, HolidaySet::reference_2024());
    }

    #[test]
    fn holidays_from_table() {
        let table = BTreeMap::from([
            ("Founders Day".to_string(), ymd(2025, 3, 3)),
            ("Harvest".to_string(), ymd(2025, 9, 1)),
        ]);
        let set = build_holidays(Some(&table)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(ymd(2025, 3, 3)));
        assert!(!set.contains(ymd(2024, 12, 25)));
    }

    #[test]
    fn empty_holiday_table_means_weekends_only() {
        let set = build_holidays(Some(&BTreeMap::new())).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn negative_budget() {
        let plan = PlanToml {
            leaves: -4,
            ..PlanToml::default()
        };
        let err = build_budget(&plan).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WindowError>(),
            Some(&WindowError::InvalidBudget { budget: -4 })
        );
    }

    #[test]
    fn selection_limits() {
        let plan = PlanToml::default();
        assert_eq!(build_selection(&plan, false).unwrap().top(), Some(100));
        assert_eq!(build_selection(&plan, true).unwrap().top(), None);
    }

    #[test]
    fn inverted_length_range() {
        let plan = PlanToml {
            min_days: 10,
            max_days: 3,
            ..PlanToml::default()
        };
        let err = build_selection(&plan, false).unwrap_err();
        assert!(format!("{err:#}").contains("min_days (10) > max_days (3)"));
    }

    #[test]
    fn zero_top_rejected() {
        let plan = PlanToml {
            top: 0,
            ..PlanToml::default()
        };
        assert!(build_selection(&plan, false).is_err());
        assert!(build_selection(&plan, true).is_ok());
    }
}
