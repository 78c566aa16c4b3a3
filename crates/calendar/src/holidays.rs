//! Named public holiday tables.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Reference public holiday table for 2024: `(name, year, month, day)`.
///
/// CNY Day 1 falls on a Saturday, so the observed holiday for CNY Day 2 is
/// the following Monday.
#[rustfmt::skip]
const REFERENCE_2024: [(&str, i32, u32, u32); 11] = [
    ("New Year's Day", 2024, 1, 1),
    ("CNY Day 1",      2024, 2, 10),
    ("CNY Day 2",      2024, 2, 12),
    ("Good Friday",    2024, 3, 29),
    ("Hari Raya",      2024, 4, 10),
    ("Labour Day",     2024, 5, 1),
    ("Vesak Day",      2024, 5, 22),
    ("Hari Raya Haji", 2024, 6, 17),
    ("National Day",   2024, 8, 9),
    ("Deepavali",      2024, 10, 31),
    ("Christmas",      2024, 12, 25),
];

/// A set of public holidays keyed by unique display name.
///
/// Membership tests go through a hashed set of dates; the name map is kept
/// for annotation. Several names may share one date, and a holiday may fall
/// on a weekend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidaySet {
    by_name: BTreeMap<String, NaiveDate>,
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a holiday set from `(name, date)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateHoliday`] if a name repeats.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = (S, NaiveDate)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (name, date) in entries {
            set.insert(name, date)?;
        }
        Ok(set)
    }

    /// The eleven-holiday reference table for calendar year 2024.
    pub fn reference_2024() -> Self {
        let mut set = Self::new();
        for (name, y, m, d) in REFERENCE_2024 {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("reference holiday dates are valid");
            set.by_name.insert(name.to_string(), date);
            set.dates.insert(date);
        }
        set
    }

    /// Adds a named holiday.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateHoliday`] if `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, date: NaiveDate) -> Result<(), CalendarError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(CalendarError::DuplicateHoliday { name });
        }
        self.by_name.insert(name, date);
        self.dates.insert(date);
        Ok(())
    }

    /// Returns `true` if any holiday falls on `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the date registered under `name`.
    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.by_name.get(name).copied()
    }

    /// Names of all holidays on `date`, in name order.
    pub fn names_on(&self, date: NaiveDate) -> impl Iterator<Item = &str> + '_ {
        self.by_name
            .iter()
            .filter(move |&(_, &d)| d == date)
            .map(|(name, _)| name.as_str())
    }

    /// Holidays within `[from, to]` inclusive, ordered by date then name.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<(&str, NaiveDate)> {
        let mut found: Vec<(&str, NaiveDate)> = self
            .by_name
            .iter()
            .filter(|&(_, &d)| from <= d && d <= to)
            .map(|(name, &d)| (name.as_str(), d))
            .collect();
        found.sort_by_key(|&(name, d)| (d, name));
        found
    }

    /// Iterates over `(name, date)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NaiveDate)> + '_ {
        self.by_name.iter().map(|(name, &d)| (name.as_str(), d))
    }

    /// Number of named holidays.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no holidays are registered.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_table() {
        let set = HolidaySet::reference_2024();
        assert_eq!(set.len(), 11);
        assert_eq!(set.get("Good Friday"), Some(ymd(2024, 3, 29)));
        assert_eq!(set.get("CNY Day 2"), Some(ymd(2024, 2, 12)));
        assert!(set.contains(ymd(2024, 12, 25)));
        assert!(!set.contains(ymd(2024, 12, 26)));
    }

    #[test]
    fn empty() {
        let set = HolidaySet::new();
        assert!(set.is_empty());
        assert!(!set.contains(ymd(2024, 1, 1)));
        assert!(set.between(ymd(2024, 1, 1), ymd(2024, 12, 31)).is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut set = HolidaySet::new();
        set.insert("Founders Day", ymd(2024, 3, 1)).unwrap();
        assert_eq!(
            set.insert("Founders Day", ymd(2024, 3, 2)).unwrap_err(),
            CalendarError::DuplicateHoliday {
                name: "Founders Day".to_string()
            }
        );
        assert_eq!(set.len(), 1);
        assert!(!set.contains(ymd(2024, 3, 2)));
    }

    #[test]
    fn shared_date() {
        let set = HolidaySet::from_entries([
            ("Harvest", ymd(2024, 9, 2)),
            ("Anniversary", ymd(2024, 9, 2)),
        ])
        .unwrap();
        let names: Vec<_> = set.names_on(ymd(2024, 9, 2)).collect();
        assert_eq!(names, vec!["Anniversary", "Harvest"]);
    }

    #[test]
    fn between_is_inclusive_and_date_ordered() {
        let set = HolidaySet::reference_2024();
        let found = set.between(ymd(2024, 2, 10), ymd(2024, 5, 1));
        let names: Vec<_> = found.iter().map(|&(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["CNY Day 1", "CNY Day 2", "Good Friday", "Hari Raya", "Labour Day"]
        );
    }
}
