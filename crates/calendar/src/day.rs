//! A single classified calendar date.

use chrono::{Datelike, NaiveDate};

/// One date of a scanned range, flagged as weekend and/or public holiday.
///
/// A day is *off* when it is a weekend day or a holiday. The day-off flag is
/// derived on access rather than stored, so it can never disagree with the
/// two underlying flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
    is_weekend: bool,
    is_holiday: bool,
}

impl PartialOrd for CalendarDay {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDay {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date
            .cmp(&other.date)
            .then((self.is_weekend, self.is_holiday).cmp(&(other.is_weekend, other.is_holiday)))
    }
}

impl CalendarDay {
    /// Classifies `date`, taking the weekend flag from its day of week.
    pub fn new(date: NaiveDate, is_holiday: bool) -> Self {
        Self {
            date,
            is_weekend: is_weekend(date),
            is_holiday,
        }
    }

    /// Returns the date.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self.is_weekend
    }

    /// Returns `true` if the date is a listed holiday.
    pub fn is_holiday(self) -> bool {
        self.is_holiday
    }

    /// Returns `true` if no leave is needed to be away on this date.
    pub fn is_day_off(self) -> bool {
        self.is_weekend || self.is_holiday
    }

    /// Day of week with Monday = 0 through Sunday = 6.
    pub fn weekday_index(self) -> u8 {
        weekday_index(self.date)
    }
}

/// Day of week of `date` with Monday = 0 through Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Returns `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    weekday_index(date) >= 5
}
