use chrono::{Datelike, NaiveDate, Weekday};
use leavemax_calendar::{CalendarError, HolidaySet, build_calendar};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_year_is_contiguous_and_ordered() {
    let days = build_calendar(ymd(2024, 1, 1), ymd(2024, 12, 31), &HolidaySet::reference_2024())
        .unwrap();
    assert_eq!(days.len(), 366);
    assert_eq!(days[0].date(), ymd(2024, 1, 1));
    assert_eq!(days.last().unwrap().date(), ymd(2024, 12, 31));
    for pair in days.windows(2) {
        assert_eq!(
            pair[0].date().succ_opt().unwrap(),
            pair[1].date(),
            "gap after {}",
            pair[0].date()
        );
    }
}

#[test]
fn reference_year_day_off_counts() {
    let days = build_calendar(ymd(2024, 1, 1), ymd(2024, 12, 31), &HolidaySet::reference_2024())
        .unwrap();
    let weekends = days.iter().filter(|d| d.is_weekend()).count();
    let holidays = days.iter().filter(|d| d.is_holiday()).count();
    let weekend_holidays = days
        .iter()
        .filter(|d| d.is_weekend() && d.is_holiday())
        .count();
    let off = days.iter().filter(|d| d.is_day_off()).count();

    // 2024 has 52 Saturdays and 52 Sundays; only CNY Day 1 lands on a weekend.
    assert_eq!(weekends, 104);
    assert_eq!(holidays, 11);
    assert_eq!(weekend_holidays, 1);
    assert_eq!(off, weekends + holidays - weekend_holidays);
}

#[test]
fn weekend_flag_matches_chrono_weekday() {
    let days = build_calendar(ymd(2023, 12, 1), ymd(2024, 2, 29), &HolidaySet::new()).unwrap();
    for day in &days {
        let expected = matches!(day.date().weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(day.is_weekend(), expected, "weekend mismatch on {}", day.date());
        assert_eq!(
            u32::from(day.weekday_index()),
            day.date().weekday().num_days_from_monday()
        );
    }
}

#[test]
fn day_off_is_pure_function_of_flags() {
    let days = build_calendar(ymd(2024, 1, 1), ymd(2024, 12, 31), &HolidaySet::reference_2024())
        .unwrap();
    for day in &days {
        assert_eq!(day.is_day_off(), day.is_weekend() || day.is_holiday());
    }
}

#[test]
fn same_inputs_same_calendar() {
    let holidays = HolidaySet::reference_2024();
    let a = build_calendar(ymd(2024, 3, 1), ymd(2024, 6, 30), &holidays).unwrap();
    let b = build_calendar(ymd(2024, 3, 1), ymd(2024, 6, 30), &holidays).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_range_reports_both_ends() {
    let err = build_calendar(ymd(2025, 1, 1), ymd(2024, 1, 1), &HolidaySet::new()).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidRange { from, to }
        if from == ymd(2025, 1, 1) && to == ymd(2024, 1, 1)));
}

#[test]
fn multi_year_range_uses_only_matching_years() {
    // The reference table is 2024-only; Christmas 2025 is a plain Thursday.
    let days = build_calendar(ymd(2024, 12, 20), ymd(2025, 1, 5), &HolidaySet::reference_2024())
        .unwrap();
    let christmas_2024 = days.iter().find(|d| d.date() == ymd(2024, 12, 25)).unwrap();
    assert!(christmas_2024.is_holiday());
    let new_year_2025 = days.iter().find(|d| d.date() == ymd(2025, 1, 1)).unwrap();
    assert!(!new_year_2025.is_holiday());
}
