//! End-to-end expansions for each recurrence type.

use chrono::{Datelike, NaiveDate, NaiveTime};
use recurra_test::recurra::{RecurrenceType, WeekIndex, Weekday};

use super::helpers::{at, date, dates, descriptor, monthly_clamped, pattern};

#[test_log::test]
fn daily_crosses_leap_day() {
    let pattern = pattern(descriptor(date(2024, 2, 28), RecurrenceType::Daily, 1));

    let next = pattern.next_occurrence(at(2024, 2, 28)).expect("valid pattern");
    assert_eq!(next, Some(at(2024, 2, 29)));
}

#[test_log::test]
fn daily_every_three_days() {
    let pattern = pattern(descriptor(date(2024, 3, 20), RecurrenceType::Daily, 3));

    let next = pattern.next_occurrence(at(2024, 3, 20)).expect("valid pattern");
    assert_eq!(next, Some(at(2024, 3, 23)));
}

#[test_log::test]
fn daily_every_fourteen_days() {
    let pattern = pattern(descriptor(date(2024, 3, 20), RecurrenceType::Daily, 14));

    let next = pattern.next_occurrence(at(2024, 3, 20)).expect("valid pattern");
    assert_eq!(next, Some(at(2024, 4, 3)));
}

#[test_log::test]
fn weekly_every_other_tuesday() {
    let pattern = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::Weekly, 2)
            .with_days_of_week([Weekday::Tuesday]),
    );

    let occurrences = pattern
        .occurrences_between(at(2024, 3, 21), at(2024, 6, 1), None)
        .expect("valid pattern");
    assert_eq!(
        dates(&occurrences),
        vec![
            date(2024, 4, 2),
            date(2024, 4, 16),
            date(2024, 4, 30),
            date(2024, 5, 14),
            date(2024, 5, 28),
        ]
    );
}

#[test_log::test]
fn weekly_week_start_shifts_blocks() {
    // Sunday-start weeks put the anchor in the week of 03-17, whose Tuesday
    // precedes the anchor. Wednesday-start weeks put it in the week of 03-20,
    // which contains Tuesday 03-26.
    let sunday = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::Weekly, 2)
            .with_days_of_week([Weekday::Tuesday])
            .with_first_day_of_week(Weekday::Sunday),
    );
    let wednesday = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::Weekly, 2)
            .with_days_of_week([Weekday::Tuesday])
            .with_first_day_of_week(Weekday::Wednesday),
    );

    assert_eq!(
        dates(&sunday.occurrences(2).expect("valid pattern")),
        vec![date(2024, 4, 2), date(2024, 4, 16)]
    );
    assert_eq!(
        dates(&wednesday.occurrences(2).expect("valid pattern")),
        vec![date(2024, 3, 26), date(2024, 4, 9)]
    );
}

#[test_log::test]
fn weekly_several_days_in_order() {
    let pattern = pattern(
        descriptor(date(2024, 1, 1), RecurrenceType::Weekly, 1)
            .with_days_of_week([Weekday::Friday, Weekday::Monday, Weekday::Wednesday]),
    );

    assert_eq!(
        dates(&pattern.occurrences(5).expect("valid pattern")),
        vec![
            date(2024, 1, 1),
            date(2024, 1, 3),
            date(2024, 1, 5),
            date(2024, 1, 8),
            date(2024, 1, 10),
        ]
    );
}

#[test_log::test]
fn relative_monthly_third_thursday() {
    let pattern = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::RelativeMonthly, 1)
            .with_days_of_week([Weekday::Thursday])
            .with_index(WeekIndex::Third),
    );

    let occurrences = pattern
        .occurrences_between(at(2024, 3, 21), at(2024, 8, 1), None)
        .expect("valid pattern");
    assert_eq!(
        dates(&occurrences),
        vec![
            date(2024, 4, 18),
            date(2024, 5, 16),
            date(2024, 6, 20),
            date(2024, 7, 18),
        ]
    );
}

#[test_log::test]
fn relative_monthly_last_weekday() {
    let pattern = pattern(
        descriptor(date(2024, 1, 1), RecurrenceType::RelativeMonthly, 1)
            .with_days_of_week([Weekday::Friday])
            .with_index(WeekIndex::Last),
    );

    assert_eq!(
        dates(&pattern.occurrences(3).expect("valid pattern")),
        vec![date(2024, 1, 26), date(2024, 2, 23), date(2024, 3, 29)]
    );
}

#[test_log::test]
fn relative_monthly_counts_over_union_of_days() {
    // Saturdays and Sundays of June 2024: 1, 2, 8, 9, ... so the second match
    // is Sunday the 2nd.
    let pattern = pattern(
        descriptor(date(2024, 6, 1), RecurrenceType::RelativeMonthly, 1)
            .with_days_of_week([Weekday::Saturday, Weekday::Sunday])
            .with_index(WeekIndex::Second),
    );

    let first = pattern.occurrences(1).expect("valid pattern");
    assert_eq!(dates(&first), vec![date(2024, 6, 2)]);
}

#[test_log::test]
fn absolute_monthly_31st_clamps() {
    let pattern = pattern(
        descriptor(date(2024, 3, 6), RecurrenceType::AbsoluteMonthly, 1).with_day_of_month(31),
    );

    let occurrences = pattern
        .occurrences_between(at(2024, 3, 1), at(2024, 9, 1), None)
        .expect("valid pattern");
    assert_eq!(
        dates(&occurrences),
        vec![
            date(2024, 3, 31),
            date(2024, 4, 30),
            date(2024, 5, 31),
            date(2024, 6, 30),
            date(2024, 7, 31),
            date(2024, 8, 31),
        ]
    );
}

#[test_log::test]
fn absolute_monthly_late_days_follow_month_length() {
    for day in [28_i64, 29, 30] {
        let pattern = pattern(
            descriptor(date(2023, 1, 1), RecurrenceType::AbsoluteMonthly, 1)
                .with_day_of_month(day),
        );

        let occurrences = pattern
            .occurrences_between(at(2023, 1, 1), at(2024, 9, 1), None)
            .expect("valid pattern");
        assert_eq!(
            dates(&occurrences),
            monthly_clamped((2023, 1), (2024, 8), u32::try_from(day).expect("small day")),
            "day {day}"
        );
    }
}

#[test_log::test]
fn absolute_monthly_february_in_leap_and_common_years() {
    let pattern = pattern(
        descriptor(date(2023, 1, 1), RecurrenceType::AbsoluteMonthly, 1).with_day_of_month(30),
    );

    let occurrences = pattern
        .occurrences_between(at(2023, 1, 1), at(2024, 9, 1), None)
        .expect("valid pattern");
    let found = dates(&occurrences);
    assert!(found.contains(&date(2023, 2, 28)));
    assert!(found.contains(&date(2024, 2, 29)));
}

#[test_log::test]
fn absolute_monthly_interval_steps_months() {
    let pattern = pattern(
        descriptor(date(2024, 1, 15), RecurrenceType::AbsoluteMonthly, 3).with_day_of_month(10),
    );

    // January's 10th precedes the anchor.
    assert_eq!(
        dates(&pattern.occurrences(3).expect("valid pattern")),
        vec![date(2024, 4, 10), date(2024, 7, 10), date(2024, 10, 10)]
    );
}

#[test_log::test]
fn relative_yearly_second_wednesday_of_january() {
    let pattern = pattern(
        descriptor(date(2020, 1, 1), RecurrenceType::RelativeYearly, 1)
            .with_days_of_week([Weekday::Wednesday])
            .with_month(1)
            .with_index(WeekIndex::Second),
    );

    let occurrences = pattern
        .occurrences_between(at(2020, 1, 1), at(2030, 1, 1), None)
        .expect("valid pattern");
    assert_eq!(
        dates(&occurrences),
        vec![
            date(2020, 1, 8),
            date(2021, 1, 13),
            date(2022, 1, 12),
            date(2023, 1, 11),
            date(2024, 1, 10),
            date(2025, 1, 8),
            date(2026, 1, 14),
            date(2027, 1, 13),
            date(2028, 1, 12),
            date(2029, 1, 10),
        ]
    );
}

#[test_log::test]
fn absolute_yearly_fifteenth_of_june() {
    let pattern = pattern(
        descriptor(date(2020, 1, 1), RecurrenceType::AbsoluteYearly, 1)
            .with_month(6)
            .with_day_of_month(15),
    );

    let occurrences = pattern
        .occurrences_between(at(2020, 1, 1), at(2030, 1, 1), None)
        .expect("valid pattern");
    let expected: Vec<_> = (2020..2030).map(|year| date(year, 6, 15)).collect();
    assert_eq!(dates(&occurrences), expected);
}

#[test_log::test]
fn absolute_yearly_leap_day_clamps_in_common_years() {
    let pattern = pattern(
        descriptor(date(2023, 1, 1), RecurrenceType::AbsoluteYearly, 1)
            .with_month(2)
            .with_day_of_month(29),
    );

    assert_eq!(
        dates(&pattern.occurrences(3).expect("valid pattern")),
        vec![date(2023, 2, 28), date(2024, 2, 29), date(2025, 2, 28)]
    );
}

#[test_log::test]
fn previous_occurrence_walks_backward() {
    let pattern = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::RelativeMonthly, 1)
            .with_days_of_week([Weekday::Thursday])
            .with_index(WeekIndex::Third),
    );

    let previous = pattern
        .previous_occurrence(at(2024, 7, 1))
        .expect("valid pattern");
    assert_eq!(previous, Some(at(2024, 6, 20)));

    // Nothing exists before the anchor.
    let before_anchor = pattern
        .previous_occurrence(at(2024, 3, 21))
        .expect("valid pattern");
    assert_eq!(before_anchor, None);
}

#[test_log::test]
fn previous_occurrence_from_calendar_end() {
    let pattern = pattern(
        descriptor(date(2024, 3, 21), RecurrenceType::Weekly, 1)
            .with_days_of_week([Weekday::Tuesday]),
    );
    let before = NaiveDate::MAX.and_time(NaiveTime::MIN);

    let previous = pattern.previous_occurrence(before).expect("valid pattern");
    let previous = previous.expect("an earlier Tuesday exists");
    assert!(previous < before);
    assert_eq!(previous.weekday(), chrono::Weekday::Tue);
}

#[test_log::test]
fn decades_of_daily_occurrences_are_complete() {
    let pattern = pattern(descriptor(date(2000, 1, 1), RecurrenceType::Daily, 1));

    let between = pattern
        .occurrences_between(at(2000, 1, 1), at(2030, 1, 1), None)
        .expect("valid pattern");
    assert_eq!(between.len(), 10_957);
    assert_eq!(between.last().copied(), Some(at(2029, 12, 31)));

    let first = pattern.occurrences(15_000).expect("valid pattern");
    assert_eq!(first.len(), 15_000);
}

#[test_log::test]
fn limit_truncates_between() {
    let pattern = pattern(descriptor(date(2024, 1, 1), RecurrenceType::Daily, 1));

    let occurrences = pattern
        .occurrences_between(at(2024, 1, 1), at(2024, 12, 31), Some(3))
        .expect("valid pattern");
    assert_eq!(
        dates(&occurrences),
        vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)]
    );
}

#[test_log::test]
fn occurrences_start_at_anchor() {
    let pattern = pattern(descriptor(date(2024, 3, 21), RecurrenceType::Daily, 2));

    assert_eq!(
        dates(&pattern.occurrences(3).expect("valid pattern")),
        vec![date(2024, 3, 21), date(2024, 3, 23), date(2024, 3, 25)]
    );
    assert!(pattern.occurrences(0).expect("valid pattern").is_empty());
}
