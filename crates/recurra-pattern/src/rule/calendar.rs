//! Gregorian calendar arithmetic used by rule expansion.

use chrono::{Datelike, Days, NaiveDate};
use recurra_core::{Weekday, WeekdaySet};

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Divisible by 4, except centuries not divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1-12) of `year`, or 0 for an
/// out-of-range month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > 12 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    MONTH_LENGTHS[(month - 1) as usize]
}

/// ## Summary
/// Moves a (year, month) pair by a signed number of months.
///
/// Returns `None` when the resulting year does not fit an `i32`.
#[must_use]
pub fn shift_month(year: i32, month: u32, months: i64) -> Option<(i32, u32)> {
    let total = i64::from(year)
        .checked_mul(12)?
        .checked_add(i64::from(month) - 1)?
        .checked_add(months)?;
    let new_year = i32::try_from(total.div_euclid(12)).ok()?;
    let new_month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    Some((new_year, new_month))
}

/// ## Summary
/// Resolves a day-of-month, clamping to the month's last day.
///
/// Day 31 in April yields April 30, and day 29 or 30 in February yields the
/// 28th or 29th depending on the year.
#[must_use]
pub fn clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)))
}

/// Returns the first day of the week containing `date`, where weeks begin on
/// `first_day`.
#[must_use]
pub fn week_start(date: NaiveDate, first_day: Weekday) -> Option<NaiveDate> {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_day.to_chrono().num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// All dates of a month in ascending order.
pub fn month_dates(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    (1..=days_in_month(year, month)).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
}

/// ## Summary
/// Selects the `position`-th date of a month falling on any day of `days`.
///
/// Positions count over the union of matching weekdays in date order:
/// positive values from the front (1 = first), negative from the back
/// (-1 = last). Returns `None` if the month has fewer matches.
#[must_use]
pub fn nth_matching_weekday(
    year: i32,
    month: u32,
    days: WeekdaySet,
    position: i8,
) -> Option<NaiveDate> {
    let matches: Vec<NaiveDate> = month_dates(year, month)
        .filter(|date| days.matches(date.weekday()))
        .collect();
    let offset = usize::from(position.unsigned_abs());

    match position {
        0 => None,
        p if p > 0 => matches.get(offset - 1).copied(),
        _ => matches
            .len()
            .checked_sub(offset)
            .and_then(|idx| matches.get(idx))
            .copied(),
    }
}
