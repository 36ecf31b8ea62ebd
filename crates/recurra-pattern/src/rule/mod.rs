//! Canonical recurrence rules derived from patterns.
//!
//! A [`RecurrenceRule`] carries only the fields its recurrence type uses, so
//! expansion never has to re-check which optional descriptor fields are set.

pub mod calendar;

use std::fmt;
use std::num::NonZeroU32;

use chrono::{Month, NaiveDate};
use recurra_core::{RecurrenceType, Weekday, WeekdaySet};

use crate::error::{PatternError, PatternResult, ValidationIssue};
use crate::pattern::Pattern;

/// Unit of the rule's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested day-of-month, resolved per month with end-of-month clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay(u8);

impl MonthDay {
    /// Returns `None` outside 1-31.
    #[must_use]
    pub fn new(day: u8) -> Option<Self> {
        (1..=31).contains(&day).then_some(Self(day))
    }

    /// Resolves to `min(day, days in month)`.
    #[must_use]
    pub fn resolve(self, year: i32, month: u32) -> Option<NaiveDate> {
        calendar::clamped_day(year, month, u32::from(self.0))
    }
}

/// Which dates of a period a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Daily,
    Weekly {
        days: WeekdaySet,
    },
    AbsoluteMonthly {
        day: MonthDay,
    },
    RelativeMonthly {
        days: WeekdaySet,
        set_position: i8,
    },
    AbsoluteYearly {
        month: Month,
        day: MonthDay,
    },
    RelativeYearly {
        month: Month,
        days: WeekdaySet,
        set_position: i8,
    },
}

/// Canonical form of a valid pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub interval: NonZeroU32,
    pub week_start: Weekday,
    pub kind: RuleKind,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        match self.kind {
            RuleKind::Daily => Frequency::Daily,
            RuleKind::Weekly { .. } => Frequency::Weekly,
            RuleKind::AbsoluteMonthly { .. } | RuleKind::RelativeMonthly { .. } => {
                Frequency::Monthly
            }
            RuleKind::AbsoluteYearly { .. } | RuleKind::RelativeYearly { .. } => Frequency::Yearly,
        }
    }

    /// Weekdays the rule filters on, if any.
    #[must_use]
    pub const fn days(&self) -> Option<WeekdaySet> {
        match self.kind {
            RuleKind::Weekly { days }
            | RuleKind::RelativeMonthly { days, .. }
            | RuleKind::RelativeYearly { days, .. } => Some(days),
            RuleKind::Daily | RuleKind::AbsoluteMonthly { .. } | RuleKind::AbsoluteYearly { .. } => {
                None
            }
        }
    }
}

/// ## Summary
/// Derives the canonical rule for a pattern.
///
/// ## Errors
///
/// Returns `PatternError::InvalidPattern` listing every validation issue if
/// the pattern is not valid.
pub fn derive_rule(pattern: &Pattern) -> PatternResult<RecurrenceRule> {
    match resolve(pattern) {
        Ok(rule) => {
            tracing::debug!(?rule, frequency = %rule.frequency(), "Derived recurrence rule");
            Ok(rule)
        }
        Err(issues) => {
            tracing::debug!(?issues, "Refusing to derive rule for invalid pattern");
            Err(PatternError::InvalidPattern(issues))
        }
    }
}

/// Builds the rule, collecting every issue met along the way.
///
/// Only the fields the recurrence type uses are inspected. Issues come out in
/// field order: interval, `daysOfWeek`, `dayOfMonth`, `month`.
pub(crate) fn resolve(pattern: &Pattern) -> Result<RecurrenceRule, Vec<ValidationIssue>> {
    let kind_of = pattern.recurrence_type();
    let raw_interval = pattern.interval();
    let interval = u32::try_from(raw_interval)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ValidationIssue::IntervalOutOfRange(raw_interval));
    let days = || weekdays(pattern);
    let set_position = pattern.index().ordinal();

    let kind = match kind_of {
        RecurrenceType::Daily => Ok(RuleKind::Daily),
        RecurrenceType::Weekly => days()
            .map(|days| RuleKind::Weekly { days })
            .map_err(|issue| vec![issue]),
        RecurrenceType::AbsoluteMonthly => month_day(pattern)
            .map(|day| RuleKind::AbsoluteMonthly { day })
            .map_err(|issue| vec![issue]),
        RecurrenceType::RelativeMonthly => days()
            .map(|days| RuleKind::RelativeMonthly { days, set_position })
            .map_err(|issue| vec![issue]),
        RecurrenceType::AbsoluteYearly => both(month_day(pattern), month(pattern))
            .map(|(day, month)| RuleKind::AbsoluteYearly { month, day }),
        RecurrenceType::RelativeYearly => both(days(), month(pattern)).map(|(days, month)| {
            RuleKind::RelativeYearly {
                month,
                days,
                set_position,
            }
        }),
    };

    match (interval, kind) {
        (Ok(interval), Ok(kind)) => Ok(RecurrenceRule {
            interval,
            week_start: pattern.first_day_of_week(),
            kind,
        }),
        (interval, kind) => Err(interval
            .err()
            .into_iter()
            .chain(kind.err().into_iter().flatten())
            .collect()),
    }
}

fn both<A, B>(
    a: Result<A, ValidationIssue>,
    b: Result<B, ValidationIssue>,
) -> Result<(A, B), Vec<ValidationIssue>> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (a, b) => Err(a.err().into_iter().chain(b.err()).collect()),
    }
}

fn weekdays(pattern: &Pattern) -> Result<WeekdaySet, ValidationIssue> {
    let days: WeekdaySet = pattern.days_of_week().iter().collect();
    if days.is_empty() {
        return Err(ValidationIssue::MissingDaysOfWeek(pattern.recurrence_type()));
    }
    Ok(days)
}

fn month_day(pattern: &Pattern) -> Result<MonthDay, ValidationIssue> {
    let day = pattern
        .day_of_month()
        .ok_or(ValidationIssue::MissingDayOfMonth(pattern.recurrence_type()))?;
    u8::try_from(day)
        .ok()
        .and_then(MonthDay::new)
        .ok_or(ValidationIssue::DayOfMonthOutOfRange(day))
}

fn month(pattern: &Pattern) -> Result<Month, ValidationIssue> {
    let month = pattern
        .month()
        .ok_or(ValidationIssue::MissingMonth(pattern.recurrence_type()))?;
    u8::try_from(month)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .ok_or(ValidationIssue::MonthOutOfRange(month))
}
