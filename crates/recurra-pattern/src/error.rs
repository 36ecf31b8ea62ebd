use std::fmt;

use recurra_core::RecurrenceType;
use thiserror::Error;

/// Pattern expansion errors
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern: {}", join_issues(.0))]
    InvalidPattern(Vec<ValidationIssue>),
}

pub type PatternResult<T> = std::result::Result<T, PatternError>;

/// A reason a pattern cannot be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    IntervalOutOfRange(i64),
    MissingDaysOfWeek(RecurrenceType),
    MissingDayOfMonth(RecurrenceType),
    DayOfMonthOutOfRange(i64),
    MissingMonth(RecurrenceType),
    MonthOutOfRange(i64),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntervalOutOfRange(interval) => {
                write!(f, "interval {interval} is outside 1-{}", u32::MAX)
            }
            Self::MissingDaysOfWeek(kind) => write!(f, "{kind} requires daysOfWeek"),
            Self::MissingDayOfMonth(kind) => write!(f, "{kind} requires dayOfMonth"),
            Self::DayOfMonthOutOfRange(day) => write!(f, "dayOfMonth {day} is outside 1-31"),
            Self::MissingMonth(kind) => write!(f, "{kind} requires month"),
            Self::MonthOutOfRange(month) => write!(f, "month {month} is outside 1-12"),
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
