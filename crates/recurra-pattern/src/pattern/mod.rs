//! Recurrence pattern model.
//!
//! A [`Pattern`] is built once from a [`PatternDescriptor`] and never fails to
//! construct; invalid field combinations are reported by
//! [`Pattern::validation_issues`] and rejected only when a query runs.

mod descriptor;
mod exclusions;

pub use descriptor::PatternDescriptor;
pub use exclusions::ExclusionList;

use chrono::{NaiveDate, NaiveDateTime};
use recurra_core::{RecurrenceType, WeekIndex, Weekday};

use crate::error::{PatternResult, ValidationIssue};
use crate::expand::{query, ExpansionOptions, Expander};
use crate::rule::{self, RecurrenceRule, derive_rule};

/// A recurring event definition plus its exclusion dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    base_date: NaiveDateTime,
    recurrence_type: RecurrenceType,
    interval: i64,
    days_of_week: Vec<Weekday>,
    first_day_of_week: Weekday,
    day_of_month: Option<i64>,
    index: WeekIndex,
    month: Option<i64>,
    exclude_dates: ExclusionList,
    options: ExpansionOptions,
}

impl Pattern {
    /// ## Summary
    /// Builds a pattern, filling unset optional fields with their defaults:
    /// no weekdays, weeks starting Monday, and the `first` week index.
    #[must_use]
    pub fn new(descriptor: PatternDescriptor) -> Self {
        Self {
            base_date: descriptor.base_date,
            recurrence_type: descriptor.recurrence_type,
            interval: descriptor.interval,
            days_of_week: descriptor.days_of_week.unwrap_or_default(),
            first_day_of_week: descriptor.first_day_of_week.unwrap_or(Weekday::Monday),
            day_of_month: descriptor.day_of_month,
            index: descriptor.index.unwrap_or_default(),
            month: descriptor.month,
            exclude_dates: ExclusionList::new(),
            options: ExpansionOptions::default(),
        }
    }

    /// Replaces the expansion options used by queries.
    #[must_use]
    pub fn with_options(mut self, options: ExpansionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn base_date(&self) -> NaiveDateTime {
        self.base_date
    }

    #[must_use]
    pub fn recurrence_type(&self) -> RecurrenceType {
        self.recurrence_type
    }

    #[must_use]
    pub fn interval(&self) -> i64 {
        self.interval
    }

    #[must_use]
    pub fn days_of_week(&self) -> &[Weekday] {
        &self.days_of_week
    }

    #[must_use]
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    #[must_use]
    pub fn day_of_month(&self) -> Option<i64> {
        self.day_of_month
    }

    #[must_use]
    pub fn index(&self) -> WeekIndex {
        self.index
    }

    #[must_use]
    pub fn month(&self) -> Option<i64> {
        self.month
    }

    #[must_use]
    pub fn exclude_dates(&self) -> &ExclusionList {
        &self.exclude_dates
    }

    /// ## Summary
    /// Lists every reason the pattern cannot be expanded.
    ///
    /// Recomputed from the current fields on each call; an empty list means
    /// the pattern is valid.
    #[must_use]
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        rule::resolve(self).err().unwrap_or_default()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_issues().is_empty()
    }

    /// ## Summary
    /// Returns the canonical rule for this pattern.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn rule(&self) -> PatternResult<RecurrenceRule> {
        derive_rule(self)
    }

    /// Suppresses `date` from all later query results.
    pub fn add_exclude_date(&mut self, date: NaiveDate) {
        self.exclude_dates.push(date);
    }

    /// Applies [`Pattern::add_exclude_date`] to each date in order.
    pub fn add_exclude_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        for date in dates {
            self.add_exclude_date(date);
        }
    }

    /// ## Summary
    /// Returns the first occurrence strictly after `after`.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn next_occurrence(&self, after: NaiveDateTime) -> PatternResult<Option<NaiveDateTime>> {
        let expander = self.expander()?;
        let next = query::next_after(&expander, self.exclude_dates.snapshot(), after);
        tracing::debug!(%after, ?next, "Computed next occurrence");
        Ok(next)
    }

    /// ## Summary
    /// Returns the last occurrence strictly before `before`.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn previous_occurrence(
        &self,
        before: NaiveDateTime,
    ) -> PatternResult<Option<NaiveDateTime>> {
        let expander = self.expander()?;
        let previous = query::previous_before(&expander, self.exclude_dates.snapshot(), before);
        tracing::debug!(%before, ?previous, "Computed previous occurrence");
        Ok(previous)
    }

    /// ## Summary
    /// Returns occurrences strictly between `after` and `before`, ascending,
    /// at most `limit` of them when given.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn occurrences_between(
        &self,
        after: NaiveDateTime,
        before: NaiveDateTime,
        limit: Option<usize>,
    ) -> PatternResult<Vec<NaiveDateTime>> {
        let expander = self.expander()?;
        let occurrences =
            query::between(&expander, self.exclude_dates.snapshot(), after, before, limit);
        tracing::debug!(%after, %before, ?limit, count = occurrences.len(), "Computed occurrences between");
        Ok(occurrences)
    }

    /// ## Summary
    /// Returns the first `limit` occurrences of the series.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn occurrences(&self, limit: usize) -> PatternResult<Vec<NaiveDateTime>> {
        let expander = self.expander()?;
        let occurrences = query::first(&expander, self.exclude_dates.snapshot(), limit);
        tracing::debug!(limit, count = occurrences.len(), "Computed first occurrences");
        Ok(occurrences)
    }

    /// ## Summary
    /// [`Pattern::next_occurrence`] after the current local wall-clock time.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn next_occurrence_from_now(&self) -> PatternResult<Option<NaiveDateTime>> {
        self.next_occurrence(chrono::Local::now().naive_local())
    }

    /// ## Summary
    /// [`Pattern::previous_occurrence`] before the current local wall-clock time.
    ///
    /// ## Errors
    /// Returns `PatternError::InvalidPattern` if the pattern is not valid.
    pub fn previous_occurrence_from_now(&self) -> PatternResult<Option<NaiveDateTime>> {
        self.previous_occurrence(chrono::Local::now().naive_local())
    }

    fn expander(&self) -> PatternResult<Expander> {
        Ok(Expander::new(self.rule()?, self.base_date, self.options))
    }
}

impl From<PatternDescriptor> for Pattern {
    fn from(descriptor: PatternDescriptor) -> Self {
        Self::new(descriptor)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
