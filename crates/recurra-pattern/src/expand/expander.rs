//! Period-by-period expansion of a recurrence rule.
//!
//! A period is one interval step of the rule's frequency, counted from the
//! period containing the anchor: `interval` days, `interval` weeks starting on
//! the rule's week start, the `interval`-th following month, or year. Each
//! period yields a handful of candidate dates, so walks never materialize the
//! (possibly infinite) series.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use super::ExpansionOptions;
use crate::rule::calendar;
use crate::rule::{Frequency, RecurrenceRule, RuleKind};

/// Walk order over periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// ## Summary
/// Expands a rule anchored at a date-time into concrete occurrences.
///
/// Occurrences carry the anchor's time of day and are never earlier than the
/// anchor itself.
#[derive(Debug, Clone, Copy)]
pub struct Expander {
    rule: RecurrenceRule,
    anchor: NaiveDateTime,
    options: ExpansionOptions,
}

impl Expander {
    #[must_use]
    pub fn new(rule: RecurrenceRule, anchor: NaiveDateTime, options: ExpansionOptions) -> Self {
        Self {
            rule,
            anchor,
            options,
        }
    }

    /// ## Summary
    /// Returns the index of the period containing `date`.
    ///
    /// Dates before the anchor's period give negative indices. Returns `None`
    /// only if the anchor's week start falls outside the supported date range.
    #[must_use]
    pub fn period_index(&self, date: NaiveDate) -> Option<i64> {
        let interval = i64::from(self.rule.interval.get());
        let anchor = self.anchor.date();

        let units = match self.rule.frequency() {
            Frequency::Daily => date.signed_duration_since(anchor).num_days(),
            Frequency::Weekly => {
                let origin = calendar::week_start(anchor, self.rule.week_start)?;
                date.signed_duration_since(origin).num_days().div_euclid(7)
            }
            Frequency::Monthly => {
                (i64::from(date.year()) - i64::from(anchor.year())) * 12
                    + i64::from(date.month())
                    - i64::from(anchor.month())
            }
            Frequency::Yearly => i64::from(date.year()) - i64::from(anchor.year()),
        };

        Some(units.div_euclid(interval))
    }

    /// ## Summary
    /// Returns the occurrences of one period in ascending order.
    ///
    /// Returns `None` once the period lies outside the representable date
    /// range, which ends any walk reaching it.
    #[must_use]
    pub fn occurrences_in(&self, period: i64) -> Option<Vec<NaiveDateTime>> {
        let steps = u64::try_from(period)
            .ok()?
            .checked_mul(u64::from(self.rule.interval.get()))?;
        let anchor = self.anchor.date();

        let dates: Vec<NaiveDate> = match self.rule.kind {
            RuleKind::Daily => vec![anchor.checked_add_days(Days::new(steps))?],
            RuleKind::Weekly { days } => {
                let start = calendar::week_start(anchor, self.rule.week_start)?
                    .checked_add_days(Days::new(steps.checked_mul(7)?))?;
                (0..7)
                    .filter_map(|offset| start.checked_add_days(Days::new(offset)))
                    .filter(|date| days.matches(date.weekday()))
                    .collect()
            }
            RuleKind::AbsoluteMonthly { day } => {
                let (year, month) = self.month_of(steps)?;
                day.resolve(year, month).into_iter().collect()
            }
            RuleKind::RelativeMonthly { days, set_position } => {
                let (year, month) = self.month_of(steps)?;
                calendar::nth_matching_weekday(year, month, days, set_position)
                    .into_iter()
                    .collect()
            }
            RuleKind::AbsoluteYearly { month, day } => {
                let year = self.year_of(steps)?;
                day.resolve(year, month.number_from_month())
                    .into_iter()
                    .collect()
            }
            RuleKind::RelativeYearly {
                month,
                days,
                set_position,
            } => {
                let year = self.year_of(steps)?;
                calendar::nth_matching_weekday(year, month.number_from_month(), days, set_position)
                    .into_iter()
                    .collect()
            }
        };

        Some(
            dates
                .into_iter()
                .filter(|date| *date >= anchor)
                .map(|date| date.and_time(self.anchor.time()))
                .collect(),
        )
    }

    /// ## Summary
    /// Starts a walk at the period containing `from`.
    ///
    /// Forward walks begin no earlier than the anchor's period; backward walks
    /// starting before it are empty.
    #[must_use]
    pub fn walk(&self, from: NaiveDate, direction: Direction) -> Walk {
        let start = self.period_index(from).and_then(|period| match direction {
            Direction::Forward => Some(period.max(0)),
            Direction::Backward => (period >= 0).then_some(period),
        });

        Walk {
            expander: *self,
            direction,
            period: start,
            idle: 0,
            excluded: HashSet::new(),
            pending: Vec::new().into_iter(),
        }
    }

    /// Walks the whole series from the anchor.
    #[must_use]
    pub fn series(&self) -> Walk {
        self.walk(self.anchor.date(), Direction::Forward)
    }

    fn month_of(&self, steps: u64) -> Option<(i32, u32)> {
        let anchor = self.anchor.date();
        calendar::shift_month(anchor.year(), anchor.month(), i64::try_from(steps).ok()?)
    }

    fn year_of(&self, steps: u64) -> Option<i32> {
        let year = i64::from(self.anchor.year()).checked_add(i64::try_from(steps).ok()?)?;
        i32::try_from(year)
            .ok()
            .filter(|year| *year <= NaiveDate::MAX.year())
    }
}

/// Lazy iterator over occurrences in walk order.
///
/// Forward walks yield ascending date-times, backward walks descending ones.
/// A walk gives up after `max_periods` consecutive periods without a kept
/// occurrence, so searches that can never match still terminate.
#[derive(Debug)]
pub struct Walk {
    expander: Expander,
    direction: Direction,
    period: Option<i64>,
    idle: u32,
    excluded: HashSet<NaiveDate>,
    pending: std::vec::IntoIter<NaiveDateTime>,
}

impl Walk {
    /// Drops occurrences falling on any of `dates`.
    #[must_use]
    pub fn excluding(mut self, dates: HashSet<NaiveDate>) -> Self {
        self.excluded = dates;
        self
    }

    fn keep(&self, occurrence: NaiveDateTime) -> bool {
        let skip = self.excluded.contains(&occurrence.date());
        if skip {
            tracing::trace!(%occurrence, "Skipping excluded occurrence");
        }
        !skip
    }
}

impl Iterator for Walk {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        loop {
            if let Some(occurrence) = self.pending.next() {
                return Some(occurrence);
            }

            let period = self.period?;
            if self.idle >= self.expander.options.max_periods {
                tracing::warn!(
                    period,
                    max_periods = self.expander.options.max_periods,
                    direction = ?self.direction,
                    "Expansion stopped after too many periods without an occurrence"
                );
                self.period = None;
                return None;
            }

            self.period = match self.direction {
                Direction::Forward => period.checked_add(1),
                Direction::Backward => period.checked_sub(1).filter(|p| *p >= 0),
            };

            let Some(mut occurrences) = self.expander.occurrences_in(period) else {
                // Past the calendar's end. Going forward nothing follows; going
                // backward, earlier periods may still be representable.
                match self.direction {
                    Direction::Forward => self.period = None,
                    Direction::Backward => self.idle += 1,
                }
                continue;
            };

            occurrences.retain(|occurrence| self.keep(*occurrence));
            if occurrences.is_empty() {
                self.idle += 1;
                continue;
            }
            self.idle = 0;

            if self.direction == Direction::Backward {
                occurrences.reverse();
            }
            self.pending = occurrences.into_iter();
        }
    }
}

#[cfg(test)]
#[path = "expander_tests.rs"]
mod tests;
