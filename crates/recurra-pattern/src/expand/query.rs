//! Query shapes over an expander.
//!
//! Bounds are exclusive: an occurrence equal to `after` or `before` is never
//! returned. Excluded dates are filtered before any limit is applied.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Direction, Expander};

/// Earliest non-excluded occurrence strictly after `after`.
#[must_use]
pub fn next_after(
    expander: &Expander,
    excluded: HashSet<NaiveDate>,
    after: NaiveDateTime,
) -> Option<NaiveDateTime> {
    expander
        .walk(after.date(), Direction::Forward)
        .excluding(excluded)
        .find(|occurrence| *occurrence > after)
}

/// Latest non-excluded occurrence strictly before `before`.
#[must_use]
pub fn previous_before(
    expander: &Expander,
    excluded: HashSet<NaiveDate>,
    before: NaiveDateTime,
) -> Option<NaiveDateTime> {
    expander
        .walk(before.date(), Direction::Backward)
        .excluding(excluded)
        .find(|occurrence| *occurrence < before)
}

/// Non-excluded occurrences in the open interval `(after, before)`, ascending,
/// truncated to `limit` if given.
#[must_use]
pub fn between(
    expander: &Expander,
    excluded: HashSet<NaiveDate>,
    after: NaiveDateTime,
    before: NaiveDateTime,
    limit: Option<usize>,
) -> Vec<NaiveDateTime> {
    if before <= after {
        return Vec::new();
    }

    expander
        .walk(after.date(), Direction::Forward)
        .excluding(excluded)
        .skip_while(|occurrence| *occurrence <= after)
        .take_while(|occurrence| *occurrence < before)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// First `limit` non-excluded occurrences of the series.
#[must_use]
pub fn first(expander: &Expander, excluded: HashSet<NaiveDate>, limit: usize) -> Vec<NaiveDateTime> {
    expander.series().excluding(excluded).take(limit).collect()
}
