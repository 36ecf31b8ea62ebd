use std::collections::HashSet;

use chrono::NaiveDate;

/// Append-only list of suppressed occurrence dates.
///
/// Matching is by calendar date; duplicates are kept as given. Mutation needs
/// `&mut`, so a list cannot change while a query borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    dates: Vec<NaiveDate>,
}

impl ExclusionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate) {
        self.dates.push(date);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Copies the current dates into a lookup set for one query.
    #[must_use]
    pub fn snapshot(&self) -> HashSet<NaiveDate> {
        self.dates.iter().copied().collect()
    }
}

impl Extend<NaiveDate> for ExclusionList {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        for date in iter {
            self.push(date);
        }
    }
}
