//! Construction input for a recurrence pattern.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use recurra_core::{RecurrenceType, WeekIndex, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

/// Recurrence descriptor as supplied by callers.
///
/// Field names and tokens follow the external vocabulary (`"type":
/// "relativeMonthly"`, `"daysOfWeek": ["thursday"]`, `"index": "third"`).
/// Optional fields only matter for the recurrence types that use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDescriptor {
    /// Anchor of the series; accepts `2024-03-21` or `2024-03-21T09:30:00`.
    #[serde(deserialize_with = "deserialize_anchor")]
    pub base_date: NaiveDateTime,

    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,

    /// Frequency units between occurrence sets.
    ///
    /// Kept signed so out-of-range values survive deserialization and are
    /// reported by validation instead.
    pub interval: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<Weekday>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day_of_week: Option<Weekday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<WeekIndex>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
}

impl PatternDescriptor {
    /// Creates a descriptor with every optional field unset.
    #[must_use]
    pub fn new(base_date: NaiveDateTime, recurrence_type: RecurrenceType, interval: i64) -> Self {
        Self {
            base_date,
            recurrence_type,
            interval,
            days_of_week: None,
            first_day_of_week: None,
            day_of_month: None,
            index: None,
            month: None,
        }
    }

    /// Creates a descriptor anchored at midnight of `date`.
    #[must_use]
    pub fn on_date(date: NaiveDate, recurrence_type: RecurrenceType, interval: i64) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), recurrence_type, interval)
    }

    #[must_use]
    pub fn with_days_of_week(mut self, days: impl Into<Vec<Weekday>>) -> Self {
        self.days_of_week = Some(days.into());
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = Some(day);
        self
    }

    #[must_use]
    pub fn with_day_of_month(mut self, day: i64) -> Self {
        self.day_of_month = Some(day);
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: WeekIndex) -> Self {
        self.index = Some(index);
        self
    }

    #[must_use]
    pub fn with_month(mut self, month: i64) -> Self {
        self.month = Some(month);
        self
    }
}

fn deserialize_anchor<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }
    raw.parse::<NaiveDate>()
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|e| serde::de::Error::custom(format!("invalid baseDate {raw:?}: {e}")))
}
