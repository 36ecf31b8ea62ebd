//! Recurrence patterns and occurrence expansion.
//!
//! - `pattern`: the pattern model, its descriptor and exclusion list
//! - `rule`: canonical rules and calendar arithmetic
//! - `expand`: lazy period walks and the query shapes built on them
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use recurra_core::{RecurrenceType, Weekday};
//! use recurra_pattern::{Pattern, PatternDescriptor};
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
//! let pattern = Pattern::new(
//!     PatternDescriptor::on_date(anchor, RecurrenceType::Weekly, 2)
//!         .with_days_of_week([Weekday::Tuesday]),
//! );
//!
//! let next = pattern.next_occurrence(anchor.and_hms_opt(0, 0, 0).unwrap()).unwrap();
//! assert_eq!(next.map(|dt| dt.date()), NaiveDate::from_ymd_opt(2024, 4, 2));
//! ```

pub mod error;
pub mod expand;
pub mod pattern;
pub mod rule;

pub use error::{PatternError, PatternResult, ValidationIssue};
pub use expand::ExpansionOptions;
pub use pattern::{ExclusionList, Pattern, PatternDescriptor};
pub use rule::{Frequency, RecurrenceRule, RuleKind, derive_rule};
