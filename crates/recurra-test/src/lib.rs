//! Recurra integration test support.
//!
//! Re-exports the workspace crates so integration tests can use `recurra::`
//! paths.

pub mod recurra {
    pub use recurra_core::{RecurrenceType, WeekIndex, Weekday, WeekdaySet};
    pub use recurra_pattern::{
        ExclusionList, ExpansionOptions, Frequency, Pattern, PatternDescriptor, PatternError,
        PatternResult, RecurrenceRule, RuleKind, ValidationIssue, derive_rule,
    };

    pub mod config {
        pub use recurra_core::config::*;
        pub use recurra_core::constants::*;
    }
}
