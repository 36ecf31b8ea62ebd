//! Shared types, errors and configuration for the recurra workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use types::{RecurrenceType, WeekIndex, Weekday, WeekdaySet};
