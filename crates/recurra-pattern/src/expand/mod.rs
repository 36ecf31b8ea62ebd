//! Occurrence expansion for canonical recurrence rules.
//!
//! - `expander`: walks rule periods forward or backward from a date
//! - `query`: the next/previous/between/first-N query shapes over a walk

mod expander;
mod options;
pub mod query;

pub use expander::{Direction, Expander, Walk};
pub use options::ExpansionOptions;
