//! Integration tests for pattern construction and occurrence queries.

mod scenarios;
