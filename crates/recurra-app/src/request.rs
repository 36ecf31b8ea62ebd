//! JSON query documents accepted by the `recurra` binary.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use recurra_pattern::{ExpansionOptions, Pattern, PatternDescriptor, ValidationIssue};
use serde::{Deserialize, Serialize};

/// One pattern plus the query to run against it.
///
/// Which query runs depends on the bounds present: both bounds list the
/// occurrences between them, `after` alone gives the next occurrence,
/// `before` alone the previous one, and no bounds list the first `limit`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub pattern: PatternDescriptor,
    #[serde(default)]
    pub exclude_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub after: Option<NaiveDateTime>,
    #[serde(default)]
    pub before: Option<NaiveDateTime>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    pub occurrences: Vec<NaiveDateTime>,
}

impl QueryResponse {
    fn invalid(issues: &[ValidationIssue]) -> Self {
        Self {
            valid: false,
            issues: issues.iter().map(ToString::to_string).collect(),
            occurrences: Vec::new(),
        }
    }
}

/// ## Summary
/// Builds the pattern described by `request` and runs its query.
///
/// Invalid patterns produce a response listing the validation issues rather
/// than an error.
///
/// ## Errors
/// Returns an error if expansion fails for a reason other than validity.
pub fn run(
    request: QueryRequest,
    options: ExpansionOptions,
    default_limit: usize,
) -> Result<QueryResponse> {
    let mut pattern = Pattern::new(request.pattern).with_options(options);
    pattern.add_exclude_dates(request.exclude_dates);

    let issues = pattern.validation_issues();
    if !issues.is_empty() {
        tracing::warn!(?issues, "Pattern is not valid");
        return Ok(QueryResponse::invalid(&issues));
    }

    let occurrences = match (request.after, request.before) {
        (Some(after), Some(before)) => pattern.occurrences_between(after, before, request.limit)?,
        (Some(after), None) => pattern.next_occurrence(after)?.into_iter().collect(),
        (None, Some(before)) => pattern.previous_occurrence(before)?.into_iter().collect(),
        (None, None) => pattern.occurrences(request.limit.unwrap_or(default_limit))?,
    };

    Ok(QueryResponse {
        valid: true,
        issues: Vec::new(),
        occurrences,
    })
}
