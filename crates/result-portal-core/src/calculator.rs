//! Marks aggregation and pass/fail computation.

use crate::error::CalcError;
use crate::model::{MarkEntry, ResultStatus, ResultSummary, StudentIdentity, SubjectMark};

/// Validate the identity and marks, then compute the result summary.
///
/// Entries are checked in order and the first invalid mark aborts the whole
/// calculation; no partial summary is ever returned.
pub fn calculate(
    identity: &StudentIdentity,
    entries: &[MarkEntry],
) -> Result<ResultSummary, CalcError> {
    let identity = identity.validated()?;

    let mut subjects = Vec::with_capacity(entries.len());
    let mut failing_subjects = Vec::new();
    let mut total: i64 = 0;

    for entry in entries {
        let subject = entry.resolved_subject().to_string();
        let mark = parse_mark(&entry.mark).ok_or_else(|| CalcError::InvalidMark {
            subject: subject.clone(),
        })?;

        let subject_mark = SubjectMark { subject, mark };
        if subject_mark.is_failing() {
            failing_subjects.push(subject_mark.subject.clone());
        }
        total += i64::from(mark);
        subjects.push(subject_mark);
    }

    let percentage = if subjects.is_empty() {
        0.0
    } else {
        total as f64 / subjects.len() as f64
    };

    let status = if failing_subjects.is_empty() {
        ResultStatus::Passed
    } else {
        ResultStatus::Failed
    };

    tracing::debug!(
        student = %identity.name,
        subjects = subjects.len(),
        total,
        percentage,
        %status,
        "calculated result"
    );

    Ok(ResultSummary {
        identity,
        subjects,
        total,
        percentage,
        status,
        failing_subjects,
    })
}

/// Parse mark text as an integer, ignoring surrounding whitespace.
pub fn parse_mark(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}
