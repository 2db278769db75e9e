//! Core data model types for result-portal.
//!
//! These are the types every shell and renderer shares: the student's
//! identity, raw and validated subject marks, and the computed summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Marks strictly below this value fail the subject.
pub const PASS_THRESHOLD: i32 = 35;

/// The fixed subjects every form starts with, in display order.
pub const MAIN_SUBJECTS: [&str; 4] = ["Java", "Python", "OOSE", "Cyber Security"];

/// Name given to an extra subject left blank.
pub const EXTRA_SUBJECT_DEFAULT: &str = "Extra Subject";

/// Who the result belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    /// Student name.
    pub name: String,
    /// Class label (e.g. "10A").
    pub class: String,
    /// Seat number; kept as text so leading zeros survive.
    pub seat: String,
}

impl StudentIdentity {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        seat: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            seat: seat.into(),
        }
    }

    /// Return a trimmed copy, or `MissingIdentity` if any field is blank.
    pub fn validated(&self) -> Result<StudentIdentity, CalcError> {
        let name = self.name.trim();
        let class = self.class.trim();
        let seat = self.seat.trim();
        if name.is_empty() || class.is_empty() || seat.is_empty() {
            return Err(CalcError::MissingIdentity);
        }
        Ok(StudentIdentity::new(name, class, seat))
    }

    /// One-line description shown above a result table.
    pub fn info_line(&self) -> String {
        format!(
            "Name: {}    Class: {}    Seat No: {}",
            self.name, self.class, self.seat
        )
    }
}

/// A subject and its mark exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkEntry {
    /// Subject name; may be blank for extra subjects.
    pub subject: String,
    /// Unparsed mark text.
    pub mark: String,
}

impl MarkEntry {
    pub fn new(subject: impl Into<String>, mark: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            mark: mark.into(),
        }
    }

    /// The subject name to report, falling back to [`EXTRA_SUBJECT_DEFAULT`].
    pub fn resolved_subject(&self) -> &str {
        match self.subject.trim() {
            "" => EXTRA_SUBJECT_DEFAULT,
            name => name,
        }
    }
}

/// A validated subject mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectMark {
    pub subject: String,
    pub mark: i32,
}

impl SubjectMark {
    /// Whether this mark is below [`PASS_THRESHOLD`].
    pub fn is_failing(&self) -> bool {
        self.mark < PASS_THRESHOLD
    }
}

/// Overall outcome of a result calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    Passed,
    Failed,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatus::Passed => write!(f, "Passed"),
            ResultStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// The computed result for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Trimmed identity of the student.
    pub identity: StudentIdentity,
    /// Subjects in the order they were entered.
    pub subjects: Vec<SubjectMark>,
    /// Sum of all marks.
    pub total: i64,
    /// `total / subjects.len()`; 0.0 when there are no subjects.
    pub percentage: f64,
    pub status: ResultStatus,
    /// Subjects with a mark below [`PASS_THRESHOLD`], in entry order.
    pub failing_subjects: Vec<String>,
}

impl ResultSummary {
    /// Percentage formatted to two decimal places, e.g. `"55.00"`.
    pub fn percentage_display(&self) -> String {
        format!("{:.2}", self.percentage)
    }

    pub fn is_passed(&self) -> bool {
        self.status == ResultStatus::Passed
    }
}

/// Output formats understood by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    /// File extension used when a rendered report is saved.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
