//! The mark form a shell fills in before asking for a result.
//!
//! A form always carries the main subjects, in order, followed by any extra
//! subjects the user added. Nothing is validated until [`ResultForm::calculate`].

use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::error::CalcError;
use crate::model::{MarkEntry, ResultSummary, StudentIdentity, MAIN_SUBJECTS};

/// Raw form state owned by a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultForm {
    pub identity: StudentIdentity,
    main: Vec<MarkEntry>,
    extra: Vec<MarkEntry>,
}

impl Default for ResultForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultForm {
    /// An empty form with the main subjects and blank marks.
    pub fn new() -> Self {
        Self {
            identity: StudentIdentity::default(),
            main: MAIN_SUBJECTS
                .iter()
                .map(|s| MarkEntry::new(*s, ""))
                .collect(),
            extra: Vec::new(),
        }
    }

    pub fn with_identity(identity: StudentIdentity) -> Self {
        Self {
            identity,
            ..Self::new()
        }
    }

    pub fn set_identity(&mut self, identity: StudentIdentity) {
        self.identity = identity;
    }

    /// Set the mark text for one of the main subjects.
    ///
    /// Subject names match case-insensitively.
    pub fn set_main_mark(&mut self, subject: &str, mark: impl Into<String>) -> Result<(), CalcError> {
        let entry = self
            .main
            .iter_mut()
            .find(|e| e.subject.eq_ignore_ascii_case(subject.trim()))
            .ok_or_else(|| CalcError::UnknownSubject(subject.trim().to_string()))?;
        entry.mark = mark.into();
        Ok(())
    }

    /// Current mark text for a main subject, if it is on the form.
    pub fn main_mark(&self, subject: &str) -> Option<&str> {
        self.main
            .iter()
            .find(|e| e.subject.eq_ignore_ascii_case(subject.trim()))
            .map(|e| e.mark.as_str())
    }

    /// Append an extra subject row. A blank name is allowed.
    pub fn add_extra_subject(&mut self, subject: impl Into<String>, mark: impl Into<String>) {
        self.extra.push(MarkEntry::new(subject, mark));
    }

    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }

    pub fn main_entries(&self) -> &[MarkEntry] {
        &self.main
    }

    pub fn extra_entries(&self) -> &[MarkEntry] {
        &self.extra
    }

    /// Mutable access to the extra rows, for shells that edit them in place.
    pub fn extra_entries_mut(&mut self) -> &mut [MarkEntry] {
        &mut self.extra
    }

    /// Main subjects followed by extra subjects, in entry order.
    pub fn entries(&self) -> Vec<MarkEntry> {
        self.main.iter().chain(self.extra.iter()).cloned().collect()
    }

    /// Run the result calculation over the form's current contents.
    pub fn calculate(&self) -> Result<ResultSummary, CalcError> {
        calculator::calculate(&self.identity, &self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(marks: [&str; 4]) -> ResultForm {
        let mut form = ResultForm::with_identity(StudentIdentity::new("Asha", "10A", "07"));
        for (subject, mark) in MAIN_SUBJECTS.iter().zip(marks) {
            form.set_main_mark(subject, mark).unwrap();
        }
        form
    }

    #[test]
    fn new_form_has_main_subjects_in_order() {
        let form = ResultForm::new();
        let entries = form.entries();
        let names: Vec<&str> = entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(names, MAIN_SUBJECTS);
        assert_eq!(form.extra_count(), 0);
    }

    #[test]
    fn blank_main_mark_is_invalid() {
        let mut form = ResultForm::with_identity(StudentIdentity::new("Asha", "10A", "07"));
        form.set_main_mark("Java", "90").unwrap();
        let err = form.calculate().unwrap_err();
        assert_eq!(err.subject(), Some("Python"));
    }

    #[test]
    fn extra_subjects_follow_main_subjects() {
        let mut form = filled(["90", "40", "30", "60"]);
        form.add_extra_subject("", "10");
        form.add_extra_subject("Art", "70");
        let summary = form.calculate().unwrap();
        assert_eq!(summary.subjects.len(), 6);
        assert_eq!(summary.subjects[4].subject, "Extra Subject");
        assert_eq!(summary.subjects[5].subject, "Art");
        assert_eq!(summary.total, 300);
        assert_eq!(summary.failing_subjects, vec!["OOSE", "Extra Subject"]);
    }

    #[test]
    fn unknown_main_subject_is_rejected() {
        let mut form = ResultForm::new();
        let err = form.set_main_mark("Chemistry", "50").unwrap_err();
        assert_eq!(err, CalcError::UnknownSubject("Chemistry".into()));
    }

    #[test]
    fn main_subject_lookup_ignores_case() {
        let mut form = ResultForm::new();
        form.set_main_mark("cyber security", "55").unwrap();
        assert_eq!(form.main_mark("Cyber Security"), Some("55"));
    }

    #[test]
    fn form_is_reusable_after_error() {
        let mut form = filled(["90", "abc", "30", "60"]);
        assert!(form.calculate().is_err());
        form.set_main_mark("Python", "40").unwrap();
        assert_eq!(form.calculate().unwrap().total, 220);
    }
}
