//! Calculation error types.
//!
//! Every variant is a user-correctable input problem. Shells report the
//! message and leave the form open for another attempt.

use thiserror::Error;

/// Errors that abort a result calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One or more of name, class, or seat number is empty after trimming.
    #[error("missing student information: name, class and seat number are required")]
    MissingIdentity,

    /// The mark text for `subject` is not a valid integer.
    #[error("invalid marks for {subject}")]
    InvalidMark { subject: String },

    /// A main-subject mark was set for a subject that is not on the form.
    #[error("unknown main subject: {0}")]
    UnknownSubject(String),
}

impl CalcError {
    /// Short heading shown above the message, e.g. in a dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            CalcError::MissingIdentity => "Missing Info",
            CalcError::InvalidMark { .. } | CalcError::UnknownSubject(_) => "Invalid Input",
        }
    }

    /// The message shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::MissingIdentity => "Please fill in all student fields.".to_string(),
            CalcError::InvalidMark { subject } => {
                format!("Please enter valid marks for {subject}.")
            }
            CalcError::UnknownSubject(subject) => {
                format!("{subject} is not a main subject; add it as an extra subject.")
            }
        }
    }

    /// The subject this error refers to, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            CalcError::InvalidMark { subject } | CalcError::UnknownSubject(subject) => {
                Some(subject)
            }
            CalcError::MissingIdentity => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_subject() {
        let err = CalcError::InvalidMark {
            subject: "Python".into(),
        };
        assert_eq!(err.title(), "Invalid Input");
        assert_eq!(err.user_message(), "Please enter valid marks for Python.");
        assert_eq!(err.subject(), Some("Python"));
        assert_eq!(err.to_string(), "invalid marks for Python");
    }

    #[test]
    fn missing_identity_has_no_subject() {
        let err = CalcError::MissingIdentity;
        assert_eq!(err.title(), "Missing Info");
        assert_eq!(err.user_message(), "Please fill in all student fields.");
        assert!(err.subject().is_none());
    }
}
