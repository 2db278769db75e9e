//! result-portal-core — Student marks model, result calculation, and form parsing.
//!
//! This crate defines the data model and the pass/fail computation that the
//! rest of result-portal builds on. Shells (interactive prompts, form files)
//! collect raw text and hand it to [`calculator::calculate`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod parser;
pub mod report;

pub use calculator::calculate;
pub use error::CalcError;
pub use form::ResultForm;
pub use model::{MarkEntry, ResultStatus, ResultSummary, StudentIdentity, SubjectMark};
