//! TOML form file parser.
//!
//! Loads mark forms from TOML files and directories, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::parse_mark;
use crate::form::ResultForm;
use crate::model::{StudentIdentity, EXTRA_SUBJECT_DEFAULT};

/// Intermediate TOML structure for parsing form files.
#[derive(Debug, Deserialize)]
struct TomlFormFile {
    #[serde(default)]
    student: TomlStudent,
    #[serde(default)]
    marks: BTreeMap<String, TomlMark>,
    #[serde(default)]
    extra: Vec<TomlExtraSubject>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlStudent {
    #[serde(default)]
    name: String,
    #[serde(default)]
    class: String,
    #[serde(default)]
    seat: TomlMark,
}

#[derive(Debug, Deserialize)]
struct TomlExtraSubject {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    mark: TomlMark,
}

/// Marks (and seat numbers) may be written as TOML numbers or strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlMark {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for TomlMark {
    fn default() -> Self {
        TomlMark::Text(String::new())
    }
}

impl TomlMark {
    fn into_text(self) -> String {
        match self {
            TomlMark::Int(n) => n.to_string(),
            // Debug keeps the fractional part ("72.0"), so it never parses as a mark.
            TomlMark::Float(f) => format!("{f:?}"),
            TomlMark::Text(s) => s,
        }
    }
}

/// A form loaded from disk together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedForm {
    pub path: PathBuf,
    pub form: ResultForm,
}

/// Parse a single TOML file into a `ResultForm`.
pub fn parse_form(path: &Path) -> Result<ResultForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file: {}", path.display()))?;

    parse_form_str(&content, path)
}

/// Parse a TOML string into a `ResultForm` (useful for testing).
pub fn parse_form_str(content: &str, source_path: &Path) -> Result<ResultForm> {
    let parsed: TomlFormFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut form = ResultForm::with_identity(StudentIdentity::new(
        parsed.student.name,
        parsed.student.class,
        parsed.student.seat.into_text(),
    ));

    let mut seen = HashSet::new();
    for (subject, mark) in parsed.marks {
        if !seen.insert(subject.trim().to_lowercase()) {
            anyhow::bail!(
                "duplicate main subject '{}' in {}",
                subject,
                source_path.display()
            );
        }
        form.set_main_mark(&subject, mark.into_text())
            .with_context(|| format!("in {}", source_path.display()))?;
    }

    for extra in parsed.extra {
        form.add_extra_subject(extra.subject, extra.mark.into_text());
    }

    Ok(form)
}

/// Recursively load all `.toml` form files from a directory, sorted by path.
pub fn load_form_directory(dir: &Path) -> Result<Vec<LoadedForm>> {
    let mut forms = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            forms.extend(load_form_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_form(&path) {
                Ok(form) => forms.push(LoadedForm { path, form }),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    forms.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(forms)
}

/// Load a single form file, or every form under a directory.
pub fn load_forms(path: &Path) -> Result<Vec<LoadedForm>> {
    if path.is_dir() {
        load_form_directory(path)
    } else {
        Ok(vec![LoadedForm {
            path: path.to_path_buf(),
            form: parse_form(path)?,
        }])
    }
}

/// A warning from form validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn student(message: impl Into<String>) -> Self {
        Self {
            subject: None,
            message: message.into(),
        }
    }

    fn subject(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a form for common issues without computing a result.
pub fn validate_form(form: &ResultForm) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let identity = &form.identity;
    for (label, value) in [
        ("student name", &identity.name),
        ("class", &identity.class),
        ("seat number", &identity.seat),
    ] {
        if value.trim().is_empty() {
            warnings.push(ValidationWarning::student(format!("{label} is blank")));
        }
    }

    for entry in form.extra_entries() {
        if entry.subject.trim().is_empty() {
            warnings.push(ValidationWarning::subject(
                EXTRA_SUBJECT_DEFAULT,
                format!("extra subject has no name; it will be reported as \"{EXTRA_SUBJECT_DEFAULT}\""),
            ));
        }
    }

    let mut seen = HashSet::new();
    for entry in form.entries() {
        let subject = entry.resolved_subject();
        if !seen.insert(subject.to_lowercase()) {
            warnings.push(ValidationWarning::subject(
                subject,
                format!("duplicate subject: {subject}"),
            ));
        }

        match parse_mark(&entry.mark) {
            None if entry.mark.trim().is_empty() => {
                warnings.push(ValidationWarning::subject(subject, "mark is blank"));
            }
            None => warnings.push(ValidationWarning::subject(
                subject,
                format!("mark '{}' is not a whole number", entry.mark.trim()),
            )),
            Some(mark) if !(0..=100).contains(&mark) => {
                warnings.push(ValidationWarning::subject(
                    subject,
                    format!("mark {mark} is outside the usual 0-100 range"),
                ));
            }
            Some(_) => {}
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOML: &str = r#"
[student]
name = "Asha"
class = "10A"
seat = "07"

[marks]
Java = 90
Python = "40"
OOSE = 30
"Cyber Security" = 60
"#;

    fn path() -> PathBuf {
        PathBuf::from("test.toml")
    }

    #[test]
    fn parse_valid_toml() {
        let form = parse_form_str(VALID_TOML, &path()).unwrap();
        assert_eq!(form.identity.name, "Asha");
        assert_eq!(form.identity.seat, "07");
        assert_eq!(form.main_mark("Python"), Some("40"));
        let summary = form.calculate().unwrap();
        assert_eq!(summary.total, 220);
        assert_eq!(summary.failing_subjects, vec!["OOSE"]);
    }

    #[test]
    fn parse_extra_subjects_in_order() {
        let toml = format!(
            "{VALID_TOML}
[[extra]]
subject = \"Art\"
mark = 55

[[extra]]
mark = \"20\"
"
        );
        let form = parse_form_str(&toml, &path()).unwrap();
        assert_eq!(form.extra_count(), 2);
        let summary = form.calculate().unwrap();
        assert_eq!(summary.subjects[4].subject, "Art");
        assert_eq!(summary.subjects[5].subject, "Extra Subject");
    }

    #[test]
    fn numeric_seat_is_accepted() {
        let toml = "[student]\nname = \"Ravi\"\nclass = \"9B\"\nseat = 12\n";
        let form = parse_form_str(toml, &path()).unwrap();
        assert_eq!(form.identity.seat, "12");
    }

    #[test]
    fn missing_sections_leave_blanks() {
        let form = parse_form_str("", &path()).unwrap();
        assert!(form.identity.name.is_empty());
        assert_eq!(form.main_mark("Java"), Some(""));
    }

    #[test]
    fn unknown_main_subject_is_an_error() {
        let toml = "[marks]\nChemistry = 50\n";
        let err = parse_form_str(toml, &path()).unwrap_err();
        assert!(format!("{err:#}").contains("Chemistry"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_form_str(bad, &path()).is_err());
    }

    #[test]
    fn validate_clean_form() {
        let form = parse_form_str(VALID_TOML, &path()).unwrap();
        assert!(validate_form(&form).is_empty());
    }

    #[test]
    fn validate_reports_problems() {
        let toml = r#"
[student]
name = "Asha"
class = ""
seat = "07"

[marks]
Java = 120
Python = "abc"
OOSE = 30

[[extra]]
subject = "java"
mark = 50

[[extra]]
mark = 40
"#;
        let form = parse_form_str(toml, &path()).unwrap();
        let warnings = validate_form(&form);
        let has = |needle: &str| warnings.iter().any(|w| w.message.contains(needle));
        assert!(has("class is blank"));
        assert!(has("outside the usual 0-100 range"));
        assert!(has("'abc' is not a whole number"));
        assert!(has("mark is blank"));
        assert!(has("duplicate subject"));
        assert!(has("no name"));
    }

    #[test]
    fn float_mark_fails_calculation() {
        let toml = VALID_TOML.replace("Java = 90", "Java = 72.5");
        let form = parse_form_str(&toml, &path()).unwrap();
        let err = form.calculate().unwrap_err();
        assert_eq!(err.subject(), Some("Java"));
    }

    #[test]
    fn whole_float_marks_are_not_integers() {
        let toml = VALID_TOML
            .replace("Java = 90", "Java = 72.0")
            .replace("Python = \"40\"", "Python = 1e2");
        let form = parse_form_str(&toml, &path()).unwrap();
        assert_eq!(form.main_mark("Java"), Some("72.0"));
        assert_eq!(form.main_mark("Python"), Some("100.0"));

        let err = form.calculate().unwrap_err();
        assert_eq!(err.subject(), Some("Java"));

        let warnings = validate_form(&form);
        assert!(warnings
            .iter()
            .any(|w| w.subject.as_deref() == Some("Java") && w.message.contains("not a whole number")));
        assert!(warnings
            .iter()
            .any(|w| w.subject.as_deref() == Some("Python") && w.message.contains("not a whole number")));
    }

    #[test]
    fn same_main_subject_twice_is_an_error() {
        let toml = VALID_TOML.replace("OOSE = 30", "OOSE = 30\njava = 10");
        let err = parse_form_str(&toml, &path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("duplicate main subject"), "{msg}");
        assert!(msg.contains("java"), "{msg}");
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.toml"), VALID_TOML).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/a.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[[[").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let forms = load_form_directory(dir.path()).unwrap();
        assert_eq!(forms.len(), 2);
        assert!(forms[0].path < forms[1].path);
    }

    #[test]
    fn load_forms_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("asha.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        let forms = load_forms(&file).unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].path, file);
    }
}
