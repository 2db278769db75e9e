//! The `result-portal interactive` command.
//!
//! A prompt-driven form: identity, the main subjects, then as many extra
//! subjects as the user wants. Failed calculations keep the form so the user
//! can fix the offending field and try again.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use result_portal_core::model::{OutputFormat, StudentIdentity, MAIN_SUBJECTS};
use result_portal_core::report::ResultReport;
use result_portal_core::ResultForm;

pub fn execute(format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let (format, _) = super::resolve_format(format.as_deref(), config_path.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    FormShell::new(stdin.lock(), stdout.lock(), format).run()
}

/// Typed at a prompt to blank the field instead of keeping its value.
const CLEAR_TOKEN: &str = "-";

/// Terminal form shell over any line-oriented input and output.
pub struct FormShell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
    form: ResultForm,
    eof: bool,
}

impl<R: BufRead, W: Write> FormShell<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
            form: ResultForm::new(),
            eof: false,
        }
    }

    /// Run until the user declines another calculation or input ends.
    pub fn run(mut self) -> Result<()> {
        writeln!(self.output, "Student Result Portal")?;
        writeln!(
            self.output,
            "Press Enter to keep the value shown in [brackets], or type {CLEAR_TOKEN} to clear it."
        )?;

        loop {
            if !self.fill_form()? {
                writeln!(self.output)?;
                return Ok(());
            }

            match self.form.calculate() {
                Ok(summary) => {
                    tracing::debug!(status = %summary.status, "interactive result calculated");
                    let report = ResultReport::new(summary, None);
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "{}",
                        result_portal_report::render(&report, self.format)?
                    )?;
                    if !self.confirm("Calculate another result?", false)? {
                        return Ok(());
                    }
                    self.form = ResultForm::new();
                }
                Err(e) => {
                    writeln!(self.output, "\n{}: {}", e.title(), e.user_message())?;
                    if !self.confirm("Edit the form and try again?", true)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Prompt for every field. Returns `false` if input ended first.
    fn fill_form(&mut self) -> Result<bool> {
        writeln!(self.output, "\nStudent Information")?;
        let current = self.form.identity.clone();
        let Some(name) = self.prompt("Student Name", &current.name)? else {
            return Ok(false);
        };
        let Some(class) = self.prompt("Class", &current.class)? else {
            return Ok(false);
        };
        let Some(seat) = self.prompt("Seat No", &current.seat)? else {
            return Ok(false);
        };
        self.form.set_identity(StudentIdentity::new(name, class, seat));

        writeln!(self.output, "\nMain Subjects")?;
        for subject in MAIN_SUBJECTS {
            let current = self.form.main_mark(subject).unwrap_or_default().to_string();
            let Some(mark) = self.prompt(subject, &current)? else {
                return Ok(false);
            };
            self.form.set_main_mark(subject, mark)?;
        }

        for i in 0..self.form.extra_count() {
            let current = self.form.extra_entries()[i].clone();
            writeln!(self.output, "\nExtra Subject {}", i + 1)?;
            let Some(subject) = self.prompt("Subject", &current.subject)? else {
                return Ok(false);
            };
            let Some(mark) = self.prompt("Marks", &current.mark)? else {
                return Ok(false);
            };
            let entry = &mut self.form.extra_entries_mut()[i];
            entry.subject = subject;
            entry.mark = mark;
        }

        while self.confirm("Add extra subject?", false)? {
            writeln!(self.output, "\nExtra Subject {}", self.form.extra_count() + 1)?;
            let Some(subject) = self.prompt("Subject", "")? else {
                return Ok(false);
            };
            let Some(mark) = self.prompt("Marks", "")? else {
                return Ok(false);
            };
            self.form.add_extra_subject(subject, mark);
        }

        Ok(true)
    }

    /// Ask for one field. Empty input keeps `current`, [`CLEAR_TOKEN`] blanks it;
    /// `None` means end of input.
    fn prompt(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{current}]: ")?;
        }
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        if line.is_empty() {
            Ok(Some(current.to_string()))
        } else if line.trim() == CLEAR_TOKEN {
            Ok(Some(String::new()))
        } else {
            Ok(Some(line))
        }
    }

    /// Yes/no question. End of input counts as "no".
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        write!(self.output, "{question} {hint} ")?;
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(false);
        };
        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
