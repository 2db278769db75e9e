//! The `result-portal calculate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use result_portal_core::model::OutputFormat;
use result_portal_core::parser;
use result_portal_core::report::ResultReport;
use result_portal_report::html::write_html_report;

pub fn execute(
    form_path: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (format, config) = super::resolve_format(format.as_deref(), config_path.as_deref())?;
    let output = output.or(config.output_dir);

    let forms = parser::load_forms(&form_path)?;
    anyhow::ensure!(
        !forms.is_empty(),
        "no form files found in {}",
        form_path.display()
    );

    let multiple = forms.len() > 1;
    let mut failed = 0usize;

    for loaded in &forms {
        let summary = match loaded.form.calculate() {
            Ok(summary) => summary,
            Err(e) if !multiple => {
                anyhow::bail!("{}: {}", e.title(), e.user_message());
            }
            Err(e) => {
                eprintln!(
                    "Error: {}: {}: {}",
                    loaded.path.display(),
                    e.title(),
                    e.user_message()
                );
                failed += 1;
                continue;
            }
        };

        let report = ResultReport::new(summary, Some(loaded.path.display().to_string()));
        if multiple && format == OutputFormat::Text {
            println!("== {} ==", loaded.path.display());
        }
        println!("{}", result_portal_report::render(&report, format)?);

        if let Some(dir) = &output {
            let path = save_report(&report, format, dir, &loaded.path)?;
            eprintln!("Saved: {}", path.display());
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} form(s) could not be calculated",
            forms.len()
        );
    }

    Ok(())
}

/// Save a rendered report as `<dir>/<form stem>.<ext>`.
fn save_report(
    report: &ResultReport,
    format: OutputFormat,
    dir: &Path,
    form_path: &Path,
) -> Result<PathBuf> {
    let stem = form_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "result".to_string());
    let path = dir.join(format!("{stem}.{}", format.extension()));

    match format {
        OutputFormat::Json => report.save_json(&path)?,
        OutputFormat::Html => write_html_report(report, &path)?,
        OutputFormat::Text | OutputFormat::Markdown => {
            std::fs::create_dir_all(dir)?;
            std::fs::write(&path, result_portal_report::render(report, format)?)?;
        }
    }

    Ok(path)
}
