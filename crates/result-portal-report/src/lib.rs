//! result-portal-report — Text, Markdown, HTML and JSON rendering of results.

pub mod html;
pub mod markdown;
pub mod text;

use anyhow::Result;

use result_portal_core::model::OutputFormat;
use result_portal_core::report::ResultReport;

/// Render a report in the requested format.
pub fn render(report: &ResultReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text::render_text(&report.summary),
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Markdown => markdown::render_markdown(&report.summary),
        OutputFormat::Html => html::generate_html(report),
    })
}
