//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use result_portal_core::report::ResultReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a result report.
pub fn generate_html(report: &ResultReport) -> String {
    let summary = &report.summary;
    let identity = &summary.identity;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Student Result — {}</title>\n",
        html_escape(&identity.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Result Summary</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Name: <strong>{}</strong> | Class: <strong>{}</strong> | Seat No: <strong>{}</strong> | {}</p>\n",
        html_escape(&identity.name),
        html_escape(&identity.class),
        html_escape(&identity.seat),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Marks table
    html.push_str("<section class=\"results\">\n");
    html.push_str("<table id=\"marks\">\n");
    html.push_str("<thead><tr><th>Subject</th><th>Marks</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for s in &summary.subjects {
        let class = if s.is_failing() { "fail" } else { "pass" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td class=\"mark\">{}</td></tr>\n",
            class,
            html_escape(&s.subject),
            s.mark
        ));
    }
    html.push_str("</tbody>\n<tfoot>\n");
    html.push_str(&format!(
        "<tr><th>Total Marks</th><td class=\"mark\">{}</td></tr>\n",
        summary.total
    ));
    html.push_str(&format!(
        "<tr><th>Percentage</th><td class=\"mark\">{}%</td></tr>\n",
        summary.percentage_display()
    ));
    let status_class = if summary.is_passed() { "pass" } else { "fail" };
    html.push_str(&format!(
        "<tr class=\"{}\"><th>Result</th><td class=\"mark\">{}</td></tr>\n",
        status_class, summary.status
    ));
    html.push_str("</tfoot></table>\n");

    if !summary.failing_subjects.is_empty() {
        let failing: Vec<String> = summary
            .failing_subjects
            .iter()
            .map(|s| html_escape(s))
            .collect();
        html.push_str(&format!(
            "<p class=\"failing\">Failed in: {}</p>\n",
            failing.join(", ")
        ));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(&report.to_json().unwrap_or_default()));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &ResultReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #eafbea; --fg: #0a4d00; --head: #2e8b57; --border: #b7dfb7; --pass: #dcfce7; --fail: #fde2e2; }
body { font-family: 'Segoe UI', -apple-system, BlinkMacSystemFont, sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { margin-top: 0; }
.meta { font-style: italic; }
table { border-collapse: collapse; width: 100%; max-width: 40rem; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
thead th { background: var(--head); color: #fff; }
td.mark { text-align: center; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.failing { font-weight: bold; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use result_portal_core::model::{MarkEntry, StudentIdentity};

    fn make_test_report(name: &str) -> ResultReport {
        let summary = result_portal_core::calculate(
            &StudentIdentity::new(name, "10A", "07"),
            &[
                MarkEntry::new("Java", "90"),
                MarkEntry::new("Python", "40"),
                MarkEntry::new("OOSE", "30"),
                MarkEntry::new("Cyber Security", "60"),
            ],
        )
        .unwrap();
        ResultReport::new(summary, None)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_test_report("Asha"));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Cyber Security"));
        assert!(html.contains("55.00%"));
        assert!(html.contains("Failed in: OOSE"));
    }

    #[test]
    fn html_escapes_user_text() {
        let html = generate_html(&make_test_report("<b>Asha</b>"));
        assert!(!html.contains("<b>Asha</b>"));
        assert!(html.contains("&lt;b&gt;Asha&lt;/b&gt;"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report("Asha");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
