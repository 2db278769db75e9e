//! Markdown rendering.

use result_portal_core::model::ResultSummary;

/// Escape the characters that would break a Markdown table cell.
fn md_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Format a result summary as a Markdown section.
pub fn render_markdown(summary: &ResultSummary) -> String {
    let mut md = String::new();
    let identity = &summary.identity;

    md.push_str("## Result Summary\n\n");
    md.push_str(&format!(
        "**Name:** {} | **Class:** {} | **Seat No:** {}\n\n",
        md_escape(&identity.name),
        md_escape(&identity.class),
        md_escape(&identity.seat)
    ));

    md.push_str("| Subject | Marks |\n");
    md.push_str("|---------|------:|\n");
    for s in &summary.subjects {
        md.push_str(&format!("| {} | {} |\n", md_escape(&s.subject), s.mark));
    }
    md.push_str(&format!("| **Total Marks** | {} |\n", summary.total));
    md.push_str(&format!(
        "| **Percentage** | {}% |\n",
        summary.percentage_display()
    ));
    md.push_str(&format!("| **Result** | {} |\n", summary.status));

    if !summary.failing_subjects.is_empty() {
        let failing: Vec<String> = summary
            .failing_subjects
            .iter()
            .map(|s| md_escape(s))
            .collect();
        md.push_str(&format!("\n**Failed in:** {}\n", failing.join(", ")));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use result_portal_core::model::{MarkEntry, StudentIdentity};

    #[test]
    fn markdown_table_rows() {
        let summary = result_portal_core::calculate(
            &StudentIdentity::new("Asha", "10A", "07"),
            &[MarkEntry::new("Java", "90"), MarkEntry::new("A|B", "20")],
        )
        .unwrap();
        let md = render_markdown(&summary);
        assert!(md.contains("| Java | 90 |"));
        assert!(md.contains("| A\\|B | 20 |"));
        assert!(md.contains("| **Percentage** | 55.00% |"));
        assert!(md.contains("| **Result** | Failed |"));
        assert!(md.contains("**Failed in:** A\\|B"));
    }
}
