//! Terminal table rendering.

use comfy_table::{Cell, CellAlignment, Table};

use result_portal_core::model::ResultSummary;

/// Build the Subject | Marks table, ending with the total, percentage and result rows.
pub fn render_table(summary: &ResultSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Marks"]);

    for subject in &summary.subjects {
        table.add_row(vec![
            Cell::new(&subject.subject),
            Cell::new(subject.mark).set_alignment(CellAlignment::Center),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total Marks"),
        Cell::new(summary.total).set_alignment(CellAlignment::Center),
    ]);
    table.add_row(vec![
        Cell::new("Percentage"),
        Cell::new(format!("{}%", summary.percentage_display()))
            .set_alignment(CellAlignment::Center),
    ]);
    table.add_row(vec![
        Cell::new("Result"),
        Cell::new(summary.status).set_alignment(CellAlignment::Center),
    ]);

    table
}

/// Info line, the table, and the failing subjects if there are any.
pub fn render_text(summary: &ResultSummary) -> String {
    let mut out = String::new();
    out.push_str(&summary.identity.info_line());
    out.push('\n');
    out.push_str(&render_table(summary).to_string());
    out.push('\n');
    if !summary.failing_subjects.is_empty() {
        out.push_str(&format!(
            "Failed in: {}\n",
            summary.failing_subjects.join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use result_portal_core::model::{MarkEntry, StudentIdentity};

    fn summary(marks: &[(&str, &str)]) -> ResultSummary {
        let entries: Vec<MarkEntry> = marks.iter().map(|(s, m)| MarkEntry::new(*s, *m)).collect();
        result_portal_core::calculate(&StudentIdentity::new("Asha", "10A", "07"), &entries).unwrap()
    }

    #[test]
    fn table_lists_subjects_then_totals() {
        let out = render_text(&summary(&[
            ("Java", "90"),
            ("Python", "40"),
            ("OOSE", "30"),
            ("Cyber Security", "60"),
        ]));
        assert!(out.starts_with("Name: Asha    Class: 10A    Seat No: 07"));
        assert!(out.contains("Cyber Security"));
        assert!(out.contains("220"));
        assert!(out.contains("55.00%"));
        assert!(out.contains("Failed"));
        assert!(out.contains("Failed in: OOSE"));

        let java = out.find("Java").unwrap();
        let total = out.find("Total Marks").unwrap();
        let result = out.find("Result").unwrap();
        assert!(java < total && total < result);
    }

    #[test]
    fn table_has_one_row_per_subject_plus_totals() {
        let table = render_table(&summary(&[("Java", "80"), ("Python", "80")]));
        assert_eq!(table.row_iter().count(), 5);
    }

    #[test]
    fn passing_result_has_no_failed_line() {
        let out = render_text(&summary(&[("Java", "80"), ("Python", "80")]));
        assert!(out.contains("Passed"));
        assert!(!out.contains("Failed in"));
    }
}
