//! The `result-portal validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(form_path: PathBuf) -> Result<()> {
    let forms = result_portal_core::parser::load_forms(&form_path)?;

    let mut total_warnings = 0;

    for loaded in &forms {
        let name = loaded.form.identity.name.trim();
        let name = if name.is_empty() { "unnamed" } else { name };
        println!("Form: {} ({name})", loaded.path.display());

        let warnings = result_portal_core::parser::validate_form(&loaded.form);
        for w in &warnings {
            let prefix = w
                .subject
                .as_ref()
                .map(|s| format!("  [{s}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All forms valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
