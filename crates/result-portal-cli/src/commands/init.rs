//! The `result-portal init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("result-portal.toml").exists() {
        println!("result-portal.toml already exists, skipping.");
    } else {
        std::fs::write("result-portal.toml", SAMPLE_CONFIG)?;
        println!("Created result-portal.toml");
    }

    std::fs::create_dir_all("forms")?;
    let example_path = std::path::Path::new("forms/example.toml");
    if example_path.exists() {
        println!("forms/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_FORM)?;
        println!("Created forms/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Fill in forms/example.toml with the student's marks");
    println!("  2. Run: result-portal validate --form forms/example.toml");
    println!("  3. Run: result-portal calculate --form forms/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# result-portal configuration

# text, json, markdown or html
default_format = "text"

# Uncomment to save every calculated report
# output_dir = "./results"
"#;

const EXAMPLE_FORM: &str = r#"[student]
name = "Asha"
class = "10A"
seat = "07"

# Main subjects. Marks below 35 fail the subject.
[marks]
Java = 90
Python = 40
OOSE = 30
"Cyber Security" = 60

# Add as many extra subjects as needed. A blank subject is
# reported as "Extra Subject".
[[extra]]
subject = "Data Structures"
mark = 72
"#;
