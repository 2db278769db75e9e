//! result-portal CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "result-portal",
    version,
    about = "Student result calculator: marks, totals, percentage and pass/fail"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate results from form files
    Calculate {
        /// Path to a .toml form file or a directory of forms
        #[arg(long)]
        form: PathBuf,

        /// Output format: text, json, markdown, html
        #[arg(long)]
        format: Option<String>,

        /// Directory to save rendered reports to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Fill in a form interactively and calculate the result
    Interactive {
        /// Output format: text, json, markdown, html
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check form files for problems without calculating
    Validate {
        /// Path to a form file or directory
        #[arg(long)]
        form: PathBuf,
    },

    /// Create a starter config and example form
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("result_portal=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calculate {
            form,
            format,
            output,
            config,
        } => commands::calculate::execute(form, format, output, config),
        Commands::Interactive { format, config } => commands::interactive::execute(format, config),
        Commands::Validate { form } => commands::validate::execute(form),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
