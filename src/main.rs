use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use problint::commands::verify;
use problint::config::CliOverrides;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "problint")]
#[command(about = "Check the metadata of a problem package", long_about = None)]
#[command(version)]
struct Cli {
    /// Package root containing problem.json, subtasks.json and solutions.json
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Expected problem name (defaults to the name of the git origin remote)
    #[arg(long)]
    project_name: Option<String>,

    /// Fail when there are warnings
    #[arg(long, conflicts_with = "exit_zero")]
    strict: bool,

    /// Always exit with status 0, even when errors are found
    #[arg(long)]
    exit_zero: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes priority over --log-level
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let overrides = CliOverrides {
        project_name: cli.project_name,
        strict: cli.strict,
        exit_zero: cli.exit_zero,
    };

    match verify::execute(&cli.path, overrides) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
