//! Package verification command

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{CliOverrides, FileConfig, Settings};
use crate::diagnostics::Diagnostics;
use crate::git::origin_project_name;
use crate::package::{verify_package, PackageLayout};
use crate::report;

/// Check the package at `root` and collect its findings without printing.
pub fn run(root: &Path, overrides: CliOverrides) -> Result<(Settings, Diagnostics)> {
    let settings = Settings::resolve(FileConfig::load(root)?, overrides);

    let project_name = match &settings.project_name {
        Some(name) => name.clone(),
        None => origin_project_name(root)
            .context("Could not determine the expected problem name (use --project-name)")?,
    };

    let mut diag = Diagnostics::new();
    verify_package(
        &PackageLayout::new(root),
        Some(project_name.as_str()),
        &settings.ignored_files,
        &mut diag,
    )?;

    Ok((settings, diag))
}

/// Whether a finished run counts as a pass under `settings`
pub fn passed(settings: &Settings, diag: &Diagnostics) -> bool {
    if settings.exit_zero {
        return true;
    }
    !diag.has_errors() && !(settings.strict && diag.has_warnings())
}

/// Execute the verify command, printing the report to stdout.
///
/// Returns whether the run passed.
pub fn execute(root: &Path, overrides: CliOverrides) -> Result<bool> {
    let (settings, diag) = run(root, overrides)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render(&diag, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(passed(&settings, &diag))
}
