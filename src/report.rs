//! Terminal rendering of findings

use std::io::{self, Write};

use colored::Colorize;

use crate::diagnostics::{Diagnostics, Finding, Outcome, Severity};

/// Write the report: errors, then the summary when nothing failed, then warnings.
///
/// A failed run has no summary line; its error lines are the report.
pub fn render<W: Write>(diag: &Diagnostics, out: &mut W) -> io::Result<()> {
    for finding in diag.errors() {
        writeln!(out, "{}", colorize(finding))?;
    }

    match diag.outcome() {
        Outcome::Verified => writeln!(out, "{}", "verified.".green())?,
        Outcome::VerifiedWithWarnings => {
            writeln!(out, "{} but there are some warnings", "verified".yellow())?
        }
        Outcome::Failed => {}
    }

    for finding in diag.warnings() {
        writeln!(out, "{}", colorize(finding))?;
    }
    Ok(())
}

fn colorize(finding: &Finding) -> colored::ColoredString {
    let line = finding.to_string();
    match finding.severity {
        Severity::Error => line.red(),
        Severity::Warning => line.yellow(),
    }
}
