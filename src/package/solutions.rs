//! `solutions.json` checks

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use super::subtasks::SubtaskNames;
use super::types::{slash_joined, Verdict};
use crate::diagnostics::{Diagnostics, Namespace};
use crate::document::{list_files, load_document, missing_keys, LoadedDocument};

const NAMESPACE: Namespace = Namespace::Solutions;

const ENTRY_KEYS: &[&str] = &["verdict"];

/// Load `solutions.json`, list the solution programs and check both.
pub fn verify_solutions(
    path: &Path,
    solution_dir: &Path,
    ignored_files: &[String],
    subtasks: &SubtaskNames,
    diag: &mut Diagnostics,
) -> Result<()> {
    let solutions = load_document(path, &[])?;
    solutions.record_findings(diag, NAMESPACE);

    let solution_files = list_files(solution_dir, ignored_files)?;
    tracing::debug!(count = solution_files.len(), "listed solution programs");

    check_solutions(&solutions, solution_files, subtasks, diag);
    Ok(())
}

/// Check declared solutions against the files on disk.
///
/// Declarations and files must match one to one. An entry naming a file that
/// does not exist gets no further checks.
pub fn check_solutions(
    solutions: &LoadedDocument,
    mut remaining_files: BTreeSet<String>,
    subtasks: &SubtaskNames,
    diag: &mut Diagnostics,
) {
    for (solution, data) in &solutions.root {
        if !remaining_files.remove(solution) {
            diag.error(NAMESPACE, format!("{solution} does not exists"));
            continue;
        }

        let Some(entry) = data.as_object() else {
            diag.error(NAMESPACE, format!("invalid data in {solution}"));
            continue;
        };

        for key in missing_keys(entry, ENTRY_KEYS) {
            diag.error(NAMESPACE, format!("{key} is required in {solution}"));
        }
        if let Some(verdict) = entry.get("verdict") {
            check_verdict(verdict, solution, diag);
        }

        let Some(exceptions) = entry.get("except") else {
            continue;
        };
        let Some(exceptions) = exceptions.as_object() else {
            diag.error(NAMESPACE, format!("invalid except format in {solution}"));
            continue;
        };
        for (subtask, verdict) in exceptions {
            if subtasks.contains(subtask) {
                check_verdict(verdict, &format!("{solution}.except.{subtask}"), diag);
            } else {
                diag.error(
                    NAMESPACE,
                    format!("subtask \"{subtask}\" is not defined and cannot be used in except"),
                );
            }
        }
    }

    for solution in remaining_files {
        diag.error(NAMESPACE, format!("{solution} is not represented"));
    }
}

/// Shared verdict check for top-level verdicts and per-subtask overrides.
///
/// `key_name` locates the verdict in messages.
pub fn check_verdict(verdict: &Value, key_name: &str, diag: &mut Diagnostics) -> Option<Verdict> {
    let parsed = verdict.as_str().and_then(|v| v.parse::<Verdict>().ok());
    if parsed.is_none() {
        diag.error(
            NAMESPACE,
            format!(
                "{key_name} verdict should be one of {}",
                slash_joined(&Verdict::ALL)
            ),
        );
    }
    parsed
}
