//! `problem.json` checks

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use super::types::{slash_joined, ProblemType};
use crate::diagnostics::{Diagnostics, Namespace};
use crate::document::{load_document, LoadedDocument};

const NAMESPACE: Namespace = Namespace::Problem;

const REQUIRED_KEYS: &[&str] = &["name", "title", "type", "time_limit", "memory_limit"];

/// Smallest accepted time limit, in seconds
pub const MIN_TIME_LIMIT: f64 = 0.5;

/// Load and check the problem descriptor.
///
/// `project_name` is the repository name the problem is expected to carry.
/// When it is `None` the name comparison is skipped.
pub fn verify_problem(
    path: &Path,
    project_name: Option<&str>,
    diag: &mut Diagnostics,
) -> Result<LoadedDocument> {
    let problem = load_document(path, REQUIRED_KEYS)?;
    problem.record_findings(diag, NAMESPACE);
    check_problem(&problem, project_name, diag);
    Ok(problem)
}

/// Field checks on an already loaded descriptor. Absent keys are skipped,
/// they were reported by the loader.
pub fn check_problem(problem: &LoadedDocument, project_name: Option<&str>, diag: &mut Diagnostics) {
    let root = &problem.root;

    if let Some(name) = root.get("name") {
        match name.as_str() {
            None => diag.error(NAMESPACE, "name is not a string"),
            Some(name) => {
                if project_name.is_some_and(|expected| expected != name) {
                    diag.warning(NAMESPACE, "problem name and git project name are not the same");
                }
            }
        }
    }

    if root.get("title").is_some_and(|title| !title.is_string()) {
        diag.error(NAMESPACE, "title is not a string");
    }

    if let Some(problem_type) = root.get("type") {
        if !is_problem_type(problem_type) {
            diag.error(
                NAMESPACE,
                format!("type should be one of {}", slash_joined(&ProblemType::ALL)),
            );
        }
    }

    if let Some(time_limit) = root.get("time_limit") {
        if !is_time_limit(time_limit) {
            diag.error(
                NAMESPACE,
                format!("time_limit should be a number greater or equal to {MIN_TIME_LIMIT}"),
            );
        }
    }

    if let Some(memory_limit) = root.get("memory_limit") {
        if !is_memory_limit(memory_limit) {
            diag.error(
                NAMESPACE,
                "memory_limit should be an integer that is a power of two",
            );
        }
    }
}

fn is_problem_type(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.parse::<ProblemType>().is_ok())
}

// Integer literals such as `2` are rejected; the limit must be written as `2.0`.
fn is_time_limit(value: &Value) -> bool {
    value.is_f64() && value.as_f64().is_some_and(|limit| limit >= MIN_TIME_LIMIT)
}

fn is_memory_limit(value: &Value) -> bool {
    match value.as_u64() {
        Some(memory) => memory >= 1 && memory & (memory - 1) == 0,
        None => false,
    }
}
