//! Problem package documents and the passes that check them
//!
//! A package root contains:
//! - `problem.json`: the problem descriptor
//! - `subtasks.json` and `validator/`: scored subtasks and their input validators
//! - `solutions.json` and `solution/`: reference solutions with expected verdicts
//!
//! The passes run in that order. Only the subtask pass feeds the next one,
//! with the set of declared subtask names.

pub mod problem;
pub mod solutions;
pub mod subtasks;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::diagnostics::Diagnostics;

pub use problem::verify_problem;
pub use solutions::{check_verdict, verify_solutions};
pub use subtasks::{verify_subtasks, SubtaskNames};
pub use types::{ProblemType, Verdict};

/// Helper file shipped next to validators and solutions; never declared
pub const TESTLIB: &str = "testlib.h";

/// Locations of the package documents relative to a root directory
#[derive(Debug, Clone)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn problem_file(&self) -> PathBuf {
        self.root.join("problem.json")
    }

    pub fn subtasks_file(&self) -> PathBuf {
        self.root.join("subtasks.json")
    }

    pub fn solutions_file(&self) -> PathBuf {
        self.root.join("solutions.json")
    }

    pub fn validator_dir(&self) -> PathBuf {
        self.root.join("validator")
    }

    pub fn solution_dir(&self) -> PathBuf {
        self.root.join("solution")
    }
}

/// Run the three passes over `layout`, appending every finding to `diag`.
///
/// Findings never stop the run. An `Err` means a document or directory could
/// not be read at all.
pub fn verify_package(
    layout: &PackageLayout,
    project_name: Option<&str>,
    ignored_files: &[String],
    diag: &mut Diagnostics,
) -> Result<()> {
    tracing::info!(root = %layout.root().display(), "verifying problem package");

    verify_problem(&layout.problem_file(), project_name, diag)?;

    let subtask_names = verify_subtasks(
        &layout.subtasks_file(),
        &layout.validator_dir(),
        ignored_files,
        diag,
    )?;

    verify_solutions(
        &layout.solutions_file(),
        &layout.solution_dir(),
        ignored_files,
        &subtask_names,
        diag,
    )?;

    tracing::info!(
        findings = diag.all().len(),
        outcome = ?diag.outcome(),
        "package verification finished"
    );
    Ok(())
}
