//! `subtasks.json` checks
//!
//! Besides per-entry field checks this pass owns three aggregate rules:
//! every validator program must be used, non-sample scores must add up to
//! 100, and indexes must cover `0..n` where `n` is the number of subtasks.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use crate::diagnostics::{Diagnostics, Namespace};
use crate::document::{list_files, load_document, missing_keys, LoadedDocument};

const NAMESPACE: Namespace = Namespace::Subtasks;

/// Reserved subtask holding the statement samples; it is worth no points
pub const SAMPLES: &str = "samples";

/// Required sum of all scores except the samples subtask
pub const TOTAL_SCORE: u64 = 100;

const ENTRY_KEYS: &[&str] = &["index", "score", "validators"];

/// Names declared in `subtasks.json`, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtaskNames(Vec<String>);

impl SubtaskNames {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for SubtaskNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Load `subtasks.json`, list the validator programs and check both.
pub fn verify_subtasks(
    path: &Path,
    validator_dir: &Path,
    ignored_files: &[String],
    diag: &mut Diagnostics,
) -> Result<SubtaskNames> {
    let subtasks = load_document(path, &[SAMPLES])?;
    subtasks.record_findings(diag, NAMESPACE);

    let validators = list_files(validator_dir, ignored_files)?;
    tracing::debug!(count = validators.len(), "listed validator programs");

    Ok(check_subtasks(&subtasks, &validators, diag))
}

/// Check every subtask entry against the set of validator programs on disk.
pub fn check_subtasks(
    subtasks: &LoadedDocument,
    validators: &BTreeSet<String>,
    diag: &mut Diagnostics,
) -> SubtaskNames {
    let mut indexes = BTreeSet::new();
    let mut score_sum: u64 = 0;
    let mut used_validators = BTreeSet::new();

    for (name, data) in &subtasks.root {
        let Some(entry) = data.as_object() else {
            diag.error(NAMESPACE, format!("invalid data in {name}"));
            continue;
        };

        for key in missing_keys(entry, ENTRY_KEYS) {
            diag.error(NAMESPACE, format!("{key} is required in {name}"));
        }

        if let Some(index) = entry.get("index") {
            match index.as_u64() {
                Some(index) => {
                    if !indexes.insert(index) {
                        diag.error(
                            NAMESPACE,
                            format!("duplicate index {index} in subtask {name}"),
                        );
                    }
                }
                None => diag.error(
                    NAMESPACE,
                    format!("index should be a non-negative integer in subtask {name}"),
                ),
            }
        }

        if let Some(score) = entry.get("score") {
            match score.as_u64() {
                None => diag.error(
                    NAMESPACE,
                    format!("score should be a non-negative integer in subtask {name}"),
                ),
                Some(score) if name == SAMPLES => {
                    if score != 0 {
                        diag.error(NAMESPACE, "samples subtask score is non-zero");
                    }
                }
                Some(score) => score_sum = score_sum.saturating_add(score),
            }
        }

        match entry.get("validators").map(|list| list.as_array()) {
            None => {}
            Some(None) => diag.error(
                NAMESPACE,
                format!("validators is not an array in subtask {name}"),
            ),
            Some(Some(list)) => {
                for (position, validator) in list.iter().enumerate() {
                    match validator.as_str() {
                        None => diag.error(
                            NAMESPACE,
                            format!("validator #{position} is not a string in subtask {name}"),
                        ),
                        Some(validator) if validators.contains(validator) => {
                            used_validators.insert(validator);
                        }
                        Some(validator) => {
                            diag.error(NAMESPACE, format!("{validator} does not exists"));
                        }
                    }
                }
            }
        }
    }

    for unused in validators
        .iter()
        .filter(|v| !used_validators.contains(v.as_str()))
    {
        diag.warning(NAMESPACE, format!("unused validator {unused}"));
    }

    if score_sum != TOTAL_SCORE {
        diag.error(NAMESPACE, format!("sum of scores is {score_sum}"));
    }

    for index in 0..subtasks.root.len() as u64 {
        if !indexes.contains(&index) {
            diag.error(
                NAMESPACE,
                format!("missing index {index} in subtask indexes"),
            );
        }
    }

    subtasks.root.keys().cloned().collect()
}
