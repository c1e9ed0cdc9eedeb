//! Git lookups used to name the package
//!
//! A problem lives in a repository named after it, so the expected problem
//! name is the last path segment of the `origin` remote without its extension.

pub mod runner;

use std::path::Path;

use anyhow::{Context, Result};

pub use runner::{run_git, run_git_checked};

/// Name of the project the `origin` remote of `repo_root` points to.
pub fn origin_project_name(repo_root: &Path) -> Result<String> {
    let url = run_git_checked(&["remote", "get-url", "origin"], repo_root)
        .context("Failed to resolve the origin remote URL")?;
    Ok(project_name_from_url(&url).to_string())
}

/// Project name from a remote URL: the last path segment, cut at its first `.`.
///
/// ```
/// use problint::git::project_name_from_url;
///
/// assert_eq!(project_name_from_url("https://github.com/org/towers.git"), "towers");
/// assert_eq!(project_name_from_url("git@github.com:org/towers.git"), "towers");
/// ```
pub fn project_name_from_url(url: &str) -> &str {
    let url = url.trim().trim_end_matches('/');
    let segment = url.rsplit(['/', ':']).next().unwrap_or(url);
    segment.split('.').next().unwrap_or(segment)
}
