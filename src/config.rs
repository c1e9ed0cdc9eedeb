//! Run configuration
//!
//! Settings come from an optional `problint.toml` in the package root,
//! overridden by command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::package::TESTLIB;

/// File name of the optional per-package configuration
pub const CONFIG_FILE: &str = "problint.toml";

/// Contents of `problint.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Expected problem name; skips the git remote lookup when set
    #[serde(default)]
    pub project_name: Option<String>,
    /// Directory entries that never need a declaration, on top of `testlib.h`
    #[serde(default)]
    pub ignored_files: Option<Vec<String>>,
    /// Treat warnings as failures
    #[serde(default)]
    pub strict: Option<bool>,
}

impl FileConfig {
    /// Load `problint.toml` from `root`, or defaults when there is none
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Flags given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub project_name: Option<String>,
    pub strict: bool,
    pub exit_zero: bool,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_name: Option<String>,
    pub ignored_files: Vec<String>,
    pub strict: bool,
    pub exit_zero: bool,
}

impl Settings {
    pub fn resolve(file: FileConfig, cli: CliOverrides) -> Self {
        Self {
            project_name: cli.project_name.or(file.project_name),
            ignored_files: ignored_files(file.ignored_files.unwrap_or_default()),
            strict: cli.strict || file.strict.unwrap_or(false),
            exit_zero: cli.exit_zero,
        }
    }
}

// `testlib.h` is always ignored; configured names are added after it.
fn ignored_files(configured: Vec<String>) -> Vec<String> {
    let mut ignored = vec![TESTLIB.to_string()];
    for name in configured {
        if !ignored.contains(&name) {
            ignored.push(name);
        }
    }
    ignored
}
