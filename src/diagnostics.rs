//! Findings collected while verifying a problem package
//!
//! Every check appends to a single [`Diagnostics`] value that is threaded
//! through the passes. Nothing is ever removed, so the order of findings is
//! the order in which checks ran.

use std::fmt;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// The document a finding originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Problem,
    Subtasks,
    Solutions,
}

impl Namespace {
    /// File name of the document this namespace stands for
    pub fn file_name(&self) -> &'static str {
        match self {
            Namespace::Problem => "problem.json",
            Namespace::Subtasks => "subtasks.json",
            Namespace::Solutions => "solutions.json",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A single error or warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub namespace: Namespace,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.namespace, self.message)
    }
}

/// Final verdict of a run, derived from the collected findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Verified,
    VerifiedWithWarnings,
    Failed,
}

/// Ordered collector of findings for one run
#[derive(Debug, Default)]
pub struct Diagnostics {
    findings: Vec<Finding>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, severity: Severity, namespace: Namespace, message: impl Into<String>) {
        let finding = Finding {
            severity,
            namespace,
            message: message.into(),
        };
        tracing::debug!(%finding, "recorded finding");
        self.findings.push(finding);
    }

    pub fn error(&mut self, namespace: Namespace, message: impl Into<String>) {
        self.record(Severity::Error, namespace, message);
    }

    pub fn warning(&mut self, namespace: Namespace, message: impl Into<String>) {
        self.record(Severity::Warning, namespace, message);
    }

    /// All findings in recording order
    pub fn all(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn outcome(&self) -> Outcome {
        if self.has_errors() {
            Outcome::Failed
        } else if self.has_warnings() {
            Outcome::VerifiedWithWarnings
        } else {
            Outcome::Verified
        }
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}
