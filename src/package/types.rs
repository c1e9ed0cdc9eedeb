//! Fixed vocabularies used by package documents

use std::fmt;
use std::str::FromStr;

/// How contestants interact with the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
    Batch,
    Interactive,
    Communication,
    OutputOnly,
    TwoPhase,
}

impl ProblemType {
    pub const ALL: [ProblemType; 5] = [
        ProblemType::Batch,
        ProblemType::Interactive,
        ProblemType::Communication,
        ProblemType::OutputOnly,
        ProblemType::TwoPhase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::Batch => "batch",
            ProblemType::Interactive => "interactive",
            ProblemType::Communication => "communication",
            ProblemType::OutputOnly => "output-only",
            ProblemType::TwoPhase => "two-phase",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown problem type: {s}"))
    }
}

/// Expected judging outcome of a reference solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ModelSolution,
    Correct,
    TimeLimit,
    MemoryLimit,
    Incorrect,
    RuntimeError,
    Failed,
    TimeLimitAndRuntimeError,
}

impl Verdict {
    pub const ALL: [Verdict; 8] = [
        Verdict::ModelSolution,
        Verdict::Correct,
        Verdict::TimeLimit,
        Verdict::MemoryLimit,
        Verdict::Incorrect,
        Verdict::RuntimeError,
        Verdict::Failed,
        Verdict::TimeLimitAndRuntimeError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::ModelSolution => "model_solution",
            Verdict::Correct => "correct",
            Verdict::TimeLimit => "time_limit",
            Verdict::MemoryLimit => "memory_limit",
            Verdict::Incorrect => "incorrect",
            Verdict::RuntimeError => "runtime_error",
            Verdict::Failed => "failed",
            Verdict::TimeLimitAndRuntimeError => "time_limit_and_runtime_error",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown verdict: {s}"))
    }
}

/// `a/b/c` listing used in "should be one of" messages
pub(crate) fn slash_joined<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
