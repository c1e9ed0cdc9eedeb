//! Integration tests for problem package verification
//!
//! These tests build complete packages in temporary directories and run the
//! verify pipeline end to end, from documents on disk to the rendered report.

pub mod git_origin;
pub mod package;
