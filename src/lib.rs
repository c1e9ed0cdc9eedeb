pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod git;
pub mod package;
pub mod report;
