//! Expected problem name resolved from the git origin remote

use problint::config::CliOverrides;
use problint::diagnostics::Outcome;

use super::helpers::{init_repo_with_origin, valid_package, warning_messages};

#[test]
fn test_matching_origin_name() {
    let package = valid_package();
    let root = package.path();
    init_repo_with_origin(root, "git@github.com:contest/towers.git");

    let (_, diag) = problint::commands::verify::run(root, CliOverrides::default()).unwrap();
    assert_eq!(diag.outcome(), Outcome::Verified);
}

#[test]
fn test_different_origin_name_warns() {
    let package = valid_package();
    let root = package.path();
    init_repo_with_origin(root, "https://github.com/contest/bridges.git");

    let (_, diag) = problint::commands::verify::run(root, CliOverrides::default()).unwrap();
    assert_eq!(
        warning_messages(&diag),
        ["problem name and git project name are not the same"]
    );
}

#[test]
fn test_missing_origin_is_a_hard_failure() {
    let package = valid_package();
    let root = package.path();

    let err = problint::commands::verify::run(root, CliOverrides::default()).unwrap_err();
    assert!(format!("{err:#}").contains("--project-name"));
}
