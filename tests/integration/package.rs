//! End-to-end checks over complete packages

use std::fs;

use problint::diagnostics::{Namespace, Outcome, Severity};

use super::helpers::{error_messages, touch, valid_package, verify, warning_messages, write};

#[test]
fn test_valid_package_verifies_cleanly() {
    let package = valid_package();
    let diag = verify(package.path());

    assert!(diag.all().is_empty(), "unexpected findings: {:?}", diag.all());
    assert_eq!(diag.outcome(), Outcome::Verified);
}

#[test]
fn test_duplicate_keys_in_every_document() {
    let package = valid_package();
    let root = package.path();

    write(
        root,
        "problem.json",
        r#"{"name": "towers", "title": "Towers", "title": "Towers 2", "type": "batch",
            "time_limit": 1.0, "memory_limit": 256}"#,
    );
    write(
        root,
        "subtasks.json",
        r#"{
            "samples": {"index": 0, "score": 0, "validators": ["validator.cpp"]},
            "small": {"index": 1, "score": 30, "validators": ["validator.cpp", "small.cpp"]},
            "full": {"index": 2, "score": 70, "score": 70, "validators": ["validator.cpp"]}
        }"#,
    );
    write(
        root,
        "solutions.json",
        r#"{
            "model.cpp": {"verdict": "model_solution"},
            "brute.cpp": {"verdict": "time_limit", "except": {"small": "correct", "small": "failed"}},
            "wa.cpp": {"verdict": "incorrect"},
            "wa.cpp": {"verdict": "incorrect"}
        }"#,
    );

    let diag = verify(root);
    let duplicates: Vec<_> = diag
        .errors()
        .filter(|f| f.message.starts_with("duplicate key"))
        .map(|f| (f.namespace, f.message.as_str()))
        .collect();
    assert_eq!(
        duplicates,
        [
            (Namespace::Problem, "duplicate key: title"),
            (Namespace::Subtasks, "duplicate key: score"),
            (Namespace::Solutions, "duplicate key: small"),
            (Namespace::Solutions, "duplicate key: wa.cpp"),
        ]
    );
    assert_eq!(diag.errors().count(), 4);
}

#[test]
fn test_missing_required_keys_do_not_stop_the_run() {
    let package = valid_package();
    let root = package.path();
    write(root, "problem.json", r#"{"name": "towers", "type": "batch"}"#);
    write(
        root,
        "subtasks.json",
        r#"{"full": {"index": 0, "score": 100, "validators": ["validator.cpp", "small.cpp"]}}"#,
    );

    let diag = verify(root);
    assert_eq!(
        error_messages(&diag),
        [
            "title is required in problem.json",
            "time_limit is required in problem.json",
            "memory_limit is required in problem.json",
            "samples is required in subtasks.json",
            "subtask \"samples\" is not defined and cannot be used in except",
            "subtask \"small\" is not defined and cannot be used in except",
        ]
    );
}

#[test]
fn test_score_sum_reported_once() {
    let package = valid_package();
    let root = package.path();
    let subtasks = super::helpers::SUBTASKS_JSON.replace("\"score\": 70", "\"score\": 71");
    write(root, "subtasks.json", &subtasks);

    let diag = verify(root);
    assert_eq!(error_messages(&diag), ["sum of scores is 101"]);
    assert!(diag.errors().all(|f| f.namespace == Namespace::Subtasks));
}

#[test]
fn test_non_contiguous_indexes() {
    let package = valid_package();
    let root = package.path();
    let subtasks = super::helpers::SUBTASKS_JSON.replace("\"index\": 2", "\"index\": 3");
    write(root, "subtasks.json", &subtasks);

    let diag = verify(root);
    assert_eq!(error_messages(&diag), ["missing index 2 in subtask indexes"]);
}

#[test]
fn test_unused_validator_is_a_warning() {
    let package = valid_package();
    let root = package.path();
    touch(&root.join("validator").join("legacy.py"));

    let diag = verify(root);
    assert!(!diag.has_errors());
    assert_eq!(warning_messages(&diag), ["unused validator legacy.py"]);
    assert_eq!(diag.outcome(), Outcome::VerifiedWithWarnings);

    let subtasks = super::helpers::SUBTASKS_JSON.replace(
        "[\"validator.cpp\", \"small.cpp\"]",
        "[\"validator.cpp\", \"small.cpp\", \"legacy.py\"]",
    );
    write(root, "subtasks.json", &subtasks);
    let diag = verify(root);
    assert!(diag.all().is_empty(), "unexpected findings: {:?}", diag.all());
}

#[test]
fn test_solution_files_must_match_declarations() {
    let package = valid_package();
    let root = package.path();
    fs::remove_file(root.join("solution").join("wa.cpp")).unwrap();
    touch(&root.join("solution").join("greedy.cpp"));
    write(
        root,
        "solutions.json",
        r#"{
            "model.cpp": {"verdict": "model_solution"},
            "brute.cpp": {"verdict": "time_limit"},
            "wa.cpp": {"verdict": "not a verdict"}
        }"#,
    );

    let diag = verify(root);
    assert_eq!(
        error_messages(&diag),
        ["wa.cpp does not exists", "greedy.cpp is not represented"]
    );
}

#[test]
fn test_except_errors() {
    let package = valid_package();
    let root = package.path();
    write(
        root,
        "solutions.json",
        r#"{
            "model.cpp": {"verdict": "model_solution"},
            "brute.cpp": {"verdict": "time_limit", "except": {"medium": "correct", "small": "fast"}},
            "wa.cpp": {"verdict": "incorrect"}
        }"#,
    );

    let diag = verify(root);
    let errors = error_messages(&diag);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0],
        "subtask \"medium\" is not defined and cannot be used in except"
    );
    assert!(errors[1].starts_with("brute.cpp.except.small verdict should be one of"));
}

#[test]
fn test_memory_limits() {
    for (memory, ok) in [
        ("64", true),
        ("128", true),
        ("256", true),
        ("100", false),
        ("0", false),
        ("-16", false),
    ] {
        let package = valid_package();
        let root = package.path();
        let problem = super::helpers::PROBLEM_JSON.replace("256", memory);
        write(root, "problem.json", &problem);

        let diag = verify(root);
        assert_eq!(!diag.has_errors(), ok, "memory_limit {memory}");
        if !ok {
            assert_eq!(
                error_messages(&diag),
                ["memory_limit should be an integer that is a power of two"]
            );
        }
    }
}

#[test]
fn test_name_mismatch_only_warns() {
    let package = valid_package();
    let root = package.path();
    let problem = super::helpers::PROBLEM_JSON.replace("\"towers\"", "\"bridges\"");
    write(root, "problem.json", &problem);

    let diag = verify(root);
    assert_eq!(diag.outcome(), Outcome::VerifiedWithWarnings);
    let warning = diag.warnings().next().unwrap();
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.namespace, Namespace::Problem);
}

#[test]
fn test_malformed_json_is_a_hard_failure() {
    let package = valid_package();
    let root = package.path();
    write(root, "subtasks.json", "{\"samples\": ");

    let overrides = problint::config::CliOverrides {
        project_name: Some("towers".to_string()),
        ..Default::default()
    };
    let err = problint::commands::verify::run(root, overrides).unwrap_err();
    assert!(format!("{err:#}").contains("subtasks.json"));
}

#[test]
fn test_missing_solution_directory_is_a_hard_failure() {
    let package = valid_package();
    let root = package.path();
    fs::remove_dir_all(root.join("solution")).unwrap();

    let overrides = problint::config::CliOverrides {
        project_name: Some("towers".to_string()),
        ..Default::default()
    };
    assert!(problint::commands::verify::run(root, overrides).is_err());
}
