use devnest::cli::{run, Args};
use devnest::error::Error;
use devnest::process::PackageManager;
use std::fs;
use test_log::test;
mod utils;
use utils::list_tree;

fn args_in(dir: &std::path::Path, answers: &str) -> Args {
    Args {
        verbose: 2,
        package_manager: PackageManager::Npm,
        answers: Some(answers.to_string()),
        directory: Some(dir.to_path_buf()),
    }
}

#[test]
fn answers_drive_a_non_interactive_run() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let answers = r#"{
        "text": ["x", "panel", "notes"],
        "select": ["admin", "other"],
        "confirm": [true, false, true, false]
    }"#;

    run(args_in(tmp_dir.path(), answers)).unwrap();

    assert_eq!(list_tree(tmp_dir.path()), vec!["x", "x/notes", "x/panel"]);
}

#[test]
fn unrecognized_role_in_answers_is_not_fatal() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let answers = r#"{"text": ["x", "db"], "select": ["database"], "confirm": [false, true]}"#;

    run(args_in(tmp_dir.path(), answers)).unwrap();

    assert_eq!(list_tree(tmp_dir.path()), vec!["x", "x/db"]);
}

#[test]
fn existing_project_fails_with_exit_code_one() {
    let tmp_dir = tempfile::tempdir().unwrap();
    fs::write(tmp_dir.path().join("x"), "").unwrap();
    let answers = r#"{"text": ["x", "panel"], "select": ["admin"]}"#;

    let err = run(args_in(tmp_dir.path(), answers)).unwrap_err();

    assert!(matches!(err, Error::ProjectExistsError { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(list_tree(tmp_dir.path()), vec!["x"]);
}

#[test]
fn malformed_answers_are_rejected_before_prompting() {
    let tmp_dir = tempfile::tempdir().unwrap();

    let err = run(args_in(tmp_dir.path(), "{not json")).unwrap_err();

    assert!(matches!(err, Error::AnswersParseError(_)));
    assert!(list_tree(tmp_dir.path()).is_empty());
}

#[test]
fn missing_project_name_is_a_validation_error() {
    let tmp_dir = tempfile::tempdir().unwrap();

    let err = run(args_in(tmp_dir.path(), r#"{"text": ["  "]}"#)).unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
    assert!(list_tree(tmp_dir.path()).is_empty());
}
