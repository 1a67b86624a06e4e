mod common;
use common::{goal_file, run_menu, setup_data_dir};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_set_goal_persists() {
    let dir = setup_data_dir("set_goal_persists");

    run_menu(&dir, "4\n120\n6\n")
        .success()
        .stdout(predicate::str::contains("Daily goal updated to 120 minutes."));

    let content = fs::read_to_string(goal_file(&dir)).expect("read goal file");
    assert_eq!(content.trim(), "120");
}

#[test]
fn test_persisted_goal_used_on_next_run() {
    let dir = setup_data_dir("persisted_goal_used_on_next_run");

    run_menu(&dir, "4\n60\n6\n").success();

    // 60 minutes now meets the goal
    run_menu(&dir, "1\n60\n6\n")
        .success()
        .stdout(predicate::str::contains(
            "Great job! You reached your 60-minute goal!",
        ));
}

#[test]
fn test_set_goal_rejects_non_numeric() {
    let dir = setup_data_dir("set_goal_rejects_non_numeric");

    run_menu(&dir, "4\nxyz\n6\n")
        .success()
        .stderr(predicate::str::contains(
            "Invalid input. Please enter a positive number.",
        ));

    assert!(!goal_file(&dir).exists());
}

#[test]
fn test_set_goal_rejects_non_positive() {
    let dir = setup_data_dir("set_goal_rejects_non_positive");

    run_menu(&dir, "4\n0\n6\n")
        .success()
        .stderr(predicate::str::contains("Invalid input"));
    run_menu(&dir, "4\n-5\n6\n")
        .success()
        .stderr(predicate::str::contains("Invalid input"));

    assert!(!goal_file(&dir).exists());
}

#[test]
fn test_invalid_goal_leaves_prior_value() {
    let dir = setup_data_dir("invalid_goal_leaves_prior_value");

    run_menu(&dir, "4\n45\n6\n").success();
    run_menu(&dir, "4\nnope\n6\n").success();

    let content = fs::read_to_string(goal_file(&dir)).expect("read goal file");
    assert_eq!(content.trim(), "45");
}

#[test]
fn test_missing_goal_file_defaults_to_90() {
    let dir = setup_data_dir("missing_goal_file_defaults_to_90");

    run_menu(&dir, "1\n30\n2\n6\n")
        .success()
        .stdout(predicate::str::contains("(90 min)"));
}

#[test]
fn test_corrupt_goal_file_warns_and_defaults() {
    let dir = setup_data_dir("corrupt_goal_file_warns_and_defaults");
    fs::write(goal_file(&dir), "not-a-number").expect("write goal file");

    run_menu(&dir, "1\n30\n2\n6\n")
        .success()
        .stdout(predicate::str::contains(
            "Failed to read goal file, using default.",
        ))
        .stdout(predicate::str::contains("(90 min)"));
}
