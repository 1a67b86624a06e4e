mod common;
use common::{run_menu, setup_data_dir};
use predicates::prelude::*;

#[test]
fn test_exit_terminates_loop() {
    let dir = setup_data_dir("exit_terminates_loop");

    run_menu(&dir, "6\n")
        .success()
        .stdout(predicate::str::contains("Study Tracker Menu"))
        .stdout(predicate::str::contains("Goodbye! Keep learning!"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let dir = setup_data_dir("invalid_choice_reprompts");

    let assert = run_menu(&dir, "9\n6\n")
        .success()
        .stderr(predicate::str::contains("Invalid choice. Try again."));

    // the menu must have been shown again after the invalid choice
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.matches("Study Tracker Menu").count() >= 2);
}

#[test]
fn test_eof_terminates_loop() {
    let dir = setup_data_dir("eof_terminates_loop");

    // no input at all: the loop must stop instead of spinning
    run_menu(&dir, "").success();
}
