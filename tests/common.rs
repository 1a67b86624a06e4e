#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("studylog")
}

/// Create a unique, empty test data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_studylog"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test data dir");
    path.to_string_lossy().to_string()
}

/// Run the menu with a scripted stdin against the given data dir
pub fn run_menu(dir: &str, script: &str) -> assert_cmd::assert::Assert {
    slog()
        .args(["--dir", dir, "--no-sound"])
        .write_stdin(script.to_string())
        .assert()
}

pub fn entries_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("study_log.csv")
}

pub fn goal_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("goal.txt")
}

pub fn export_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("study_log_export.xlsx")
}

/// Today's date the way the study log stores it
pub fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}
