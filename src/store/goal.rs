//! Plain-text persistence for the daily goal.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Daily goal in minutes used when no goal file exists.
pub const DEFAULT_GOAL: u32 = 90;

/// Read the persisted goal. A missing file means the default; an unreadable
/// or unparsable file falls back to the default with a warning.
pub fn load(path: &Path) -> u32 {
    if !path.exists() {
        return DEFAULT_GOAL;
    }

    match fs::read_to_string(path) {
        Ok(content) => match content.trim().parse::<u32>() {
            Ok(goal) if goal > 0 => goal,
            _ => {
                warning("Failed to read goal file, using default.");
                DEFAULT_GOAL
            }
        },
        Err(_) => {
            warning("Failed to read goal file, using default.");
            DEFAULT_GOAL
        }
    }
}

/// Overwrite the persisted goal.
pub fn save(path: &Path, goal: u32) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, goal.to_string())?;
    Ok(())
}
