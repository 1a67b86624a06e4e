//! Aggregate statistics over the study log.

use crate::models::{Entry, Summary};

/// Compute the summary for the given entries against the current goal.
/// Returns None when there are no entries.
pub fn summarize(entries: &[Entry], goal: u32) -> Option<Summary> {
    if entries.is_empty() {
        return None;
    }

    let total_days = entries.len();
    let total_minutes: u64 = entries.iter().map(|e| e.minutes as u64).sum();
    let met_goal_days = entries.iter().filter(|e| e.minutes >= goal).count();
    let average_minutes = total_minutes as f64 / total_days as f64;

    Some(Summary {
        total_days,
        total_minutes,
        average_minutes,
        goal,
        met_goal_days,
    })
}
