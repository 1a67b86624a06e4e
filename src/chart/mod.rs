//! Terminal bar chart of study minutes against the daily goal.
//!
//! One horizontal bar per entry, sorted by date ascending. Bars turn green
//! once the goal is met, cyan otherwise, and a dashed marker shows where the
//! goal sits on the minutes axis.

use crate::models::Entry;
use crate::ui::colors::{GREY, RED, RESET, color_for_minutes};

/// Width of the minutes axis in terminal cells.
const BAR_WIDTH: usize = 50;

const GOAL_MARK: char = '┊';
const BAR_CELL: char = '█';

/// Render the chart as a string ready to print. Callers must not pass an
/// empty table.
pub fn render(entries: &[Entry], goal: u32) -> String {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let max = sorted
        .iter()
        .map(|e| e.minutes)
        .max()
        .unwrap_or(0)
        .max(goal);
    let scale = BAR_WIDTH as f64 / max as f64;
    let goal_col = ((goal as f64 * scale).round() as usize).min(BAR_WIDTH - 1);

    let mut out = String::new();
    out.push_str("\n📈 Study Time Tracker\n\n");

    for e in &sorted {
        let len = ((e.minutes as f64 * scale).round() as usize).min(BAR_WIDTH);
        let color = color_for_minutes(e.minutes, goal);

        let mut bar = String::new();
        for col in 0..BAR_WIDTH {
            if col < len {
                bar.push_str(color);
                bar.push(BAR_CELL);
                bar.push_str(RESET);
            } else if col == goal_col {
                bar.push_str(RED);
                bar.push(GOAL_MARK);
                bar.push_str(RESET);
            } else {
                bar.push(' ');
            }
        }

        out.push_str(&format!("{} │{}│ {:>4}\n", e.date_str(), bar, e.minutes));
    }

    out.push_str(&format!(
        "{:>10} {}└{}┘{}\n",
        "",
        GREY,
        "─".repeat(BAR_WIDTH),
        RESET
    ));
    out.push_str(&format!(
        "{:>12}Minutes Studied   {}{}{} Goal: {} min\n",
        "", RED, GOAL_MARK, RESET, goal
    ));

    out
}
