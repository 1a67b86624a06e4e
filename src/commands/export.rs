use crate::config::Config;
use crate::core::stats;
use crate::errors::AppResult;
use crate::export;
use crate::store::{entries, goal};
use crate::ui::messages::{error, success};

/// Export the study log plus its summary to a two-sheet XLSX workbook.
/// An empty table writes nothing.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let table = entries::load(&cfg.entries_file())?;
    let daily_goal = goal::load(&cfg.goal_file());

    let Some(summary) = stats::summarize(&table, daily_goal) else {
        println!("No data to export.");
        return Ok(());
    };

    let path = cfg.export_file();
    match export::export_xlsx(&table, &summary, &path) {
        Ok(()) => success(format!("Data and summary exported to {}", path.display())),
        Err(e) => error(format!("Failed to export: {e}")),
    }

    Ok(())
}
