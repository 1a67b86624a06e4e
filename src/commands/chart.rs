use crate::chart;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{entries, goal};

/// Render the study log as a terminal bar chart.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let table = entries::load(&cfg.entries_file())?;
    if table.is_empty() {
        println!("No data to plot.");
        return Ok(());
    }

    let daily_goal = goal::load(&cfg.goal_file());
    print!("{}", chart::render(&table, daily_goal));

    Ok(())
}
