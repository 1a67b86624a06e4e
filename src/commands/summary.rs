use crate::config::Config;
use crate::core::stats;
use crate::errors::AppResult;
use crate::store::{entries, goal};

/// Print aggregate statistics over the whole study log.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let table = entries::load(&cfg.entries_file())?;
    let daily_goal = goal::load(&cfg.goal_file());

    let Some(summary) = stats::summarize(&table, daily_goal) else {
        println!("No data found.");
        return Ok(());
    };

    println!();
    println!("📊 Study Summary:");
    println!("Total days tracked: {}", summary.total_days);
    println!("Total minutes studied: {}", summary.total_minutes);
    println!("Average minutes per day: {:.2}", summary.average_minutes);
    println!(
        "🎯 Days you met your goal ({} min): {}/{}",
        summary.goal, summary.met_goal_days, summary.total_days
    );

    Ok(())
}
