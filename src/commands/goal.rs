use crate::config::Config;
use crate::errors::AppResult;
use crate::store::goal;
use crate::ui::messages::{error, success};
use crate::ui::prompt;

/// Update the persisted daily goal. Invalid input leaves it unchanged.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let Some(input) = prompt::read_line("Enter your new daily goal (in minutes): ") else {
        return Ok(());
    };

    match input.parse::<u32>() {
        Ok(new_goal) if new_goal > 0 => {
            goal::save(&cfg.goal_file(), new_goal)?;
            success(format!("Daily goal updated to {new_goal} minutes."));
        }
        _ => error("Invalid input. Please enter a positive number."),
    }

    Ok(())
}
