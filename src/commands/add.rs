use crate::audio::SoundPlayer;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::store::{entries, goal};
use crate::ui::messages::{error, success};
use crate::ui::prompt;

/// Record today's study minutes and play the goal feedback sound.
pub fn handle(cfg: &Config, player: &SoundPlayer) -> AppResult<()> {
    let Some(input) = prompt::read_line("How many minutes did you study today? ") else {
        return Ok(());
    };

    //
    // 1. Validate the minutes (positive integer, no write otherwise)
    //
    let minutes: u32 = match input.parse() {
        Ok(m) if m > 0 => m,
        _ => {
            error("Please enter a valid number of minutes.");
            return Ok(());
        }
    };

    //
    // 2. Append today's row and persist the whole table
    //
    let path = cfg.entries_file();
    let mut table = entries::load(&path)?;
    table.push(Entry::today(minutes));
    entries::save(&path, &table)?;
    success("Entry saved!");

    //
    // 3. Goal feedback: sound plus message, sound failures never fatal
    //
    let daily_goal = goal::load(&cfg.goal_file());
    if minutes >= daily_goal {
        player.play(&cfg.success_sound_file());
        success(format!(
            "🎉 Great job! You reached your {daily_goal}-minute goal!"
        ));
    } else {
        player.play(&cfg.fail_sound_file());
        println!(
            "⏱ You studied {} minute(s) less than your goal today.",
            daily_goal - minutes
        );
    }

    Ok(())
}
