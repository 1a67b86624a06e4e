//! Interactive menu loop.

use crate::audio::SoundPlayer;
use crate::commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::ui::prompt;

/// One of the six menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddEntry,
    ShowSummary,
    PlotChart,
    SetGoal,
    Export,
    Exit,
}

impl MenuCommand {
    /// Parse a menu choice string. Unknown input yields None.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::AddEntry),
            "2" => Some(Self::ShowSummary),
            "3" => Some(Self::PlotChart),
            "4" => Some(Self::SetGoal),
            "5" => Some(Self::Export),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!();
    println!("📚 Study Tracker Menu");
    println!("1. Add Study Entry");
    println!("2. View Summary");
    println!("3. Plot Chart");
    println!("4. Set Daily Goal");
    println!("5. Export to Excel");
    println!("6. Exit");
}

/// Central command dispatcher: runs until the user picks Exit.
pub fn run_loop(cfg: &Config) -> AppResult<()> {
    let player = SoundPlayer::new(cfg);

    loop {
        print_menu();

        // EOF means no terminal is attached anymore; stop instead of spinning.
        let Some(choice) = prompt::read_line("Choose an option: ") else {
            break;
        };

        let Some(command) = MenuCommand::from_choice(&choice) else {
            error("Invalid choice. Try again.");
            continue;
        };

        let result = match command {
            MenuCommand::AddEntry => commands::add::handle(cfg, &player),
            MenuCommand::ShowSummary => commands::summary::handle(cfg),
            MenuCommand::PlotChart => commands::chart::handle(cfg),
            MenuCommand::SetGoal => commands::goal::handle(cfg),
            MenuCommand::Export => commands::export::handle(cfg),
            MenuCommand::Exit => {
                println!("👋 Goodbye! Keep learning!");
                break;
            }
        };

        // handler failures are reported and the menu keeps running
        if let Err(e) = result {
            error(e.to_string());
        }
    }

    Ok(())
}
