//! studylog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod audio;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod menu;
pub mod models;
pub mod store;
pub mod ui;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load();

    if let Some(dir) = &cli.dir {
        cfg.data_dir = dir.clone();
    }
    if cli.no_sound {
        cfg.sound_enabled = false;
    }

    menu::run_loop(&cfg)
}
