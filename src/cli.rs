use clap::Parser;

/// Command-line interface definition for studylog.
/// The application itself is menu driven; flags only tune startup.
#[derive(Parser)]
#[command(
    name = "studylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple study time logging CLI: record daily minutes and track a goal",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom locations)
    #[arg(long = "dir")]
    pub dir: Option<String>,

    /// Disable success/failure sound playback
    #[arg(long = "no-sound")]
    pub no_sound: bool,
}
