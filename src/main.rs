//! Seat Planner - Terminal-based seat-map editor
//!
//! This application provides a visual editor for seat assignments,
//! allowing users to paint named groups onto a fixed seat grid with
//! live per-group counts and best-effort sync to a remote store.

use anyhow::Result;
use clap::Parser;

use seatplanner::config::Config;
use seatplanner::tui;

/// Seat Planner - Terminal-based seat-map editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Remote store endpoint URL (overrides the configured one)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Run without remote sync
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let mut config = if Config::exists() {
        Config::load().unwrap_or_else(|_| Config::default())
    } else {
        let config = Config::default();
        // First run: write the config so users have a file to edit.
        // Failure here is not fatal, the app runs fine without it.
        let _ = config.save();
        config
    };

    if cli.offline {
        config.sync.endpoint = None;
    } else if cli.endpoint.is_some() {
        config.sync.endpoint = cli.endpoint;
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
