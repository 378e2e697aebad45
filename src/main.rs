//! Contact Assistant - Main entry point
//!
//! Runs the interactive address book on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::{Config, Repl};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so prompts and replies stay on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact assistant (birthday window: {} days)",
        config.birthday_window_days
    );

    let stdin = io::stdin();
    let mut repl = Repl::new(stdin.lock(), io::stdout(), config.birthday_window_days);

    if let Err(e) = repl.run() {
        error!("Command loop failed: {}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
