//! Contact Book - Main entry point
//!
//! Starts the assistant bot on stdin/stdout. Logs go to stderr so they never
//! mix with the conversation.

use anyhow::Result;
use contact_book::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    if let Err(e) = contact_book::bot::run_bot(&config) {
        error!("Console I/O failed: {}", e);
        return Err(e);
    }

    info!("Contact book shutdown complete");
    Ok(())
}
