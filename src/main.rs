//! rolo - Main entry point
//!
//! This is the main executable for the rolo address book: an interactive
//! assistant bot that keeps contacts, phone numbers, and birthdays in
//! memory for the duration of the session.

use anyhow::Result;
use rolo::models::AddressBook;
use rolo::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting the conversation
    // on stdout); RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        policy = ?config.weekend_policy,
        "starting assistant bot"
    );

    let mut book = AddressBook::new();
    if let Err(e) = rolo::repl::run(&mut book, &config) {
        error!("command loop failed: {}", e);
        return Err(e.into());
    }

    info!("session ended");
    Ok(())
}
