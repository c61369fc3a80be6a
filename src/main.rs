//! # Anagrams Bot
//!
//! A channel-based timed anagrams word game implemented in Rust.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Dictionary loading
//! - The console game loop

use anyhow::Result;
use tracing::info;

use anagrams_bot::config::Settings;
use anagrams_bot::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    anagrams_bot::telemetry::init_tracing();

    info!("Starting Anagrams Bot...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        dictionary = %settings.dictionary.path,
        round_seconds = settings.game.round_seconds,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let prefix = settings.transport.command_prefix.clone();

    // Build and run the application
    let application = Application::build(settings)?;

    info!("Ready to play. Type {prefix}help for a list of commands");
    application.run_until_stopped().await?;

    Ok(())
}
