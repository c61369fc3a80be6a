//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Game rules configuration
    pub game: GameSettings,

    /// Dictionary configuration
    pub dictionary: DictionarySettings,

    /// Transport configuration
    pub transport: TransportSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Game rules configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSettings {
    /// Round length in seconds
    pub round_seconds: u32,
}

/// Dictionary configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    /// Path to the newline-delimited word list
    pub path: String,
}

/// Transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportSettings {
    /// Maximum body size per outbound message, in bytes
    pub message_limit: usize,

    /// Prefix that marks a chat line as a command
    pub command_prefix: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("game.round_seconds", 60)?
            .set_default("dictionary.path", "words.txt")?
            .set_default("transport.message_limit", 2000_i64)?
            .set_default("transport.command_prefix", "*")?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__GAME__ROUND_SECONDS=90 -> game.round_seconds = 90
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option(
                "dictionary.path",
                std::env::var("DICTIONARY_FILEPATH").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.game.round_seconds == 0 {
                    return Err(ConfigError::Message(
                        "game.round_seconds must be positive".into(),
                    ));
                }
                if settings.transport.message_limit == 0 {
                    return Err(ConfigError::Message(
                        "transport.message_limit must be positive".into(),
                    ));
                }
                Ok(settings)
            })
    }

    /// Fixed settings for unit tests.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            game: GameSettings { round_seconds: 60 },
            dictionary: DictionarySettings {
                path: "words.txt".into(),
            },
            transport: TransportSettings {
                message_limit: 2000,
                command_prefix: "*".into(),
            },
            environment: "test".into(),
        }
    }
}
