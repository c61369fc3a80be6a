//! Application Error Types
//!
//! Bootstrap-level failures. Game-level errors live with the game
//! service ([`crate::application::services::GameError`]).

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
