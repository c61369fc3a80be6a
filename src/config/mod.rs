//! Configuration Management
//!
//! Layered settings loading: defaults, config files, environment.

pub mod settings;

pub use settings::{DictionarySettings, GameSettings, Settings, TransportSettings};
