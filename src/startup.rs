//! Application Startup
//!
//! Application building and wiring.

use std::sync::Arc;

use anyhow::Result;

use crate::application::registry::SessionRegistry;
use crate::application::services::GameServiceImpl;
use crate::config::Settings;
use crate::infrastructure::dictionary::InMemoryDictionary;
use crate::presentation::console::{self, ConsoleChannel};

/// Application instance
pub struct Application {
    service: Arc<GameServiceImpl<InMemoryDictionary, ConsoleChannel>>,
    settings: Arc<Settings>,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let dictionary = Arc::new(InMemoryDictionary::load(&settings.dictionary.path)?);

        let outbound = Arc::new(ConsoleChannel::new(settings.transport.message_limit));
        let registry = Arc::new(SessionRegistry::new());
        let settings = Arc::new(settings);

        let service = Arc::new(GameServiceImpl::new(
            dictionary,
            outbound,
            registry,
            Arc::clone(&settings),
        ));

        Ok(Self { service, settings })
    }

    /// Serve the console conversation until input closes
    pub async fn run_until_stopped(self) -> Result<()> {
        console::run(self.service, &self.settings.transport.command_prefix).await
    }
}
