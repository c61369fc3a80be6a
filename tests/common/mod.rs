//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test doubles.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use anagrams_bot::application::outbound::{Field, OutboundChannel, OutboundError};
use anagrams_bot::application::registry::SessionRegistry;
use anagrams_bot::application::services::GameServiceImpl;
use anagrams_bot::config::{DictionarySettings, GameSettings, Settings, TransportSettings};
use anagrams_bot::infrastructure::dictionary::InMemoryDictionary;

/// Channel/author ids used across the flow tests.
pub const CHANNEL: i64 = 7;
pub const OWNER: i64 = 42;
pub const STRANGER: i64 = 99;

/// Records every outbound message as a rendered line.
#[derive(Default)]
pub struct RecordingChannel {
    lines: Mutex<Vec<String>>,
}

impl RecordingChannel {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }
}

#[async_trait]
impl OutboundChannel for RecordingChannel {
    fn message_limit(&self) -> usize {
        2000
    }

    async fn send_text(&self, _channel_id: i64, text: &str) -> Result<(), OutboundError> {
        self.lines.lock().push(text.to_string());
        Ok(())
    }

    async fn send_structured(
        &self,
        _channel_id: i64,
        title: &str,
        fields: &[Field],
    ) -> Result<(), OutboundError> {
        let mut lines = self.lines.lock();
        for field in fields {
            lines.push(format!("[{title}] {}: {}", field.heading, field.body));
        }
        Ok(())
    }
}

pub fn test_settings() -> Settings {
    Settings {
        game: GameSettings { round_seconds: 60 },
        dictionary: DictionarySettings {
            path: "unused".into(),
        },
        transport: TransportSettings {
            message_limit: 2000,
            command_prefix: "*".into(),
        },
        environment: "test".into(),
    }
}

pub type TestService = GameServiceImpl<InMemoryDictionary, RecordingChannel>;

/// Build a service over a fixed word list with a recording transport.
pub fn build_service(
    words: &[&str],
) -> (Arc<TestService>, Arc<RecordingChannel>, Arc<SessionRegistry>) {
    let dictionary = Arc::new(InMemoryDictionary::from_lines(words.iter().copied()));
    let outbound = Arc::new(RecordingChannel::default());
    let registry = Arc::new(SessionRegistry::new());

    let service = Arc::new(GameServiceImpl::new(
        Arc::clone(&dictionary),
        Arc::clone(&outbound),
        Arc::clone(&registry),
        Arc::new(test_settings()),
    ));
    (service, outbound, registry)
}

/// Yield until the channel's session is gone (bounded, test-friendly).
pub async fn wait_for_completion(registry: &SessionRegistry, channel_id: i64) {
    for _ in 0..10_000 {
        if !registry.is_active(channel_id) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("session did not complete");
}
