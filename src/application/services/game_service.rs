//! Game Service
//!
//! The command surface of the bot: starting rounds, status queries,
//! quitting, help, and routing owner guesses into the running engine.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::seq::{IteratorRandom, SliceRandom};
use tokio::sync::mpsc;

use crate::application::outbound::{Field, OutboundChannel};
use crate::application::registry::{SessionHandle, SessionRegistry};
use crate::application::services::session_engine::{
    spawn_round_timer, SessionEngine, SessionEvent, QUIT_TOKEN,
};
use crate::config::Settings;
use crate::domain::{build_anagram_set, GameSession, WordSource, MIN_WORD_LENGTH};
use crate::infrastructure::metrics;

/// Word lengths offered by random-start mode.
pub const RANDOM_LENGTHS: [usize; 2] = [6, 7];

/// Game service trait
#[async_trait]
pub trait GameService: Send + Sync {
    /// Start a round with a random word of the given length (6 or 7)
    async fn start_random(
        &self,
        channel_id: i64,
        author_id: i64,
        length: usize,
    ) -> Result<(), GameError>;

    /// Start a round with a caller-supplied word
    async fn start_custom(
        &self,
        channel_id: i64,
        author_id: i64,
        word: &str,
    ) -> Result<(), GameError>;

    /// Current display string and seconds remaining
    async fn status(&self, channel_id: i64) -> Result<StatusDto, GameError>;

    /// End the channel's round; only effective for the session owner
    async fn quit(&self, channel_id: i64, author_id: i64) -> Result<(), GameError>;

    /// Route an inbound chat message; non-owner traffic is dropped here
    /// and never reaches the engine
    async fn handle_message(&self, channel_id: i64, author_id: i64, content: &str);

    /// Send the command listing
    async fn help(&self, channel_id: i64);
}

/// Status snapshot for an active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDto {
    pub display: String,
    pub time_remaining_secs: u32,
}

/// Game service errors
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{0} is not a valid word")]
    InvalidWord(String),

    #[error("{0} is too short! Please make your word 3 letters or more")]
    WordTooShort(String),

    #[error("Random mode only supports 6 or 7 letter words")]
    UnsupportedLength(usize),

    #[error("A game is already running in this channel")]
    SessionAlreadyActive,

    #[error("No active game in this channel")]
    NoActiveSession,

    #[error("Only the session owner can do that")]
    NotOwner,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// GameService implementation
pub struct GameServiceImpl<W, O>
where
    W: WordSource,
    O: OutboundChannel,
{
    words: Arc<W>,
    outbound: Arc<O>,
    registry: Arc<SessionRegistry>,
    settings: Arc<Settings>,
}

impl<W, O> GameServiceImpl<W, O>
where
    W: WordSource + 'static,
    O: OutboundChannel + 'static,
{
    pub fn new(
        words: Arc<W>,
        outbound: Arc<O>,
        registry: Arc<SessionRegistry>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            words,
            outbound,
            registry,
            settings,
        }
    }

    /// Create the session, claim the channel, and spawn timer + engine.
    fn start_session(
        &self,
        channel_id: i64,
        owner_id: i64,
        target: String,
        display: String,
        mode: &'static str,
    ) -> Result<(), GameError> {
        let anagrams = build_anagram_set(&target, self.words.as_ref());
        let round_secs = self.settings.game.round_seconds;

        let session = Arc::new(RwLock::new(GameSession::new(
            channel_id, owner_id, target, display, anagrams, round_secs,
        )));
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = SessionHandle {
            owner_id,
            session: Arc::clone(&session),
            events: tx.clone(),
        };
        // Claim the channel before any task is spawned
        if !self.registry.try_insert(channel_id, handle) {
            return Err(GameError::SessionAlreadyActive);
        }

        metrics::SESSIONS_STARTED_TOTAL
            .with_label_values(&[mode])
            .inc();
        tracing::info!(channel_id, owner_id, mode, "Game session started");

        let timer = spawn_round_timer(round_secs, tx);
        let engine = SessionEngine::new(
            channel_id,
            session,
            rx,
            timer,
            Arc::clone(&self.outbound),
            Arc::clone(&self.registry),
        );
        tokio::spawn(engine.run());

        Ok(())
    }
}

#[async_trait]
impl<W, O> GameService for GameServiceImpl<W, O>
where
    W: WordSource + 'static,
    O: OutboundChannel + 'static,
{
    async fn start_random(
        &self,
        channel_id: i64,
        author_id: i64,
        length: usize,
    ) -> Result<(), GameError> {
        if !RANDOM_LENGTHS.contains(&length) {
            return Err(GameError::UnsupportedLength(length));
        }

        let target = {
            let mut rng = rand::rng();
            self.words
                .words_of_length(length)
                .iter()
                .choose(&mut rng)
                .cloned()
        }
        .ok_or_else(|| GameError::Internal(format!("no {length}-letter words loaded")))?;

        let display = scramble(&target);
        self.start_session(channel_id, author_id, target, display, "random")
    }

    async fn start_custom(
        &self,
        channel_id: i64,
        author_id: i64,
        word: &str,
    ) -> Result<(), GameError> {
        let word = word.to_lowercase();
        if !self.words.is_valid_word(&word) {
            return Err(GameError::InvalidWord(word));
        }
        if word.len() < MIN_WORD_LENGTH {
            return Err(GameError::WordTooShort(word));
        }

        // Custom targets are shown literally, not scrambled
        let display = word.clone();
        self.start_session(channel_id, author_id, word, display, "custom")
    }

    async fn status(&self, channel_id: i64) -> Result<StatusDto, GameError> {
        self.registry
            .status_of(channel_id)
            .map(|(display, time_remaining_secs)| StatusDto {
                display,
                time_remaining_secs,
            })
            .ok_or(GameError::NoActiveSession)
    }

    async fn quit(&self, channel_id: i64, author_id: i64) -> Result<(), GameError> {
        let owner = self
            .registry
            .owner_of(channel_id)
            .ok_or(GameError::NoActiveSession)?;
        if owner != author_id {
            return Err(GameError::NotOwner);
        }

        self.registry.send_event(channel_id, SessionEvent::Quit);
        Ok(())
    }

    async fn handle_message(&self, channel_id: i64, author_id: i64, content: &str) {
        match self.registry.owner_of(channel_id) {
            Some(owner) if owner == author_id => {
                self.registry.send_event(
                    channel_id,
                    SessionEvent::Guess {
                        content: content.to_string(),
                    },
                );
            }
            // Other authors' messages are not delivered to the session
            _ => {}
        }
    }

    async fn help(&self, channel_id: i64) {
        let prefix = &self.settings.transport.command_prefix;
        let fields = vec![
            Field {
                heading: format!("{prefix}anagrams 6"),
                body: "Plays anagrams with a random 6-letter word".into(),
            },
            Field {
                heading: format!("{prefix}anagrams 7"),
                body: "Plays anagrams with a random 7-letter word".into(),
            },
            Field {
                heading: format!("{prefix}anagrams <word>"),
                body: "Plays anagrams with a given word".into(),
            },
            Field {
                heading: format!("{prefix}status"),
                body: "Shows the current scramble and time remaining".into(),
            },
            Field {
                heading: QUIT_TOKEN.into(),
                body: "Ends your running game".into(),
            },
        ];

        if let Err(e) = self
            .outbound
            .send_structured(channel_id, "Help", &fields)
            .await
        {
            tracing::warn!(channel_id, error = %e, "Outbound send failed");
        }
    }
}

/// Random permutation of the target's characters.
fn scramble(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(&mut rand::rng());
    letters.into_iter().collect()
}
