//! Game session entity.
//!
//! One timed anagrams round bound to a channel and an owner. The engine
//! task is the sole mutator; everything here is synchronous state
//! transition logic, so the invariants stay testable without a runtime.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::scoring::{award, MIN_WORD_LENGTH};

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
}

/// Outcome of evaluating a single-word guess against the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word was in the remaining set; points were awarded.
    Scored { points: u64 },
    /// The word was already guessed earlier this round.
    AlreadyFound,
    /// Shorter than the minimum playable length.
    TooShort,
    /// Not a sub-anagram of the target.
    NotInVocabulary,
}

/// One active game round.
///
/// Invariants, held across every transition:
/// - `remaining ∪ found` is fixed at creation (the anagram universe)
/// - `remaining` and `found` are disjoint
/// - `score` equals the sum of awards over `found`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: Uuid,

    /// Channel this round is bound to.
    pub channel_id: i64,

    /// Player whose messages are accepted; everyone else is ignored.
    pub owner_id: i64,

    /// Normalized lowercase source word; immutable for the session.
    pub target: String,

    /// Scrambled (random mode) or literal (custom mode) string shown to
    /// players; immutable once the session starts.
    pub display: String,

    /// Valid sub-anagrams not yet guessed.
    pub remaining: HashSet<String>,

    /// Correctly guessed words.
    pub found: HashSet<String>,

    pub score: u64,

    /// Seconds left on the round clock, updated at timer milestones.
    pub time_remaining_secs: u32,

    pub status: SessionStatus,

    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a new active session over a precomputed anagram universe.
    pub fn new(
        channel_id: i64,
        owner_id: i64,
        target: String,
        display: String,
        anagrams: HashSet<String>,
        round_secs: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel_id,
            owner_id,
            target,
            display,
            remaining: anagrams,
            found: HashSet::new(),
            score: 0,
            time_remaining_secs: round_secs,
            status: SessionStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Evaluate a single-word guess and apply it.
    ///
    /// Classification order: remaining, already found, too short, not in
    /// vocabulary. A word shorter than the minimum length can never be in
    /// `remaining`, so the order is safe.
    pub fn evaluate_guess(&mut self, content: &str) -> GuessOutcome {
        let word = content.to_lowercase();

        if self.remaining.contains(&word) {
            let points = award(word.len());
            self.remaining.remove(&word);
            self.found.insert(word);
            self.score += points;
            return GuessOutcome::Scored { points };
        }

        if self.found.contains(&word) {
            return GuessOutcome::AlreadyFound;
        }

        if word.len() < MIN_WORD_LENGTH {
            return GuessOutcome::TooShort;
        }

        GuessOutcome::NotInVocabulary
    }

    /// True once every anagram has been found.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Record a timer milestone.
    pub fn set_time_remaining(&mut self, secs: u32) {
        self.time_remaining_secs = secs;
    }

    /// Terminal transition; idempotent.
    pub fn complete(&mut self) {
        self.status = SessionStatus::Completed;
    }
}
