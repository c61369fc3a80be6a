//! Session engine and round timer.
//!
//! One engine task per session consumes a typed event queue fed by two
//! producers: guess dispatch and the countdown timer. The engine is the
//! sole mutator of session state, which makes event ordering explicit
//! and keeps the final report free of races with late timer ticks.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::application::dto::FinalReport;
use crate::application::outbound::{chunk_fields, OutboundChannel};
use crate::application::registry::SessionRegistry;
use crate::domain::{GameSession, GuessOutcome};
use crate::infrastructure::metrics;

/// Exact message content that ends a round early.
pub const QUIT_TOKEN: &str = "quit";

/// Seconds-remaining marks announced before expiry.
const MILESTONES: [u32; 2] = [30, 10];

/// Events consumed by a session engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Owner message dispatched to the session.
    Guess { content: String },
    /// Countdown milestone.
    Milestone { seconds_left: u32 },
    /// Round clock ran out.
    Expired,
    /// Owner-issued quit command.
    Quit,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Exhausted,
    Quit,
    Expired,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::Quit => "quit",
            Self::Expired => "expired",
        }
    }
}

/// Spawn the round countdown.
///
/// Fixed schedule from session start: milestones at 30 and 10 seconds
/// remaining, then expiry. Milestones that do not fit a shorter round
/// are skipped. The engine aborts this task the instant it terminates
/// for any other reason.
pub fn spawn_round_timer(
    round_secs: u32,
    events: mpsc::UnboundedSender<SessionEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut elapsed = 0u32;
        for seconds_left in MILESTONES {
            if seconds_left >= round_secs {
                continue;
            }
            let at = round_secs - seconds_left;
            sleep(Duration::from_secs(u64::from(at - elapsed))).await;
            elapsed = at;
            if events.send(SessionEvent::Milestone { seconds_left }).is_err() {
                return;
            }
        }
        sleep(Duration::from_secs(u64::from(round_secs - elapsed))).await;
        let _ = events.send(SessionEvent::Expired);
    })
}

/// Single-consumer event loop driving one session to completion.
pub struct SessionEngine<O: OutboundChannel> {
    channel_id: i64,
    session: Arc<RwLock<GameSession>>,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    timer: JoinHandle<()>,
    outbound: Arc<O>,
    registry: Arc<SessionRegistry>,
}

impl<O: OutboundChannel> SessionEngine<O> {
    pub fn new(
        channel_id: i64,
        session: Arc<RwLock<GameSession>>,
        events: mpsc::UnboundedReceiver<SessionEvent>,
        timer: JoinHandle<()>,
        outbound: Arc<O>,
        registry: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            channel_id,
            session,
            events,
            timer,
            outbound,
            registry,
        }
    }

    /// Run the session to completion and emit the final report.
    pub async fn run(mut self) {
        let (display, round_secs) = {
            let session = self.session.read();
            (session.display.clone(), session.time_remaining_secs)
        };
        self.say(&format!(
            "You have {round_secs} seconds to type in anagrams for {display}. Go!"
        ))
        .await;

        let reason = loop {
            // All handle senders dropped means the registry entry is gone;
            // treat it like a quit.
            let Some(event) = self.events.recv().await else {
                break TerminationReason::Quit;
            };

            match event {
                SessionEvent::Guess { content } => {
                    if content == QUIT_TOKEN {
                        self.say("Exiting").await;
                        break TerminationReason::Quit;
                    }
                    // Multi-word messages are chatter, not guesses.
                    if content.chars().any(char::is_whitespace) {
                        continue;
                    }

                    let outcome = self.session.write().evaluate_guess(&content);
                    metrics::GUESSES_TOTAL
                        .with_label_values(&[outcome_label(&outcome)])
                        .inc();

                    match outcome {
                        GuessOutcome::Scored { points } => {
                            self.say(&format!("+ {points}")).await;
                            if self.session.read().is_exhausted() {
                                break TerminationReason::Exhausted;
                            }
                        }
                        GuessOutcome::AlreadyFound => {
                            self.say(&format!("{content} (Already used)")).await;
                        }
                        GuessOutcome::TooShort => {
                            self.say("(Words must be at least 3 letters long)").await;
                        }
                        GuessOutcome::NotInVocabulary => {
                            self.say(&format!("{content} (Not in vocabulary)")).await;
                        }
                    }
                }

                SessionEvent::Milestone { seconds_left } => {
                    self.session.write().set_time_remaining(seconds_left);
                    self.say(&format!("{seconds_left} seconds remaining!")).await;
                }

                SessionEvent::Expired => {
                    self.session.write().set_time_remaining(0);
                    self.say("Time's up!").await;
                    break TerminationReason::Expired;
                }

                SessionEvent::Quit => {
                    self.say("Exiting").await;
                    break TerminationReason::Quit;
                }
            }
        };

        self.finalize(reason).await;
    }

    async fn finalize(self, reason: TerminationReason) {
        // The countdown must be cancelled before final state is read;
        // the loop has exited, so a queued milestone can no longer land.
        self.timer.abort();

        let report = {
            let mut session = self.session.write();
            session.complete();
            FinalReport::from_session(&session)
        };
        self.registry.remove(self.channel_id);

        metrics::SESSIONS_COMPLETED_TOTAL
            .with_label_values(&[reason.as_str()])
            .inc();
        tracing::info!(
            channel_id = self.channel_id,
            reason = reason.as_str(),
            score = report.total_score,
            "Session completed"
        );

        let limit = self.outbound.message_limit();

        self.say(&format!("Total points: {}", report.total_score)).await;

        let found = chunk_fields(&report.found_fields(), limit);
        if let Err(e) = self
            .outbound
            .send_structured(self.channel_id, "Your anagrams", &found)
            .await
        {
            tracing::warn!(channel_id = self.channel_id, error = %e, "Outbound send failed");
        }

        if report.is_perfect() {
            self.say("You got every anagram, I'm so proud of you.").await;
        } else {
            let missed = chunk_fields(&report.missed_fields(), limit);
            if let Err(e) = self
                .outbound
                .send_structured(self.channel_id, "You missed", &missed)
                .await
            {
                tracing::warn!(channel_id = self.channel_id, error = %e, "Outbound send failed");
            }
        }
    }

    async fn say(&self, text: &str) {
        if let Err(e) = self.outbound.send_text(self.channel_id, text).await {
            tracing::warn!(channel_id = self.channel_id, error = %e, "Outbound send failed");
        }
    }
}

fn outcome_label(outcome: &GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Scored { .. } => "scored",
        GuessOutcome::AlreadyFound => "already_used",
        GuessOutcome::TooShort => "too_short",
        GuessOutcome::NotInVocabulary => "unknown",
    }
}
