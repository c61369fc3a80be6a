//! # Domain Entities
//!
//! Core domain entities of the word game.
//!
//! - **GameSession**: one timed round bound to a channel and an owner,
//!   with the found/remaining bookkeeping and its invariants

mod session;

pub use session::{GameSession, GuessOutcome, SessionStatus};
