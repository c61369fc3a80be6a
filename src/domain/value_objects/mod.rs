//! # Domain Value Objects
//!
//! Immutable, dependency-free building blocks of the game rules:
//!
//! - **letters**: letter-multiset containment (`covers`)
//! - **scoring**: length-based point awards

pub mod letters;
pub mod scoring;

pub use letters::covers;
pub use scoring::{award, MIN_WORD_LENGTH};
