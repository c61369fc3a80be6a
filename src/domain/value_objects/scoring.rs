//! Guess scoring.
//!
//! Points scale with word length; anything above six letters earns a
//! flat bonus per extra letter.

/// Minimum playable word length.
pub const MIN_WORD_LENGTH: usize = 3;

/// Points awarded for a correct guess of the given length.
///
/// Lengths below [`MIN_WORD_LENGTH`] never reach the scorer; guess
/// classification filters them out first.
pub fn award(length: usize) -> u64 {
    match length {
        0..=2 => 0,
        3 => 100,
        4 => 400,
        5 => 1200,
        6 => 2000,
        n => 2000 + 1000 * (n as u64 - 6),
    }
}
