//! Anagram universe construction.
//!
//! Scans the dictionary once at session start and fixes the set of
//! playable words for the whole round.

use std::collections::HashSet;

use crate::domain::value_objects::letters::covers;
use crate::domain::value_objects::scoring::MIN_WORD_LENGTH;
use crate::domain::word_source::WordSource;

/// Collect every dictionary entry of playable length whose letters fit
/// inside the target.
///
/// The target itself qualifies whenever it is a dictionary entry, since
/// it trivially covers itself. Membership is deterministic for a fixed
/// (target, dictionary) pair.
pub fn build_anagram_set(target: &str, words: &dyn WordSource) -> HashSet<String> {
    words
        .enumerate_all()
        .filter(|entry| entry.len() >= MIN_WORD_LENGTH && covers(target, entry))
        .map(str::to_owned)
        .collect()
}
