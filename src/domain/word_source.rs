//! Word source contract.
//!
//! Dictionary access behind a trait so the game logic stays independent
//! of how word lists are loaded and stored. Implemented in the
//! infrastructure layer, following the dependency inversion principle.

use std::collections::HashSet;

/// Read access to the game dictionary.
pub trait WordSource: Send + Sync {
    /// Exact dictionary membership, case-insensitive.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Precomputed set of words of the given length.
    ///
    /// Populated for the lengths offered by random-start mode (6 and 7);
    /// other lengths yield an empty set.
    fn words_of_length(&self, length: usize) -> &HashSet<String>;

    /// Enumerate every dictionary entry, lowercase.
    fn enumerate_all(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
