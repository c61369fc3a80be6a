//! In-Memory Dictionary
//!
//! Loads a newline-delimited word list once at startup and serves all
//! lookups from memory. The 6- and 7-letter buckets used by random-start
//! mode are precomputed during the load.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::domain::WordSource;
use crate::shared::error::AppError;

static EMPTY: Lazy<HashSet<String>> = Lazy::new(HashSet::new);

/// Lengths bucketed for random-start mode.
const BUCKETED_LENGTHS: [usize; 2] = [6, 7];

/// Dictionary held fully in memory.
pub struct InMemoryDictionary {
    words: HashSet<String>,
    by_length: HashMap<usize, HashSet<String>>,
}

impl InMemoryDictionary {
    /// Load from a newline-delimited word list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let dictionary = Self::from_lines(raw.lines());

        if dictionary.words.is_empty() {
            return Err(AppError::Dictionary(format!(
                "no words loaded from {}",
                path.display()
            )));
        }

        tracing::info!(
            words = dictionary.words.len(),
            path = %path.display(),
            "Dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Build from an iterator of lines. Entries are lowercased; blank
    /// lines are skipped.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words = HashSet::new();
        let mut by_length: HashMap<usize, HashSet<String>> = BUCKETED_LENGTHS
            .iter()
            .map(|&len| (len, HashSet::new()))
            .collect();

        for line in lines {
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if let Some(bucket) = by_length.get_mut(&word.len()) {
                bucket.insert(word.clone());
            }
            words.insert(word);
        }

        Self { words, by_length }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for InMemoryDictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn words_of_length(&self, length: usize) -> &HashSet<String> {
        self.by_length.get(&length).unwrap_or(&EMPTY)
    }

    fn enumerate_all(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }
}
