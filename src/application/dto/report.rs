//! Final report data.
//!
//! Grouping and ordering here are part of the engine's output contract:
//! groups descend by word length, words sort lexicographically within a
//! group. Transports only decide how the groups are rendered.

use std::collections::HashSet;

use serde::Serialize;

use crate::application::outbound::Field;
use crate::domain::GameSession;

/// Words grouped under one length heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthGroup {
    pub length: usize,
    pub words: Vec<String>,
}

/// End-of-round summary handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    pub total_score: u64,
    pub found: Vec<LengthGroup>,
    pub missed: Vec<LengthGroup>,
}

impl FinalReport {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            total_score: session.score,
            found: group_by_length(&session.found),
            missed: group_by_length(&session.remaining),
        }
    }

    /// Perfect score: nothing was missed.
    pub fn is_perfect(&self) -> bool {
        self.missed.is_empty()
    }

    pub fn found_fields(&self) -> Vec<Field> {
        fields_for(&self.found)
    }

    pub fn missed_fields(&self) -> Vec<Field> {
        fields_for(&self.missed)
    }
}

/// Group a word set by descending length, lexicographic within a group.
fn group_by_length(words: &HashSet<String>) -> Vec<LengthGroup> {
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut groups: Vec<LengthGroup> = Vec::new();
    for word in sorted {
        match groups.last_mut() {
            Some(group) if group.length == word.len() => group.words.push(word.clone()),
            _ => groups.push(LengthGroup {
                length: word.len(),
                words: vec![word.clone()],
            }),
        }
    }
    groups
}

fn fields_for(groups: &[LengthGroup]) -> Vec<Field> {
    groups
        .iter()
        .map(|group| Field {
            heading: format!("{} letters", group.length),
            body: group.words.join(", "),
        })
        .collect()
}
