use serde::{Deserialize, Serialize};

use super::Language;

/// A bout on an event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: i32,
    pub event_id: i32,
    /// Free-text description of the participants.
    pub workers: String,
}

/// Wire shape of a match. Identical to [`Match`] for now.
pub type UnparsedMatch = Match;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDescription {
    pub id: i32,
    pub match_id: i32,
    pub description: String,
    pub language_code: String,
}

impl MatchDescription {
    pub fn language(&self) -> Language {
        Language::from_code(&self.language_code)
    }
}
