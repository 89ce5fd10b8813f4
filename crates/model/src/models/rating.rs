use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Language;

/// A user-submitted score for a match, as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i32,
    pub match_id: i32,
    pub language_code: String,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub score: Decimal,
    pub publication_date: String,
    #[serde(default)]
    pub opinion: Option<String>,
}

impl Rating {
    pub fn language(&self) -> Language {
        Language::from_code(&self.language_code)
    }
}

/// Payload for creating a rating. The server assigns `id` and `publication_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRating {
    pub match_id: i32,
    pub language_code: String,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub score: Decimal,
    pub opinion: Option<String>,
}

impl NewRating {
    pub fn new(
        match_id: i32,
        language: Language,
        username: impl Into<String>,
        score: Decimal,
    ) -> Self {
        Self {
            match_id,
            language_code: language.as_code().to_string(),
            username: username.into(),
            score,
            opinion: None,
        }
    }

    pub fn with_opinion(mut self, opinion: impl Into<String>) -> Self {
        self.opinion = Some(opinion.into());
        self
    }
}
