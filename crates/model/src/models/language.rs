use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Language of a match description or a rating.
///
/// On the wire a language is always its 3-letter code ("FRE", "ENG").
/// Decoding a code never fails: anything unrecognized is read as English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    French,
    English,
}

impl Language {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::French => "FRE",
            Self::English => "ENG",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "FRE" => Self::French,
            _ => Self::English,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Self::French, Self::English]
    }

    /// Strict parsing for user input, unlike [`Language::from_code`].
    fn parse_str(s: &str) -> Result<Self, ModelError> {
        match s.trim().to_lowercase().as_str() {
            "fre" | "fr" | "french" => Ok(Self::French),
            "eng" | "en" | "english" => Ok(Self::English),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}

pub fn language_to_string(language: Language) -> String {
    language.as_code().to_string()
}

pub fn string_to_language(code: &str) -> Language {
    Language::from_code(code)
}

impl std::str::FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}
