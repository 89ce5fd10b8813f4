use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown language: '{0}'. Available: FRE, ENG")]
    UnknownLanguage(String),
}
