pub mod dto;
pub mod error;
pub mod models;

pub use dto::common::{ApiResponse, ErrorEnvelope, Page};
pub use error::ModelError;
pub use models::{
    Event, Language, Match, MatchDescription, NewRating, Rating, UnparsedMatch,
    language_to_string, string_to_language,
};
