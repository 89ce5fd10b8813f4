mod event;
mod language;
mod matches;
mod rating;

pub use event::Event;
pub use language::{Language, language_to_string, string_to_language};
pub use matches::{Match, MatchDescription, UnparsedMatch};
pub use rating::{NewRating, Rating};
