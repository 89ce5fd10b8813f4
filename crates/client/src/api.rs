use model::{Event, Language, MatchDescription, NewRating, Page, Rating, UnparsedMatch};
use rust_decimal::Decimal;

use crate::Result;

/// Typed contract of the rating API.
///
/// Detail and list queries fail with a [`crate::ClientError`] carrying the
/// requested URL and the server's message. Submitting a rating reports a plain
/// success flag, and averages fall back to [`crate::NO_AVERAGE`] instead of
/// failing.
#[async_trait::async_trait]
pub trait RateMatchApi: Send + Sync {
    async fn get_event_page(&self, page: u32) -> Result<Page<Event>>;

    async fn get_event_informations(&self, event_id: i32) -> Result<Event>;

    /// Every match of an event, in card order.
    async fn get_event_card(&self, event_id: i32) -> Result<Vec<UnparsedMatch>>;

    async fn get_match_informations(&self, match_id: i32) -> Result<UnparsedMatch>;

    async fn get_match_localized_description(
        &self,
        match_id: i32,
        language: Language,
    ) -> Result<MatchDescription>;

    async fn get_event_ratings(
        &self,
        event_id: i32,
        page: u32,
        language: Language,
    ) -> Result<Page<Rating>>;

    async fn get_match_ratings(
        &self,
        match_id: i32,
        page: u32,
        language: Language,
    ) -> Result<Page<Rating>>;

    /// Latest ratings across every match.
    async fn get_global_ratings(&self, page: u32, language: Language) -> Result<Page<Rating>>;

    /// `true` iff the server answered with a success status.
    async fn add_match_rating(&self, rating: &NewRating) -> bool;

    /// Average score, or [`crate::NO_AVERAGE`] when it cannot be obtained.
    async fn get_average_score_for_event(&self, event_id: i32) -> Decimal;

    /// Average score, or [`crate::NO_AVERAGE`] when it cannot be obtained.
    async fn get_average_score_for_match(&self, match_id: i32) -> Decimal;
}
