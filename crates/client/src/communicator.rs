use model::{
    ApiResponse, ErrorEnvelope, Event, Language, MatchDescription, NewRating, Page, Rating,
    UnparsedMatch,
};
use reqwest::{Client, StatusCode, header};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    api::RateMatchApi,
    config::ClientConfig,
    endpoint::Endpoint,
    error::{ClientError, Result},
};

/// Average reported when none could be fetched.
pub const NO_AVERAGE: Decimal = Decimal::NEGATIVE_ONE;

/// HTTP client for the rating API.
///
/// Holds nothing but the base URL and a connection pool, so clones are cheap
/// and calls may run concurrently.
#[derive(Debug, Clone)]
pub struct Communicator {
    base_url: String,
    client: Client,
}

impl Communicator {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("ratematch/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url().to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_method<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::StatusError {
                message: error_message(status, &body),
                status: status.as_u16(),
                url,
            });
        }

        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|source| ClientError::DecodeError {
                url: url.clone(),
                source,
            })?;

        debug!("GET {} answered: {}", url, envelope.message);
        Ok(envelope.into_data())
    }

    /// Posts a new rating. Only the response status is looked at.
    pub async fn submit_match_rating(&self, rating: &NewRating) -> Result<()> {
        let url = Endpoint::NewRating.url(&self.base_url);
        debug!("POST {} (match {})", url, rating.match_id);

        let response = self.client.post(&url).json(rating).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::StatusError {
                message: error_message(status, &body),
                status: status.as_u16(),
                url,
            });
        }

        Ok(())
    }

    pub async fn fetch_average_score_for_event(&self, event_id: i32) -> Result<Decimal> {
        self.get_method(Endpoint::EventAverage { event_id }).await
    }

    pub async fn fetch_average_score_for_match(&self, match_id: i32) -> Result<Decimal> {
        self.get_method(Endpoint::MatchAverage { match_id }).await
    }
}

/// Longest raw error body kept in an error message, in characters.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Best message available from an error response: the envelope's `message`,
/// then the raw body with whitespace runs collapsed and cut to
/// [`MAX_ERROR_BODY_CHARS`], then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();

    match envelope.message {
        Some(message) if !message.trim().is_empty() => message,
        _ if !body.trim().is_empty() => compact_body(body),
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

fn compact_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return collapsed;
    }

    let mut truncated: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push('…');
    truncated
}

fn average_or_sentinel(result: Result<Decimal>, what: &str) -> Decimal {
    result.unwrap_or_else(|e| {
        warn!("No average available for {}: {}", what, e);
        NO_AVERAGE
    })
}

#[async_trait::async_trait]
impl RateMatchApi for Communicator {
    async fn get_event_page(&self, page: u32) -> Result<Page<Event>> {
        self.get_method(Endpoint::EventPage { page }).await
    }

    async fn get_event_informations(&self, event_id: i32) -> Result<Event> {
        self.get_method(Endpoint::Event { event_id }).await
    }

    async fn get_event_card(&self, event_id: i32) -> Result<Vec<UnparsedMatch>> {
        self.get_method(Endpoint::EventCard { event_id }).await
    }

    async fn get_match_informations(&self, match_id: i32) -> Result<UnparsedMatch> {
        self.get_method(Endpoint::Match { match_id }).await
    }

    async fn get_match_localized_description(
        &self,
        match_id: i32,
        language: Language,
    ) -> Result<MatchDescription> {
        self.get_method(Endpoint::MatchDescription { match_id, language })
            .await
    }

    async fn get_event_ratings(
        &self,
        event_id: i32,
        page: u32,
        language: Language,
    ) -> Result<Page<Rating>> {
        self.get_method(Endpoint::EventRatings {
            event_id,
            page,
            language,
        })
        .await
    }

    async fn get_match_ratings(
        &self,
        match_id: i32,
        page: u32,
        language: Language,
    ) -> Result<Page<Rating>> {
        self.get_method(Endpoint::MatchRatings {
            match_id,
            page,
            language,
        })
        .await
    }

    async fn get_global_ratings(&self, page: u32, language: Language) -> Result<Page<Rating>> {
        self.get_method(Endpoint::GlobalRatings { page, language })
            .await
    }

    async fn add_match_rating(&self, rating: &NewRating) -> bool {
        match self.submit_match_rating(rating).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Rating for match {} was not accepted: {}", rating.match_id, e);
                false
            }
        }
    }

    async fn get_average_score_for_event(&self, event_id: i32) -> Decimal {
        let result = self.fetch_average_score_for_event(event_id).await;
        average_or_sentinel(result, &format!("event {}", event_id))
    }

    async fn get_average_score_for_match(&self, match_id: i32) -> Decimal {
        let result = self.fetch_average_score_for_match(match_id).await;
        average_or_sentinel(result, &format!("match {}", match_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let message = error_message(
            StatusCode::NOT_FOUND,
            r#"{"message":"Event not found","data":null}"#,
        );
        assert_eq!(message, "Event not found");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        let message = error_message(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(message, "upstream down");
    }

    #[test]
    fn test_error_message_compacts_large_bodies() {
        let page = format!(
            "<html>\n  <body>\n\n    {}\n  </body>\n</html>",
            "Service unavailable ".repeat(50)
        );

        let message = error_message(StatusCode::SERVICE_UNAVAILABLE, &page);
        assert!(message.starts_with("<html> <body> Service unavailable"));
        assert!(!message.contains('\n'));
        assert!(!message.contains("  "));
        assert_eq!(message.chars().count(), MAX_ERROR_BODY_CHARS + 1);
        assert!(message.ends_with('…'));
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn test_sentinel_on_failure() {
        let failed = Err(ClientError::ConfigError("unreachable".to_string()));
        assert_eq!(average_or_sentinel(failed, "event 1"), NO_AVERAGE);
        assert_eq!(
            average_or_sentinel(Ok(Decimal::new(35, 1)), "event 1"),
            Decimal::new(35, 1)
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = ClientError::StatusError {
            url: "http://api.test/events/4".to_string(),
            status: 404,
            message: "Event not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not get data. [http://api.test/events/4]\nReason: Event not found"
        );
        assert!(err.is_not_found());
    }
}
