use model::Language;

/// Every route of the rating API consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    EventPage { page: u32 },
    Event { event_id: i32 },
    EventCard { event_id: i32 },
    EventAverage { event_id: i32 },
    EventRatings { event_id: i32, page: u32, language: Language },
    Match { match_id: i32 },
    MatchDescription { match_id: i32, language: Language },
    MatchRatings { match_id: i32, page: u32, language: Language },
    MatchAverage { match_id: i32 },
    GlobalRatings { page: u32, language: Language },
    NewRating,
}

impl Endpoint {
    /// Path and query string, relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Self::EventPage { page } => format!("/events?page={}", page),
            Self::Event { event_id } => format!("/events/{}", event_id),
            Self::EventCard { event_id } => format!("/events/{}/matches", event_id),
            Self::EventAverage { event_id } => format!("/events/{}/average", event_id),
            Self::EventRatings {
                event_id,
                page,
                language,
            } => format!(
                "/events/{}/ratings?page={}&lang={}",
                event_id,
                page,
                language.as_code()
            ),
            Self::Match { match_id } => format!("/match/{}", match_id),
            Self::MatchDescription { match_id, language } => format!(
                "/match/{}/description?lang={}",
                match_id,
                language.as_code()
            ),
            Self::MatchRatings {
                match_id,
                page,
                language,
            } => format!(
                "/match/{}/ratings?page={}&lang={}",
                match_id,
                page,
                language.as_code()
            ),
            Self::MatchAverage { match_id } => format!("/match/{}/average", match_id),
            Self::GlobalRatings { page, language } => {
                format!("/ratings?page={}&lang={}", page, language.as_code())
            }
            Self::NewRating => "/match/ratings".to_string(),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }
}
