use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use client::{
    ClientConfig, Communicator, Configurator, FileStore, NO_AVERAGE, RateMatchApi,
    config::{API_URL_VAR, TIMEOUT_VAR},
};
use model::{Language, NewRating, Page, Rating};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ratematch")]
#[command(about = "Browse wrestling events and rate matches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Overrides RATEMATCH_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Overrides RATEMATCH_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, env = "RATEMATCH_PREFERENCES", default_value = ".ratematch/preferences.json")]
    preferences: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Browse(BrowseCommand),
    /// Show or change the stored preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that talk to the API.
#[derive(Subcommand)]
enum BrowseCommand {
    /// Latest events
    Events {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Event informations, card and average score
    Event { event_id: i32 },
    /// Match informations, localized description and average score
    Match {
        match_id: i32,

        #[arg(long)]
        lang: Option<Language>,
    },
    /// Ratings of an event, a match, or of every match
    Ratings {
        #[command(flatten)]
        scope: RatingScope,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        lang: Option<Language>,
    },
    /// Submit a rating for a match
    Rate {
        match_id: i32,

        #[arg(long)]
        username: String,

        #[arg(long)]
        score: Decimal,

        #[arg(long)]
        opinion: Option<String>,

        #[arg(long)]
        lang: Option<Language>,
    },
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct RatingScope {
    #[arg(long)]
    event: Option<i32>,

    #[arg(long = "match")]
    match_id: Option<i32>,
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Theme { value: String },
    Language { code: Language },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ratematch={},client={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let store = FileStore::open_or_empty(&cli.preferences);

    match cli.command {
        Commands::Config { action } => {
            let mut configurator =
                Configurator::load(store).context("Failed to load preferences")?;
            handle_config(&action, &mut configurator)
        }
        Commands::Browse(command) => {
            let language = match Configurator::load(store) {
                Ok(configurator) => configurator.language(),
                Err(e) => {
                    tracing::warn!("Could not load preferences, using defaults: {}", e);
                    Language::default()
                }
            };

            let communicator = build_communicator(cli.api_url, cli.timeout_secs)?;
            browse(command, &communicator, language).await
        }
    }
}

async fn browse(
    command: BrowseCommand,
    api: &impl RateMatchApi,
    language: Language,
) -> anyhow::Result<()> {
    match command {
        BrowseCommand::Events { page } => show_events(api, page).await,
        BrowseCommand::Event { event_id } => show_event(api, event_id, language).await,
        BrowseCommand::Match { match_id, lang } => {
            show_match(api, match_id, lang.unwrap_or(language)).await
        }
        BrowseCommand::Ratings { scope, page, lang } => {
            show_ratings(api, scope, page, lang.unwrap_or(language)).await
        }
        BrowseCommand::Rate {
            match_id,
            username,
            score,
            opinion,
            lang,
        } => {
            let mut rating = NewRating::new(match_id, lang.unwrap_or(language), username, score);
            if let Some(opinion) = opinion {
                rating = rating.with_opinion(opinion);
            }
            submit_rating(api, &rating).await
        }
    }
}

fn build_communicator(
    api_url: Option<String>,
    timeout_secs: Option<u64>,
) -> anyhow::Result<Communicator> {
    // No timeout unless asked for: a slow server keeps the command waiting.
    let config = ClientConfig::from_lookup(|key| match key {
        API_URL_VAR if api_url.is_some() => api_url.clone(),
        TIMEOUT_VAR if timeout_secs.is_some() => timeout_secs.map(|secs| secs.to_string()),
        _ => std::env::var(key).ok(),
    })
    .with_context(|| format!("Use --api-url or set {}", API_URL_VAR))?;

    tracing::debug!("Using API at {}", config.base_url());
    Communicator::new(config).context("Failed to build HTTP client")
}

fn handle_config(
    action: &ConfigAction,
    configurator: &mut Configurator<FileStore>,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {}
        ConfigAction::Theme { value } => configurator.set_theme(value.clone())?,
        ConfigAction::Language { code } => configurator.set_language(*code)?,
    }

    tracing::info!("Theme: {}", configurator.theme());
    tracing::info!("Language: {}", configurator.language());
    tracing::info!("Stored in: {}", configurator.store().path().display());

    Ok(())
}

async fn show_events(api: &impl RateMatchApi, page: u32) -> anyhow::Result<()> {
    let events = api.get_event_page(page).await?;

    tracing::info!("Events (page {}/{}):", events.page, events.page_total);
    if events.is_empty() {
        tracing::info!("  (none)");
    }
    for event in events.iter() {
        tracing::info!(
            "  #{} {} ({}, {})",
            event.id,
            event.name,
            event.promotion,
            event.date
        );
    }

    Ok(())
}

async fn show_event(
    api: &impl RateMatchApi,
    event_id: i32,
    language: Language,
) -> anyhow::Result<()> {
    let event = api.get_event_informations(event_id).await?;
    tracing::info!("{} - {} ({})", event.name, event.promotion, event.date);
    tracing::info!(
        "Average score: {}",
        format_average(api.get_average_score_for_event(event_id).await)
    );

    let card = api.get_event_card(event_id).await?;
    tracing::info!("Card ({} matches):", card.len());
    for bout in &card {
        tracing::info!("  #{} {}", bout.id, bout.workers);
    }

    let ratings = api.get_event_ratings(event_id, 1, language).await?;
    print_ratings(&ratings);

    Ok(())
}

async fn show_match(
    api: &impl RateMatchApi,
    match_id: i32,
    language: Language,
) -> anyhow::Result<()> {
    let bout = api.get_match_informations(match_id).await?;
    tracing::info!("Match #{} (event #{}): {}", bout.id, bout.event_id, bout.workers);

    match api.get_match_localized_description(match_id, language).await {
        Ok(description) => tracing::info!("{}", description.description),
        Err(e) if e.is_not_found() => tracing::info!("No description in {}", language),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(
        "Average score: {}",
        format_average(api.get_average_score_for_match(match_id).await)
    );

    Ok(())
}

async fn show_ratings(
    api: &impl RateMatchApi,
    scope: RatingScope,
    page: u32,
    language: Language,
) -> anyhow::Result<()> {
    let ratings = match (scope.event, scope.match_id) {
        (Some(event_id), _) => api.get_event_ratings(event_id, page, language).await?,
        (None, Some(match_id)) => api.get_match_ratings(match_id, page, language).await?,
        (None, None) => api.get_global_ratings(page, language).await?,
    };

    print_ratings(&ratings);
    Ok(())
}

async fn submit_rating(api: &impl RateMatchApi, rating: &NewRating) -> anyhow::Result<()> {
    if !api.add_match_rating(rating).await {
        bail!("The server did not accept the rating for match #{}", rating.match_id);
    }

    tracing::info!("✓ Rating for match #{} submitted", rating.match_id);
    Ok(())
}

fn print_ratings(ratings: &Page<Rating>) {
    tracing::info!("Ratings (page {}/{}):", ratings.page, ratings.page_total);
    if ratings.is_empty() {
        tracing::info!("  No rating for now.");
    }
    for rating in ratings.iter() {
        tracing::info!(
            "  {} by {} on {} (match #{})",
            rating.score,
            rating.username,
            rating.publication_date,
            rating.match_id
        );
        if let Some(opinion) = &rating.opinion {
            tracing::info!("    {}", opinion);
        }
    }
}

fn format_average(average: Decimal) -> String {
    if average == NO_AVERAGE {
        "no rating yet".to_string()
    } else {
        average.round_dp(2).to_string()
    }
}
