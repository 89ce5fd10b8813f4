use std::time::Duration;

use crate::error::{ClientError, Result};

pub const API_URL_VAR: &str = "RATEMATCH_API_URL";
pub const TIMEOUT_VAR: &str = "RATEMATCH_TIMEOUT_SECS";

/// Where the API lives and how long a request may take.
///
/// `timeout` is `None` unless explicitly configured: requests then wait for
/// the server for as long as the connection stays open.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the configuration from any key/value source shaped like the
    /// process environment, keyed by [`API_URL_VAR`] and [`TIMEOUT_VAR`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ClientError::ConfigError(format!("Cannot load {} env variable", API_URL_VAR))
            })?;

        let config = Self::new(base_url);

        match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ClientError::ConfigError(format!(
                        "{} must be a number of seconds, got '{}'",
                        TIMEOUT_VAR, raw
                    ))
                })?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }
}
