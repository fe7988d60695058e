use std::time::Duration;

use crate::application::analyze_portfolio::DEFAULT_REQUEST_DELAY;
use crate::domain::error::DomainError;
use crate::infrastructure::portfolio::trade_api::Session;

pub const DEFAULT_NEWS_URL: &str = "http://localhost:5001";
pub const DEFAULT_NEWS_LIMIT: usize = 25;

#[derive(Debug, Clone)]
pub struct Config {
    pub news_url: String,
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub news_limit: usize,
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_url: DEFAULT_NEWS_URL.to_string(),
            api_url: None,
            token: None,
            news_limit: DEFAULT_NEWS_LIMIT,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            news_url: non_empty("FINGENIUS_NEWS_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_URL.to_string()),
            api_url: non_empty("FINGENIUS_API_URL"),
            token: non_empty("FINGENIUS_TOKEN"),
            news_limit: non_empty("FINGENIUS_NEWS_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_NEWS_LIMIT),
            request_delay: non_empty("FINGENIUS_REQUEST_DELAY_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REQUEST_DELAY),
        }
    }

    /// The signed-in session for the trading backend. Both the API URL and
    /// the token must be set.
    pub fn session(&self) -> Result<Session, DomainError> {
        let api_url = self
            .api_url
            .as_deref()
            .ok_or_else(|| DomainError::Config("FINGENIUS_API_URL is not set".into()))?;
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| DomainError::Unauthorized("FINGENIUS_TOKEN is not set".into()))?;
        Ok(Session::new(api_url, token))
    }
}
