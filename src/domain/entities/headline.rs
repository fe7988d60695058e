use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str = "#";
pub const DEFAULT_SOURCE_NAME: &str = "Unknown";

/// One news article's title plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub text: String,
    pub source_url: String,
    pub source_name: String,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
}

impl Headline {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            published: None,
        }
    }

    /// Zip parallel arrays by index. Missing or empty links and sources fall
    /// back to the defaults; dates that are not RFC 2822 or RFC 3339 are dropped.
    pub fn zip_parallel(
        texts: &[String],
        links: &[String],
        sources: &[String],
        dates: &[String],
    ) -> Vec<Headline> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Headline {
                text: text.clone(),
                source_url: non_empty(links.get(i)).unwrap_or(DEFAULT_SOURCE_URL).to_string(),
                source_name: non_empty(sources.get(i))
                    .unwrap_or(DEFAULT_SOURCE_NAME)
                    .to_string(),
                published: dates.get(i).and_then(|d| parse_published(d)),
            })
            .collect()
    }
}

fn non_empty(s: Option<&String>) -> Option<&str> {
    s.map(String::as_str).filter(|s| !s.is_empty())
}

/// Feed dates arrive as RSS (RFC 2822) strings, occasionally as RFC 3339.
pub fn parse_published(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Headlines fetched for one ticker in one refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsBatch {
    pub query: String,
    pub headlines: Vec<Headline>,
}

impl NewsBatch {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            headlines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }
}
