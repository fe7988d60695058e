use super::FeedError;
use crate::domain::entities::headline::{Headline, NewsBatch};
use crate::domain::error::DomainError;
use crate::domain::ports::news_source::NewsSource;
use async_trait::async_trait;
use tracing::{info, warn};

/// Client for the FinGenius news proxy (`GET /api/news/{query}?limit=N`),
/// which wraps Google News RSS search.
pub struct NewsProxyFeed {
    base_url: String,
    client: reqwest::Client,
}

impl NewsProxyFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, query: &str, limit: usize) -> Result<reqwest::Url, FeedError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| FeedError::Config(format!("bad news proxy URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FeedError::Config(format!("news proxy URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "news", query]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ProxyResponse {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub news: Option<ProxyNews>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ProxyNews {
    #[serde(default)]
    pub headlines: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProxyResponse {
    /// Headlines in fetch order. An unsuccessful response is an empty batch.
    pub fn into_batch(self, query: &str) -> NewsBatch {
        let query = self.company_name.unwrap_or_else(|| query.to_string());
        match self.news {
            Some(news) if self.success => NewsBatch {
                headlines: Headline::zip_parallel(
                    &news.headlines,
                    &news.links,
                    &news.sources,
                    &news.dates,
                ),
                query,
            },
            Some(ProxyNews { error: Some(err), .. }) => {
                warn!(query = %query, "news proxy reported an error: {err}");
                NewsBatch::empty(query)
            }
            _ => NewsBatch::empty(query),
        }
    }
}

pub fn parse_response(body: &str, query: &str) -> Result<NewsBatch, FeedError> {
    let resp: ProxyResponse =
        serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(resp.into_batch(query))
}

/// Headlines from a saved document: either a news proxy response or a bare
/// JSON array of headline strings.
pub fn parse_headline_document(body: &str) -> Result<Vec<Headline>, DomainError> {
    if let Ok(texts) = serde_json::from_str::<Vec<String>>(body) {
        return Ok(texts.into_iter().map(Headline::new).collect());
    }
    serde_json::from_str::<ProxyResponse>(body)
        .map(|resp| resp.into_batch("").headlines)
        .map_err(|e| {
            DomainError::InvalidInput(format!(
                "expected a JSON array of headlines or a news proxy response: {e}"
            ))
        })
}

#[async_trait]
impl NewsSource for NewsProxyFeed {
    fn name(&self) -> &str {
        "news_proxy"
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<NewsBatch, DomainError> {
        let url = self.url_for(query, limit)?;
        info!("Fetching news from proxy: {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "news proxy returned {} for {query}",
                resp.status()
            ))
            .into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;
        let batch = parse_response(&body, query)?;
        info!("Found {} news articles for {query}", batch.headlines.len());
        Ok(batch)
    }
}
