use crate::domain::entities::headline::{Headline, NewsBatch};
use crate::domain::error::DomainError;
use crate::domain::ports::news_source::NewsSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory news source keyed by query. Unknown queries return an empty
/// batch; queries registered with [`FixedNewsSource::failing`] error out.
/// Every call is recorded for inspection.
#[derive(Default)]
pub struct FixedNewsSource {
    batches: HashMap<String, Vec<Headline>>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FixedNewsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Into<String>>(mut self, query: &str, texts: impl IntoIterator<Item = S>) -> Self {
        self.batches.insert(
            query.to_string(),
            texts.into_iter().map(Headline::new).collect(),
        );
        self
    }

    pub fn failing(mut self, query: &str, message: &str) -> Self {
        self.failures.insert(query.to_string(), message.to_string());
        self
    }

    /// Queries fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NewsSource for FixedNewsSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<NewsBatch, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.to_string());
        }
        if let Some(msg) = self.failures.get(query) {
            return Err(DomainError::Network(msg.clone()));
        }
        let headlines = self
            .batches
            .get(query)
            .map(|h| h.iter().take(limit).cloned().collect())
            .unwrap_or_default();
        Ok(NewsBatch {
            query: query.to_string(),
            headlines,
        })
    }
}
