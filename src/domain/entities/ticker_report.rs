use crate::domain::entities::analysis::{KeywordSet, RankedHeadline, SentimentAnalysis};
use crate::domain::entities::headline::NewsBatch;
use crate::domain::entities::holding::Holding;
use crate::domain::entities::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything produced for one ticker in one refresh cycle.
#[derive(Debug, Clone, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub company_name: String,
    pub holding: Option<Holding>,
    pub news: NewsBatch,
    pub analysis: SentimentAnalysis,
    /// Headlines most positive first, with their bands.
    pub ranked: Vec<RankedHeadline>,
    pub keywords: KeywordSet,
    pub recommendation: Recommendation,
    pub analyzed_at: DateTime<Utc>,
}
