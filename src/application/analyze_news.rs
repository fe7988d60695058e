use crate::application::sentiment;
use crate::domain::entities::headline::NewsBatch;
use crate::domain::entities::holding::{company_query, Holding};
use crate::domain::entities::ticker_report::TickerReport;
use crate::domain::error::DomainError;
use crate::domain::ports::news_source::NewsSource;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetch one ticker's headlines and run the sentiment engine over them.
pub struct AnalyzeNewsUseCase {
    news: Arc<dyn NewsSource>,
    limit: usize,
}

impl AnalyzeNewsUseCase {
    pub fn new(news: Arc<dyn NewsSource>, limit: usize) -> Self {
        Self { news, limit }
    }

    /// Errors from the news source are returned to the caller.
    /// `Ok(None)` means the source had nothing for this ticker.
    pub async fn execute(&self, ticker: &str) -> Result<Option<TickerReport>, DomainError> {
        let query = company_query(ticker);
        let batch = self.news.fetch(&query, self.limit).await?;
        Ok(Self::report(ticker, None, batch))
    }

    /// Variant used by the portfolio cycle: a failed fetch is logged and
    /// treated as an empty batch, with no retry.
    pub async fn execute_lenient(&self, holding: &Holding) -> Option<TickerReport> {
        let query = holding.company_query();
        let batch = match self.news.fetch(&query, self.limit).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(ticker = %holding.ticker, source = self.news.name(), "news fetch failed: {e}");
                NewsBatch::empty(query)
            }
        };
        Self::report(&holding.ticker, Some(holding.clone()), batch)
    }

    fn report(ticker: &str, holding: Option<Holding>, batch: NewsBatch) -> Option<TickerReport> {
        if batch.is_empty() {
            debug!(ticker, "no headlines, skipping");
            return None;
        }

        let (analysis, keywords, recommendation) = sentiment::evaluate(&batch.headlines);
        debug!(
            ticker,
            articles = analysis.total_articles,
            overall = analysis.overall_sentiment,
            action = %recommendation.action,
            confidence = %recommendation.confidence,
            "analyzed"
        );

        Some(TickerReport {
            ticker: ticker.to_string(),
            company_name: batch.query.clone(),
            holding,
            news: batch,
            ranked: analysis.ranked_headlines(),
            analysis,
            keywords,
            recommendation,
            analyzed_at: Utc::now(),
        })
    }
}
