//! One refresh cycle over the user's holdings.
//!
//! Tickers are processed strictly in order with a courtesy pause after each
//! request so the news proxy is never hit in parallel. A running cycle
//! cannot be cancelled.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::application::analyze_news::AnalyzeNewsUseCase;
use crate::domain::entities::ticker_report::TickerReport;
use crate::domain::error::DomainError;
use crate::domain::ports::portfolio_source::PortfolioSource;

/// Default pause between per-ticker news requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize)]
pub struct PortfolioNewsReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub tickers_scanned: usize,
    /// Tickers whose fetch failed or returned no headlines.
    pub skipped: Vec<String>,
    pub reports: Vec<TickerReport>,
}

pub struct AnalyzePortfolioUseCase {
    portfolio: Arc<dyn PortfolioSource>,
    news: Arc<AnalyzeNewsUseCase>,
    delay: Duration,
}

impl AnalyzePortfolioUseCase {
    pub fn new(
        portfolio: Arc<dyn PortfolioSource>,
        news: Arc<AnalyzeNewsUseCase>,
        delay: Duration,
    ) -> Self {
        Self {
            portfolio,
            news,
            delay,
        }
    }

    pub async fn execute(&self) -> Result<PortfolioNewsReport, DomainError> {
        let started_at = Utc::now();
        let holdings = self.portfolio.holdings().await?;
        if holdings.is_empty() {
            return Err(DomainError::EmptyPortfolio);
        }
        info!("analyzing news for {} holdings", holdings.len());

        let mut reports = Vec::new();
        let mut skipped = Vec::new();

        for holding in &holdings {
            info!(ticker = %holding.ticker, "analyzing");
            match self.news.execute_lenient(holding).await {
                Some(report) => reports.push(report),
                None => skipped.push(holding.ticker.clone()),
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "news analysis completed: {} analyzed, {} skipped",
            reports.len(),
            skipped.len()
        );

        Ok(PortfolioNewsReport {
            started_at,
            finished_at: Utc::now(),
            tickers_scanned: holdings.len(),
            skipped,
            reports,
        })
    }
}
