pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::analyze_news::AnalyzeNewsUseCase;
use crate::application::analyze_portfolio::{AnalyzePortfolioUseCase, PortfolioNewsReport};
use crate::application::sentiment;
use crate::config::Config;
use crate::domain::entities::analysis::{KeywordSet, SentimentAnalysis};
use crate::domain::entities::headline::Headline;
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::entities::ticker_report::TickerReport;
use crate::domain::error::DomainError;
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::portfolio_source::PortfolioSource;
use crate::domain::values::sentiment_score::SentimentScore;
use crate::infrastructure::feeds::news_proxy::NewsProxyFeed;
use crate::infrastructure::portfolio::trade_api::TradeApiPortfolio;
use std::sync::Arc;

pub struct FinGenius {
    news_uc: Arc<AnalyzeNewsUseCase>,
    portfolio_uc: Option<AnalyzePortfolioUseCase>,
}

impl FinGenius {
    /// Wire the HTTP adapters from `config`. The portfolio cycle is only
    /// available when a session (API URL and token) is configured.
    pub fn new(config: &Config) -> Self {
        let news: Arc<dyn NewsSource> = Arc::new(NewsProxyFeed::new(config.news_url.clone()));
        let portfolio: Option<Arc<dyn PortfolioSource>> = config
            .session()
            .ok()
            .map(|session| Arc::new(TradeApiPortfolio::new(session)) as Arc<dyn PortfolioSource>);
        Self::with_providers(news, portfolio, config)
    }

    pub fn with_providers(
        news: Arc<dyn NewsSource>,
        portfolio: Option<Arc<dyn PortfolioSource>>,
        config: &Config,
    ) -> Self {
        let news_uc = Arc::new(AnalyzeNewsUseCase::new(news, config.news_limit));
        let portfolio_uc = portfolio.map(|p| {
            AnalyzePortfolioUseCase::new(p, news_uc.clone(), config.request_delay)
        });
        Self {
            news_uc,
            portfolio_uc,
        }
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        sentiment::scorer::score_text(text)
    }

    pub fn analyze_headlines(
        &self,
        headlines: &[Headline],
    ) -> (SentimentAnalysis, KeywordSet, Recommendation) {
        sentiment::evaluate(headlines)
    }

    pub async fn analyze_ticker(&self, ticker: &str) -> Result<Option<TickerReport>, DomainError> {
        self.news_uc.execute(ticker).await
    }

    pub async fn analyze_portfolio(&self) -> Result<PortfolioNewsReport, DomainError> {
        match &self.portfolio_uc {
            Some(uc) => uc.execute().await,
            None => Err(DomainError::Unauthorized(
                "sign in first: set FINGENIUS_API_URL and FINGENIUS_TOKEN".into(),
            )),
        }
    }
}
