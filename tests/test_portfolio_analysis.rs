mod common;

use common::{setup, test_config};
use fingenius::config::Config;
use fingenius::infrastructure::portfolio::fixed::FixedPortfolio;
use fingenius::domain::values::sentiment_band::SentimentBand;
use fingenius::domain::entities::holding::Holding;
use fingenius::domain::error::DomainError;
use fingenius::domain::values::action::Action;
use fingenius::infrastructure::feeds::fixed::FixedNewsSource;
use fingenius::FinGenius;
use std::sync::Arc;
use std::time::Duration;

fn holdings(tickers: &[&str]) -> Vec<Holding> {
    tickers.iter().map(|t| Holding::new(*t)).collect()
}

#[tokio::test]
async fn test_cycle_reports_in_portfolio_order() {
    let news = FixedNewsSource::new()
        .with("RELIANCE", ["Reliance profit beat", "Record growth at Reliance"])
        .with("TCS", ["TCS shares fall on weak guidance"]);
    let fg = setup(news, holdings(&["RELIANCE.NS", "TCS.BO"]));

    let report = fg.analyze_portfolio().await.unwrap();
    assert_eq!(report.tickers_scanned, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(report.reports.len(), 2);

    let first = &report.reports[0];
    assert_eq!(first.ticker, "RELIANCE.NS");
    assert_eq!(first.company_name, "RELIANCE");
    assert_eq!(first.analysis.total_articles, 2);
    assert_eq!(first.recommendation.action, Action::Buy);
    assert!(first.holding.is_some());

    let second = &report.reports[1];
    assert_eq!(second.ticker, "TCS.BO");
    assert_eq!(second.recommendation.action, Action::Sell);
    assert!(report.finished_at >= report.started_at);
}

#[tokio::test]
async fn test_failed_and_empty_tickers_are_skipped() {
    let news = FixedNewsSource::new()
        .with("INFY", ["Infosys shares rally"])
        .failing("WIPRO", "connection refused");
    let fg = setup(news, holdings(&["WIPRO.NS", "HDFC.NS", "INFY.NS"]));

    let report = fg.analyze_portfolio().await.unwrap();
    assert_eq!(report.tickers_scanned, 3);
    assert_eq!(report.skipped, vec!["WIPRO.NS", "HDFC.NS"]);
    assert_eq!(report.reports.len(), 1);
    assert_eq!(report.reports[0].ticker, "INFY.NS");
}

#[tokio::test]
async fn test_each_ticker_fetched_once_in_order() {
    let news = Arc::new(FixedNewsSource::new());
    let fg = FinGenius::with_providers(
        news.clone(),
        Some(Arc::new(
            fingenius::infrastructure::portfolio::fixed::FixedPortfolio::from_tickers(&[
                "AAPL", " ", "MSFT",
            ]),
        )),
        &test_config(),
    );
    fg.analyze_portfolio().await.unwrap();
    assert_eq!(news.calls(), vec!["AAPL", "MSFT"]);
}

#[tokio::test]
async fn test_empty_portfolio_is_an_error() {
    let fg = setup(FixedNewsSource::new(), Vec::new());
    let err = fg.analyze_portfolio().await.unwrap_err();
    assert!(matches!(err, DomainError::EmptyPortfolio));
    assert_eq!(err.to_string(), "No stocks found in your portfolio");
}

#[tokio::test]
async fn test_portfolio_requires_session() {
    let fg = FinGenius::with_providers(Arc::new(FixedNewsSource::new()), None, &test_config());
    assert!(matches!(
        fg.analyze_portfolio().await,
        Err(DomainError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn test_single_ticker_news_propagates_errors() {
    let news = FixedNewsSource::new()
        .with("AAPL", ["Apple beat estimates"])
        .failing("MSFT", "timeout");
    let fg = setup(news, Vec::new());

    let report = fg.analyze_ticker("AAPL").await.unwrap().unwrap();
    assert_eq!(report.recommendation.total_articles, 1);
    assert!(fg.analyze_ticker("GOOG").await.unwrap().is_none());
    assert!(matches!(fg.analyze_ticker("MSFT").await, Err(DomainError::Network(_))));
}

#[tokio::test]
async fn test_news_limit_is_passed_to_source() {
    let texts: Vec<String> = (0..40).map(|i| format!("Headline {i}")).collect();
    let news = FixedNewsSource::new().with("BULK", texts);
    let fg = setup(news, Vec::new());
    let report = fg.analyze_ticker("BULK").await.unwrap().unwrap();
    assert_eq!(report.analysis.total_articles, 25);
}

#[tokio::test(start_paused = true)]
async fn test_cycle_pauses_after_every_ticker() {
    let news = FixedNewsSource::new()
        .with("A", ["A profit"])
        .failing("B", "timeout");
    let config = Config {
        request_delay: Duration::from_millis(500),
        ..test_config()
    };
    let fg = FinGenius::with_providers(
        Arc::new(news),
        Some(Arc::new(FixedPortfolio::new(holdings(&["A", "B", "C"])))),
        &config,
    );

    let started = tokio::time::Instant::now();
    let report = fg.analyze_portfolio().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(report.reports.len(), 1);
    assert_eq!(report.skipped, vec!["B".to_string(), "C".to_string()]);
}

#[tokio::test]
async fn test_report_ranks_headlines_with_labels() {
    let news = FixedNewsSource::new().with(
        "INFY",
        ["Shares fall", "Company holds meeting", "Record profit growth"],
    );
    let fg = setup(news, Vec::new());

    let report = fg.analyze_ticker("INFY").await.unwrap().unwrap();
    let texts: Vec<&str> = report.ranked.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        ["Record profit growth", "Company holds meeting", "Shares fall"]
    );
    assert_eq!(report.ranked[0].band, SentimentBand::VeryPositive);
    assert_eq!(report.ranked[0].label, "VERY POSITIVE");
    assert_eq!(report.ranked[1].label, "NEUTRAL");
    assert_eq!(report.ranked[2].band, SentimentBand::Negative);
    assert_eq!(report.ranked[2].label, "NEGATIVE");
}
