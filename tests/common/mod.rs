//! Shared test helpers.
#![allow(dead_code)]

use fingenius::config::Config;
use fingenius::domain::entities::headline::Headline;
use fingenius::domain::entities::holding::Holding;
use fingenius::infrastructure::feeds::fixed::FixedNewsSource;
use fingenius::infrastructure::portfolio::fixed::FixedPortfolio;
use fingenius::FinGenius;
use std::sync::Arc;
use std::time::Duration;

pub fn test_config() -> Config {
    Config {
        request_delay: Duration::ZERO,
        ..Config::default()
    }
}

pub fn setup(news: FixedNewsSource, holdings: Vec<Holding>) -> FinGenius {
    FinGenius::with_providers(
        Arc::new(news),
        Some(Arc::new(FixedPortfolio::new(holdings))),
        &test_config(),
    )
}

pub fn headlines(texts: &[&str]) -> Vec<Headline> {
    texts.iter().map(|t| Headline::new(*t)).collect()
}

/// `positive` one-hit positive headlines, `negative` one-hit negative ones,
/// the rest keyword-free, `total` overall.
pub fn mixed_batch(positive: usize, negative: usize, total: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(total);
    out.extend((0..positive).map(|i| format!("Shares gain in session {i}")));
    out.extend((0..negative).map(|i| format!("Shares fall in session {i}")));
    let neutral = total.saturating_sub(positive + negative);
    out.extend((0..neutral).map(|i| format!("Company holds meeting {i}")));
    out
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
