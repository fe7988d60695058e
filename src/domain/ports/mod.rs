pub mod news_source;
pub mod portfolio_source;
