pub mod analyze_news;
pub mod analyze_portfolio;
pub mod games;
pub mod sentiment;
