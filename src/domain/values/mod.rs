pub mod action;
pub mod budget_category;
pub mod budget_profile;
pub mod confidence;
pub mod puzzle;
pub mod sentiment_band;
pub mod sentiment_score;
pub mod vocabulary;
