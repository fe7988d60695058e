use crate::domain::values::action::Action;
use crate::domain::values::confidence::Confidence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub confidence: Confidence,
    pub reasoning: String,
    pub sentiment_score: f64,
    pub positive_articles: usize,
    pub negative_articles: usize,
    pub neutral_articles: usize,
    pub total_articles: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
}
