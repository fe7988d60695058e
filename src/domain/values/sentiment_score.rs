use serde::{Deserialize, Serialize};

/// Keyword-derived sentiment for one headline.
///
/// `positive` and `negative` are shares of matched keyword hits and are not
/// renormalised against `compound`. `neutral` is 1 only when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.compound >= 0.05
    }

    pub fn is_negative(&self) -> bool {
        self.compound <= -0.05
    }
}
