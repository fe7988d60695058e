use serde::{Deserialize, Serialize};
use std::fmt;

/// Display classification of a single compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBand {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentBand {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.5 {
            SentimentBand::VeryPositive
        } else if compound >= 0.05 {
            SentimentBand::Positive
        } else if compound <= -0.5 {
            SentimentBand::VeryNegative
        } else if compound <= -0.05 {
            SentimentBand::Negative
        } else {
            SentimentBand::Neutral
        }
    }
}

impl fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentBand::VeryPositive => write!(f, "VERY POSITIVE"),
            SentimentBand::Positive => write!(f, "POSITIVE"),
            SentimentBand::Neutral => write!(f, "NEUTRAL"),
            SentimentBand::Negative => write!(f, "NEGATIVE"),
            SentimentBand::VeryNegative => write!(f, "VERY NEGATIVE"),
        }
    }
}
