//! Keyword sentiment engine: score headlines, summarise them, extract theme
//! words and turn the result into a BUY/SELL/HOLD call.

pub mod aggregate;
pub mod keywords;
pub mod recommend;
pub mod scorer;

use crate::domain::entities::analysis::{KeywordSet, SentimentAnalysis};
use crate::domain::entities::headline::Headline;
use crate::domain::entities::recommendation::Recommendation;

/// Run the whole engine over one ticker's headlines.
pub fn evaluate(headlines: &[Headline]) -> (SentimentAnalysis, KeywordSet, Recommendation) {
    let analysis = aggregate::analyze(headlines);
    let texts: Vec<&str> = headlines.iter().map(|h| h.text.as_str()).collect();
    let keywords = keywords::extract(&texts);
    let recommendation = recommend::recommend(&analysis, &keywords);
    (analysis, keywords, recommendation)
}
