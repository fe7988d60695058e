use crate::domain::entities::headline::Headline;
use crate::domain::values::sentiment_band::SentimentBand;
use crate::domain::values::sentiment_score::SentimentScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHeadline {
    pub headline: Headline,
    pub score: SentimentScore,
}

impl ScoredHeadline {
    pub fn band(&self) -> SentimentBand {
        SentimentBand::from_compound(self.score.compound)
    }
}

/// Sentiment across every headline fetched for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub overall_sentiment: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub scores: Vec<ScoredHeadline>,
    pub total_articles: usize,
}

impl SentimentAnalysis {
    /// Scored headlines, most positive first. Ties keep fetch order.
    pub fn ranked(&self) -> Vec<&ScoredHeadline> {
        let mut out: Vec<&ScoredHeadline> = self.scores.iter().collect();
        out.sort_by(|a, b| b.score.compound.total_cmp(&a.score.compound));
        out
    }

    /// The ranked list as shown to the user, each headline tagged with its band.
    pub fn ranked_headlines(&self) -> Vec<RankedHeadline> {
        self.ranked()
            .into_iter()
            .map(|s| RankedHeadline {
                text: s.headline.text.clone(),
                source_url: s.headline.source_url.clone(),
                source_name: s.headline.source_name.clone(),
                compound: s.score.compound,
                band: s.band(),
                label: s.band().to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHeadline {
    pub text: String,
    pub source_url: String,
    pub source_name: String,
    pub compound: f64,
    pub band: SentimentBand,
    pub label: String,
}

/// Theme words found anywhere in a ticker's headlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
}
