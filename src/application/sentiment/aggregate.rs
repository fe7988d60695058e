//! Reduce per-headline scores into one ticker-level view.

use crate::application::sentiment::scorer::score_text;
use crate::domain::entities::analysis::{ScoredHeadline, SentimentAnalysis};
use crate::domain::entities::headline::Headline;

/// Score every headline and summarise.
///
/// Classification uses `compound >= 0.05` (positive) and `<= -0.05`
/// (negative). An empty slice yields the zeroed analysis rather than a mean
/// over nothing.
pub fn analyze(headlines: &[Headline]) -> SentimentAnalysis {
    if headlines.is_empty() {
        return SentimentAnalysis::default();
    }

    let mut analysis = SentimentAnalysis {
        total_articles: headlines.len(),
        scores: Vec::with_capacity(headlines.len()),
        ..Default::default()
    };

    let mut sum = 0.0;
    for headline in headlines {
        let score = score_text(&headline.text);
        sum += score.compound;

        if score.is_positive() {
            analysis.positive_count += 1;
        } else if score.is_negative() {
            analysis.negative_count += 1;
        } else {
            analysis.neutral_count += 1;
        }

        analysis.scores.push(ScoredHeadline {
            headline: headline.clone(),
            score,
        });
    }

    analysis.overall_sentiment = sum / headlines.len() as f64;
    analysis
}

/// Same as [`analyze`] for callers holding parallel arrays. `links` and
/// `sources` are matched to `texts` by index; gaps take the defaults.
pub fn analyze_parallel(texts: &[String], links: &[String], sources: &[String]) -> SentimentAnalysis {
    analyze(&Headline::zip_parallel(texts, links, sources, &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(texts: &[&str]) -> Vec<Headline> {
        texts.iter().map(|t| Headline::new(*t)).collect()
    }

    #[test]
    fn test_empty_input_is_zeroed() {
        let a = analyze(&[]);
        assert_eq!(a.overall_sentiment, 0.0);
        assert_eq!(a.total_articles, 0);
        assert_eq!(a.positive_count + a.negative_count + a.neutral_count, 0);
        assert!(a.scores.is_empty());
    }

    #[test]
    fn test_counts_and_mean() {
        let a = analyze(&headlines(&[
            "Shares jump after strong quarter",
            "Regulator cuts outlook",
            "CEO speaks at conference",
            "Sales drop",
        ]));
        assert_eq!(a.total_articles, 4);
        assert_eq!(a.positive_count, 1);
        assert_eq!(a.negative_count, 1);
        assert_eq!(a.neutral_count, 2);
        // 0.6 + 0 + 0 - 0.3 over 4
        assert!((a.overall_sentiment - 0.075).abs() < 1e-9);
    }

    #[test]
    fn test_ranked_orders_by_compound() {
        let a = analyze(&headlines(&["drop", "nothing here", "gain gain", "gain"]));
        let order: Vec<&str> = a.ranked().iter().map(|s| s.headline.text.as_str()).collect();
        assert_eq!(order, vec!["gain gain", "gain", "nothing here", "drop"]);
        // Original order is untouched.
        assert_eq!(a.scores[0].headline.text, "drop");
    }

    #[test]
    fn test_parallel_defaults() {
        let a = analyze_parallel(&["gain".to_string()], &[], &[]);
        assert_eq!(a.scores[0].headline.source_url, "#");
        assert_eq!(a.scores[0].headline.source_name, "Unknown");
    }
}
