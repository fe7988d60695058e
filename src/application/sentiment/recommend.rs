//! BUY/SELL/HOLD from an analysis and its theme keywords.

use crate::domain::entities::analysis::{KeywordSet, SentimentAnalysis};
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::values::action::Action;
use crate::domain::values::confidence::Confidence;

pub const BUY_THRESHOLD: f64 = 0.15;
pub const SELL_THRESHOLD: f64 = -0.15;
/// Share of positive (or negative) articles required for BUY (or SELL).
pub const RATIO_THRESHOLD: f64 = 0.4;
pub const HOLD_CONFIDENCE: f64 = 0.6;
/// Keyword lead needed before a BUY/SELL gets the extra boost.
pub const KEYWORD_MARGIN: usize = 3;
pub const KEYWORD_BOOST: f64 = 0.1;

/// Pure function of its inputs. Rules are checked in order: BUY, SELL, HOLD.
///
/// With zero articles both ratios are 0, so the result is always HOLD.
pub fn recommend(analysis: &SentimentAnalysis, keywords: &KeywordSet) -> Recommendation {
    let overall = analysis.overall_sentiment;
    let total = analysis.total_articles;
    let (positive_ratio, negative_ratio) = if total > 0 {
        (
            analysis.positive_count as f64 / total as f64,
            analysis.negative_count as f64 / total as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let (action, mut confidence, reasoning) =
        if overall >= BUY_THRESHOLD && positive_ratio > RATIO_THRESHOLD {
            (
                Action::Buy,
                Confidence::capped(0.5 + overall * 2.0 + positive_ratio * 0.3),
                format!(
                    "Strong positive sentiment ({overall:.3}). {}/{total} articles are positive.",
                    analysis.positive_count
                ),
            )
        } else if overall <= SELL_THRESHOLD && negative_ratio > RATIO_THRESHOLD {
            (
                Action::Sell,
                Confidence::capped(0.5 + overall.abs() * 2.0 + negative_ratio * 0.3),
                format!(
                    "Strong negative sentiment ({overall:.3}). {}/{total} articles are negative.",
                    analysis.negative_count
                ),
            )
        } else {
            (
                Action::Hold,
                Confidence::capped(HOLD_CONFIDENCE),
                format!("Mixed or neutral sentiment ({overall:.3}). Market sentiment unclear."),
            )
        };

    let pos_kw = keywords.positive_keywords.len();
    let neg_kw = keywords.negative_keywords.len();
    let keywords_agree = match action {
        Action::Buy => pos_kw > neg_kw + KEYWORD_MARGIN,
        Action::Sell => neg_kw > pos_kw + KEYWORD_MARGIN,
        Action::Hold => false,
    };
    if keywords_agree {
        confidence = confidence.boosted(KEYWORD_BOOST);
    }

    Recommendation {
        action,
        confidence,
        reasoning,
        sentiment_score: overall,
        positive_articles: analysis.positive_count,
        negative_articles: analysis.negative_count,
        neutral_articles: analysis.neutral_count,
        total_articles: total,
        positive_ratio,
        negative_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(overall: f64, pos: usize, neg: usize, neu: usize) -> SentimentAnalysis {
        SentimentAnalysis {
            overall_sentiment: overall,
            positive_count: pos,
            negative_count: neg,
            neutral_count: neu,
            scores: vec![],
            total_articles: pos + neg + neu,
        }
    }

    fn keywords(pos: usize, neg: usize) -> KeywordSet {
        KeywordSet {
            positive_keywords: (0..pos).map(|i| format!("p{i}")).collect(),
            negative_keywords: (0..neg).map(|i| format!("n{i}")).collect(),
        }
    }

    #[test]
    fn test_zero_articles_hold() {
        let r = recommend(&SentimentAnalysis::default(), &KeywordSet::default());
        assert_eq!(r.action, Action::Hold);
        assert_eq!(r.confidence.value(), 0.6);
        assert_eq!(r.positive_ratio, 0.0);
        assert_eq!(r.negative_ratio, 0.0);
    }

    #[test]
    fn test_buy_formula() {
        let r = recommend(&summary(0.15, 5, 0, 5), &keywords(0, 0));
        assert_eq!(r.action, Action::Buy);
        // 0.5 + 0.3 + 0.15
        assert!((r.confidence.value() - 0.95).abs() < 1e-9);
        let r = recommend(&summary(0.15, 1, 0, 1), &keywords(0, 0));
        assert_eq!(r.action, Action::Buy);
    }

    #[test]
    fn test_buy_needs_ratio_strictly_above_threshold() {
        // ratio exactly 0.4
        let r = recommend(&summary(0.2, 2, 0, 3), &keywords(0, 0));
        assert_eq!(r.action, Action::Hold);
    }

    #[test]
    fn test_sell_formula_and_reasoning() {
        let r = recommend(&summary(-0.15, 3, 5, 2), &keywords(0, 0));
        assert_eq!(r.action, Action::Sell);
        // 0.5 + 0.3 + 0.5 * 0.3
        assert!((r.confidence.value() - 0.95).abs() < 1e-9);
        assert_eq!(
            r.reasoning,
            "Strong negative sentiment (-0.150). 5/10 articles are negative."
        );
    }

    #[test]
    fn test_keyword_boost_only_for_matching_action() {
        let hold = recommend(&summary(0.1, 9, 0, 11), &keywords(8, 4));
        assert_eq!(hold.action, Action::Hold);
        assert_eq!(hold.confidence.value(), 0.6);

        // 0.5 + 0.3 + 0.45 * 0.3 = 0.935
        let buy = summary(0.15, 9, 0, 11);
        let plain = recommend(&buy, &keywords(4, 1));
        let boosted = recommend(&buy, &keywords(5, 1));
        assert_eq!(plain.action, Action::Buy);
        assert!((plain.confidence.value() - 0.935).abs() < 1e-9);
        assert_eq!(boosted.confidence.value(), 0.95);
    }

    #[test]
    fn test_sell_boost_uses_negative_dominance() {
        let sell = summary(-0.15, 0, 9, 11);
        let plain = recommend(&sell, &keywords(0, 3));
        let boosted = recommend(&sell, &keywords(0, 4));
        assert!(boosted.confidence.value() > plain.confidence.value());
    }

    #[test]
    fn test_hold_reasoning() {
        let r = recommend(&summary(0.0, 5, 5, 0), &keywords(0, 0));
        assert_eq!(
            r.reasoning,
            "Mixed or neutral sentiment (0.000). Market sentiment unclear."
        );
    }
}
