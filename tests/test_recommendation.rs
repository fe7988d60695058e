mod common;

use common::{approx, mixed_batch};
use fingenius::application::sentiment::aggregate::analyze;
use fingenius::application::sentiment::keywords::extract;
use fingenius::application::sentiment::recommend::recommend;
use fingenius::application::sentiment::evaluate;
use fingenius::domain::entities::analysis::{KeywordSet, SentimentAnalysis};
use fingenius::domain::entities::headline::Headline;
use fingenius::domain::values::action::Action;

fn batch(texts: &[String]) -> Vec<Headline> {
    texts.iter().map(Headline::new).collect()
}

#[test]
fn test_balanced_news_holds() {
    let (analysis, _, rec) = evaluate(&batch(&mixed_batch(5, 5, 10)));
    assert!(approx(analysis.overall_sentiment, 0.0));
    assert_eq!(rec.action, Action::Hold);
    assert_eq!(rec.positive_ratio, 0.5);
    assert_eq!(rec.negative_ratio, 0.5);
    assert!(approx(rec.confidence.value(), 0.6));
    assert!(rec.reasoning.starts_with("Mixed or neutral sentiment ("));
}

#[test]
fn test_mostly_positive_buys_at_cap() {
    let (analysis, _, rec) = evaluate(&batch(&mixed_batch(8, 0, 10)));
    assert!(approx(analysis.overall_sentiment, 0.24));
    assert_eq!(rec.action, Action::Buy);
    assert_eq!(rec.positive_ratio, 0.8);
    assert!(approx(rec.confidence.value(), 0.95));
    assert_eq!(
        rec.reasoning,
        "Strong positive sentiment (0.240). 8/10 articles are positive."
    );
}

#[test]
fn test_mostly_negative_sells() {
    let (_, _, rec) = evaluate(&batch(&mixed_batch(0, 6, 10)));
    assert_eq!(rec.action, Action::Sell);
    assert_eq!(rec.negative_articles, 6);
    assert!(rec.reasoning.starts_with("Strong negative sentiment (-0.180)"));
}

#[test]
fn test_high_sentiment_but_low_ratio_holds() {
    // Two very bullish articles lift the mean without reaching 40% of articles.
    let mut texts = vec![
        "gain profit growth rise".to_string(),
        "rally strong beat record".to_string(),
    ];
    texts.extend(mixed_batch(0, 0, 8));
    let (analysis, _, rec) = evaluate(&batch(&texts));
    assert!(analysis.overall_sentiment >= 0.15);
    assert_eq!(rec.action, Action::Hold);
}

#[test]
fn test_empty_analysis_holds() {
    let rec = recommend(&SentimentAnalysis::default(), &KeywordSet::default());
    assert_eq!(rec.action, Action::Hold);
    assert_eq!(rec.positive_ratio, 0.0);
    assert_eq!(rec.negative_ratio, 0.0);
    assert_eq!(rec.total_articles, 0);
}

#[test]
fn test_recommend_is_pure() {
    let texts = mixed_batch(7, 1, 10);
    let analysis = analyze(&batch(&texts));
    let keywords = extract(&texts);
    let a = recommend(&analysis, &keywords);
    let b = recommend(&analysis, &keywords);
    assert_eq!(a, b);
    assert_eq!(a.confidence.value().to_bits(), b.confidence.value().to_bits());
}

#[test]
fn test_confidence_bounds_hold_across_mixes() {
    for positive in 0..=10 {
        for negative in 0..=(10 - positive) {
            let texts = mixed_batch(positive, negative, 10);
            let (_, _, rec) = evaluate(&batch(&texts));
            let c = rec.confidence.value();
            assert!((0.0..=0.95).contains(&c), "{positive}/{negative}: {c}");
        }
    }
}
