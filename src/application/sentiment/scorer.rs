//! Keyword sentiment for a single headline.

use crate::domain::values::sentiment_score::SentimentScore;
use crate::domain::values::vocabulary::{HIT_WEIGHT, SCORER_NEGATIVE, SCORER_POSITIVE};
use regex::Regex;
use std::sync::LazyLock;

// One alternation per list. Words are bounded on both sides, so two words
// can never match at the same offset and the hit count equals the sum of
// per-word counts. Boundaries are ASCII-only: accented letters and other
// non-ASCII characters separate words.
static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(&SCORER_POSITIVE));
static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(&SCORER_NEGATIVE));

fn word_list_regex(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)")).expect("keyword list compiles")
}

/// Whole-word hit counts `(positive, negative)` in `text`, case-insensitive.
/// Inflections do not count: "surges" is not a hit for "surge". Only ASCII
/// letters, digits and `_` are word characters, so "éup" contains "up".
pub fn keyword_hits(text: &str) -> (usize, usize) {
    let lower = text.to_lowercase();
    (
        POSITIVE_RE.find_iter(&lower).count(),
        NEGATIVE_RE.find_iter(&lower).count(),
    )
}

/// Score one headline.
///
/// `compound = clamp(0.3 * pos - 0.3 * neg, -1, 1)`. The proportions are
/// taken over the matched hits only; a headline with no hits is fully
/// neutral.
pub fn score_text(text: &str) -> SentimentScore {
    let (pos, neg) = keyword_hits(text);
    let total = pos + neg;
    if total == 0 {
        return SentimentScore::neutral();
    }

    let raw = HIT_WEIGHT * pos as f64 - HIT_WEIGHT * neg as f64;
    SentimentScore {
        compound: raw.clamp(-1.0, 1.0),
        positive: pos as f64 / total as f64,
        negative: neg as f64 / total as f64,
        neutral: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_neutral() {
        let s = score_text("Company announces quarterly dividend date");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_eq!(s.positive, 0.0);
        assert_eq!(s.negative, 0.0);
    }

    #[test]
    fn test_whole_word_only() {
        // "upgrade" is its own word, "up" inside it must not count.
        assert_eq!(keyword_hits("Analyst upgrade"), (1, 0));
        assert_eq!(keyword_hits("Shares upended by lowering guidance"), (0, 0));
        assert_eq!(keyword_hits("Stock surges"), (0, 0));
    }

    #[test]
    fn test_non_ascii_letters_are_boundaries() {
        assert_eq!(keyword_hits("éup"), (1, 0));
        assert_eq!(keyword_hits("Aktien fallen, Gewinnrückgang: drop"), (0, 1));
        assert_eq!(keyword_hits("déjà-vu rally"), (1, 0));
    }

    #[test]
    fn test_case_insensitive_and_repeated() {
        assert_eq!(keyword_hits("GAIN gain Gain"), (3, 0));
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(keyword_hits("Up, up and away; shares drop."), (2, 1));
    }

    #[test]
    fn test_compound_is_clamped() {
        let s = score_text("gain gain gain gain gain gain gain");
        assert_eq!(s.compound, 1.0);
        let s = score_text("crash crash crash crash crash");
        assert_eq!(s.compound, -1.0);
    }

    #[test]
    fn test_mixed_proportions() {
        let s = score_text("Profit rises despite layoff concern");
        // profit | layoff, concern ("rises" is not "rise")
        assert!((s.compound - (-0.3)).abs() < 1e-9);
        assert!((s.positive - 1.0 / 3.0).abs() < 1e-9);
        assert!((s.negative - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.neutral, 0.0);
    }
}
