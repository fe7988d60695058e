//! Theme keywords present anywhere in a ticker's headlines.

use crate::domain::entities::analysis::KeywordSet;
use crate::domain::values::vocabulary::{THEME_NEGATIVE, THEME_POSITIVE};

/// Substring search over the lower-cased, space-joined headlines. Each
/// vocabulary word is reported at most once, in declaration order.
pub fn extract<S: AsRef<str>>(headlines: &[S]) -> KeywordSet {
    let all_text = headlines
        .iter()
        .map(|h| h.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let found = |vocab: &[&str]| -> Vec<String> {
        vocab
            .iter()
            .filter(|kw| all_text.contains(*kw))
            .map(|kw| kw.to_string())
            .collect()
    };

    KeywordSet {
        positive_keywords: found(&THEME_POSITIVE),
        negative_keywords: found(&THEME_NEGATIVE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matches_inflections() {
        let k = extract(&["Stock Surges", "Upgraded by analysts"]);
        assert_eq!(k.positive_keywords, vec!["surge", "up"]);
        assert!(k.negative_keywords.is_empty());
    }

    #[test]
    fn test_dedup_and_declaration_order() {
        let k = extract(&["record gain", "gain again", "another record"]);
        assert_eq!(k.positive_keywords, vec!["gain", "record"]);
    }

    #[test]
    fn test_scorer_only_words_are_not_themes() {
        let k = extract(&["bullish outperform upgrade"]);
        // "upgrade" still contains "up"
        assert_eq!(k.positive_keywords, vec!["up"]);
        let k = extract(&["bearish underperform"]);
        assert!(k.negative_keywords.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let k = extract::<&str>(&[]);
        assert!(k.is_empty());
    }
}
