//! Fixed word lists used by the scorer and the keyword extractor.
//!
//! The two pairs of lists are intentionally separate: the extractor's
//! vocabulary is a 14-word prefix of the scorer's and must stay that way
//! for recommendations to remain stable.

/// Whole-word matches that push a headline's compound score up.
pub const SCORER_POSITIVE: [&str; 18] = [
    "surge", "gain", "profit", "growth", "rise", "up", "high", "boost", "jump", "rally", "strong",
    "beat", "record", "success", "positive", "bullish", "upgrade", "outperform",
];

/// Whole-word matches that push a headline's compound score down.
pub const SCORER_NEGATIVE: [&str; 18] = [
    "fall", "drop", "loss", "decline", "down", "low", "cut", "crash", "plunge", "weak", "miss",
    "concern", "risk", "layoff", "negative", "bearish", "downgrade", "underperform",
];

/// Substring vocabulary reported as positive themes.
pub const THEME_POSITIVE: [&str; 14] = [
    "surge", "gain", "profit", "growth", "rise", "up", "high", "boost", "jump", "rally", "strong",
    "beat", "record", "success",
];

/// Substring vocabulary reported as negative themes.
pub const THEME_NEGATIVE: [&str; 14] = [
    "fall", "drop", "loss", "decline", "down", "low", "cut", "crash", "plunge", "weak", "miss",
    "concern", "risk", "layoff",
];

/// Per-hit weight applied to the compound score.
pub const HIT_WEIGHT: f64 = 0.3;
