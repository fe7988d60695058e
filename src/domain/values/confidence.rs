use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for any recommendation confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Clamps into `[0, MAX_CONFIDENCE]`. NaN collapses to zero.
    pub fn capped(value: f64) -> Self {
        if value.is_nan() {
            return Confidence(0.0);
        }
        Confidence(value.clamp(0.0, MAX_CONFIDENCE))
    }

    /// Adds `delta`, keeping the cap.
    pub fn boosted(self, delta: f64) -> Self {
        Self::capped(self.0 + delta)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence(0.6)
    }
}
