//! Compound-interest puzzles for the escape room.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Puzzle {
    pub principal: f64,
    pub rate: f64,
    pub years: u32,
    pub question: &'static str,
    pub hint: &'static str,
    pub steps: [&'static str; 4],
}

pub const PUZZLES: [Puzzle; 3] = [
    Puzzle {
        principal: 1000.0,
        rate: 0.05,
        years: 3,
        question: "If you invest $1,000 at 5% interest compounded annually for 3 years, what will be the final amount?",
        hint: "Use the formula: A = P(1 + r)^t where P=$1000, r=0.05, t=3",
        steps: [
            "A = $1000 × (1 + 0.05)³",
            "A = $1000 × (1.05)³",
            "A = $1000 × 1.157625",
            "A = $1157.63",
        ],
    },
    Puzzle {
        principal: 2000.0,
        rate: 0.06,
        years: 4,
        question: "You deposit $2,000 at 6% annual compound interest for 4 years. What's the final amount?",
        hint: "Use the formula: A = P(1 + r)^t where P=$2000, r=0.06, t=4",
        steps: [
            "A = $2000 × (1 + 0.06)⁴",
            "A = $2000 × (1.06)⁴",
            "A = $2000 × 1.26247696",
            "A = $2524.95",
        ],
    },
    Puzzle {
        principal: 5000.0,
        rate: 0.08,
        years: 5,
        question: "An investment of $5,000 grows at 8% compound interest annually for 5 years. Calculate the final value.",
        hint: "Use the formula: A = P(1 + r)^t where P=$5000, r=0.08, t=5",
        steps: [
            "A = $5000 × (1 + 0.08)⁵",
            "A = $5000 × (1.08)⁵",
            "A = $5000 × 1.469328",
            "A = $7346.64",
        ],
    },
];

impl Puzzle {
    /// `P(1 + r)^t`, rounded to cents.
    pub fn answer(&self) -> f64 {
        let raw = self.principal * (1.0 + self.rate).powi(self.years as i32);
        (raw * 100.0).round() / 100.0
    }

    /// Cent digits of the answer as shown on the vault lock, e.g. `115763`.
    pub fn lock_digits(&self) -> Vec<u8> {
        format!("{:.2}", self.answer())
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect()
    }

    /// Balance at the end of each year, starting with year 0.
    pub fn yearly_balances(&self) -> Vec<f64> {
        (0..=self.years)
            .map(|y| {
                let raw = self.principal * (1.0 + self.rate).powi(y as i32);
                (raw * 100.0).round() / 100.0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_match_published_values() {
        assert_eq!(PUZZLES[0].answer(), 1157.63);
        assert_eq!(PUZZLES[1].answer(), 2524.95);
        assert_eq!(PUZZLES[2].answer(), 7346.64);
    }

    #[test]
    fn test_lock_digits() {
        assert_eq!(PUZZLES[0].lock_digits(), vec![1, 1, 5, 7, 6, 3]);
    }

    #[test]
    fn test_yearly_breakdown() {
        let balances = PUZZLES[0].yearly_balances();
        assert_eq!(balances, vec![1000.0, 1050.0, 1102.5, 1157.63]);
    }
}
