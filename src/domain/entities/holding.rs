use serde::{Deserialize, Serialize};

/// One position as reported by the trading backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub avg_price: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
}

impl Holding {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            quantity: 0.0,
            avg_price: None,
            current_price: None,
        }
    }

    /// News search term for the ticker: Indian exchange suffixes are dropped.
    pub fn company_query(&self) -> String {
        company_query(&self.ticker)
    }
}

pub fn company_query(ticker: &str) -> String {
    ticker.replace(".NS", "").replace(".BO", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_query_strips_exchange_suffix() {
        assert_eq!(company_query("RELIANCE.NS"), "RELIANCE");
        assert_eq!(company_query("TCS.BO"), "TCS");
        assert_eq!(company_query("AAPL"), "AAPL");
    }
}
