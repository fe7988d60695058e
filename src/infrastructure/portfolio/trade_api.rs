use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use crate::domain::ports::portfolio_source::PortfolioSource;
use crate::infrastructure::feeds::FeedError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

/// Backend address plus the bearer token of a signed-in user.
#[derive(Debug, Clone)]
pub struct Session {
    pub api_url: String,
    pub token: String,
}

impl Session {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}

/// Reads holdings from the trading backend's `GET /trade/portfolio`.
pub struct TradeApiPortfolio {
    session: Session,
    client: reqwest::Client,
}

impl TradeApiPortfolio {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct PortfolioResponse {
    #[serde(default)]
    portfolio: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Default)]
struct PositionBody {
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    avg_price: Option<f64>,
    #[serde(default)]
    current_price: Option<f64>,
}

/// Holdings in the order the backend lists them. Entries with an empty
/// ticker are dropped; position fields that are missing or malformed are
/// left unset.
pub fn parse_portfolio(body: &str) -> Result<Vec<Holding>, FeedError> {
    let resp: PortfolioResponse =
        serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    Ok(resp
        .portfolio
        .into_iter()
        .filter(|(ticker, _)| !ticker.trim().is_empty())
        .map(|(ticker, value)| {
            let pos: PositionBody = serde_json::from_value(value).unwrap_or_default();
            Holding {
                ticker,
                quantity: pos.quantity.unwrap_or(0.0),
                avg_price: pos.avg_price,
                current_price: pos.current_price,
            }
        })
        .collect())
}

#[async_trait]
impl PortfolioSource for TradeApiPortfolio {
    async fn holdings(&self) -> Result<Vec<Holding>, DomainError> {
        let url = format!("{}/trade/portfolio", self.session.api_url);
        info!("Fetching portfolio from {url}");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.session.token)
            .header("ngrok-skip-browser-warning", "true")
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DomainError::Unauthorized(format!(
                "portfolio request rejected with {status}"
            )));
        }
        if !status.is_success() {
            return Err(FeedError::Network(format!("portfolio request failed: {status}")).into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;
        Ok(parse_portfolio(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_trims_trailing_slash() {
        let s = Session::new("https://api.example.com/", "tok");
        assert_eq!(s.api_url, "https://api.example.com");
    }

    #[test]
    fn test_parse_keeps_backend_order() {
        let body = r#"{"portfolio": {
            "TCS.NS": {"quantity": 4, "avg_price": 3500.0, "current_price": 3620.5},
            "AAPL": {"quantity": 2},
            "": {"quantity": 1}
        }}"#;
        let holdings = parse_portfolio(body).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].ticker, "TCS.NS");
        assert_eq!(holdings[0].quantity, 4.0);
        assert_eq!(holdings[0].current_price, Some(3620.5));
        assert_eq!(holdings[1].ticker, "AAPL");
        assert_eq!(holdings[1].avg_price, None);
    }

    #[test]
    fn test_parse_missing_portfolio_is_empty() {
        assert!(parse_portfolio("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_portfolio("not json").is_err());
    }
}
