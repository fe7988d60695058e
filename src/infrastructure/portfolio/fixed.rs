use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use crate::domain::ports::portfolio_source::PortfolioSource;
use async_trait::async_trait;

/// Portfolio backed by a fixed list of holdings, e.g. tickers given on the
/// command line.
pub struct FixedPortfolio {
    holdings: Vec<Holding>,
}

impl FixedPortfolio {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn from_tickers<S: AsRef<str>>(tickers: &[S]) -> Self {
        Self::new(
            tickers
                .iter()
                .map(|t| t.as_ref().trim())
                .filter(|t| !t.is_empty())
                .map(Holding::new)
                .collect(),
        )
    }
}

#[async_trait]
impl PortfolioSource for FixedPortfolio {
    async fn holdings(&self) -> Result<Vec<Holding>, DomainError> {
        Ok(self.holdings.clone())
    }
}
