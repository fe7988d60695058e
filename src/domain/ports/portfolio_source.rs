use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Read-only view of the user's current positions.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn holdings(&self) -> Result<Vec<Holding>, DomainError>;
}
