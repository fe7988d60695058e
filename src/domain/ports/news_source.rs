use crate::domain::entities::headline::NewsBatch;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Anything that can return recent headlines for a search term.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Fetch at most `limit` headlines for `query`, newest first.
    async fn fetch(&self, query: &str, limit: usize) -> Result<NewsBatch, DomainError>;
}
