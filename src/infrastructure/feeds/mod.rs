pub mod fixed;
pub mod news_proxy;

use crate::domain::error::DomainError;

#[derive(Debug)]
pub enum FeedError {
    /// HTTP or network error
    Network(String),
    /// Response parsing error
    Parse(String),
    /// Configuration error (bad base URL, etc.)
    Config(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "Network error: {msg}"),
            FeedError::Parse(msg) => write!(f, "Parse error: {msg}"),
            FeedError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<FeedError> for DomainError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::Network(msg) => DomainError::Network(msg),
            FeedError::Parse(msg) => DomainError::Parse(msg),
            FeedError::Config(msg) => DomainError::Config(msg),
        }
    }
}
