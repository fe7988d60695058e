pub mod analysis;
pub mod headline;
pub mod holding;
pub mod recommendation;
pub mod ticker_report;
