pub mod feeds;
pub mod portfolio;
