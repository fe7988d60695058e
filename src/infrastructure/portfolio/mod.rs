pub mod fixed;
pub mod trade_api;
