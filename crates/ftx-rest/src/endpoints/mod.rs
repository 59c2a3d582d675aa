//! API endpoint implementations

pub mod coins;
pub mod futures;
pub mod markets;

pub use coins::CoinEndpoints;
pub use futures::FutureEndpoints;
pub use markets::MarketEndpoints;
