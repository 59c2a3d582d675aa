//! REST API client for the FTX cryptocurrency exchange
//!
//! Thin, typed wrappers over FTX's read-only market data endpoints, built on a
//! generic signed request dispatcher.
//!
//! # Features
//!
//! - **Coins**: Coin listing
//! - **Futures**: Listings, statistics, funding rates, mark price candles
//! - **Markets**: Listings, orderbook, recent trades
//! - **Raw requests**: `FtxRestClient::request` for anything else
//!
//! # Authentication
//!
//! When credentials are configured every request carries `X-KEY`, `X-TS` and
//! `X-SIGN` headers (plus `X-SUBACCOUNT` when set), signed with HMAC-SHA256.
//! See the `ftx-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use ftx_rest::{FtxRestClient, HistoricalPricesParams, TradesParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FtxRestClient::new()?;
//!
//!     let trades = client.get_trades(&TradesParams::new("BTC/USD").with_limit(50)).await?;
//!     println!("{} trades", trades.len());
//!
//!     let candles = client
//!         .get_historical_prices(&HistoricalPricesParams::new("BTC-PERP"))
//!         .await?;
//!     println!("{} candles", candles.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`RestError`]:
//! - `InvalidArgument` for parameters rejected before any network call
//! - `RateLimited` for HTTP 429
//! - `RequestFailed` for everything else, with the underlying message
//!
//! Nothing is retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod query;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, FtxRestClient, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use ftx_auth::{Credentials, HttpMethod};
pub use params::{FundingRatesParams, HistoricalPricesParams, OrderBookParams, TradesParams};

// Re-export endpoint-specific types
pub use types::{
    ApiResponse, BookLevel, Candle, Coin, FundingRate, Future, FutureStats, Market, Orderbook,
    Side, Trade,
};
