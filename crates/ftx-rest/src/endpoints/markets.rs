//! Market data endpoints

use ftx_auth::HttpMethod;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::params::{require_name, OrderBookParams, TradesParams};
use crate::transport::Dispatcher;
use crate::types::{ApiResponse, Market, Orderbook, Trade};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List all markets (spot and futures)
    ///
    /// GET /markets
    #[instrument(skip(self))]
    pub async fn list_markets(&self) -> RestResult<Vec<Market>> {
        debug!("Fetching markets");

        let response: ApiResponse<Vec<Market>> =
            self.dispatcher.request(HttpMethod::Get, "/markets", None).await?;

        response.into_result()
    }

    /// Get a single market
    ///
    /// GET /markets/{name}
    ///
    /// # Arguments
    /// * `name` - Market name (e.g., "BTC/USD", "BTC-PERP")
    #[instrument(skip(self))]
    pub async fn get_market(&self, name: &str) -> RestResult<Market> {
        require_name("name", name)?;
        debug!("Fetching market {}", name);

        let path = format!("/markets/{}", name);
        let response: ApiResponse<Market> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }

    /// Get orderbook depth
    ///
    /// GET /markets/{market_name}/orderbook?depth={depth}
    ///
    /// Depth outside 20..=100 is rejected before any request is made.
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, params: &OrderBookParams) -> RestResult<Orderbook> {
        let path = params.path()?;
        debug!("Fetching orderbook for {}", params.market_name);

        let response: ApiResponse<Orderbook> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }

    /// Get recent trades
    ///
    /// GET /markets/{market_name}/trades?limit={limit}&start_time=..&end_time=..
    #[instrument(skip(self))]
    pub async fn get_trades(&self, params: &TradesParams) -> RestResult<Vec<Trade>> {
        let path = params.path()?;
        debug!("Fetching trades for {}", params.market_name);

        let response: ApiResponse<Vec<Trade>> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }
}
