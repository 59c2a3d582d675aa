//! Futures endpoints
//!
//! Contract listings, statistics, funding rates and mark price candles.

use ftx_auth::HttpMethod;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::params::{require_name, FundingRatesParams, HistoricalPricesParams};
use crate::transport::Dispatcher;
use crate::types::{ApiResponse, Candle, FundingRate, Future, FutureStats};

/// Futures endpoints
pub struct FutureEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> FutureEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List all futures
    ///
    /// GET /futures
    #[instrument(skip(self))]
    pub async fn list_futures(&self) -> RestResult<Vec<Future>> {
        debug!("Fetching futures");

        let response: ApiResponse<Vec<Future>> =
            self.dispatcher.request(HttpMethod::Get, "/futures", None).await?;

        response.into_result()
    }

    /// Get a single future
    ///
    /// GET /futures/{name}
    ///
    /// # Arguments
    /// * `name` - Future name (e.g., "BTC-PERP")
    #[instrument(skip(self))]
    pub async fn get_future(&self, name: &str) -> RestResult<Future> {
        require_name("name", name)?;
        debug!("Fetching future {}", name);

        let path = format!("/futures/{}", name);
        let response: ApiResponse<Future> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }

    /// Get statistics for a future
    ///
    /// GET /futures/{name}/stats
    #[instrument(skip(self))]
    pub async fn get_future_stats(&self, name: &str) -> RestResult<FutureStats> {
        require_name("name", name)?;
        debug!("Fetching stats for {}", name);

        let path = format!("/futures/{}/stats", name);
        let response: ApiResponse<FutureStats> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }

    /// Get funding rates, optionally bounded by a time window
    ///
    /// GET /funding_rates?start_time={start_time}&end_time={end_time}
    #[instrument(skip(self))]
    pub async fn get_funding_rates(
        &self,
        params: &FundingRatesParams,
    ) -> RestResult<Vec<FundingRate>> {
        let path = params.path()?;
        debug!("Fetching funding rates");

        let response: ApiResponse<Vec<FundingRate>> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }

    /// Get historical mark price candles
    ///
    /// GET /futures/{future_name}/mark_candles?resolution={resolution}&limit={limit}
    /// (plus `start_time`/`end_time` when set)
    #[instrument(skip(self))]
    pub async fn get_historical_prices(
        &self,
        params: &HistoricalPricesParams,
    ) -> RestResult<Vec<Candle>> {
        let path = params.path()?;
        debug!("Fetching mark candles for {}", params.future_name);

        let response: ApiResponse<Vec<Candle>> =
            self.dispatcher.request(HttpMethod::Get, &path, None).await?;

        response.into_result()
    }
}
