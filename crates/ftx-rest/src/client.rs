//! Main REST client implementation

use ftx_auth::{Credentials, HttpMethod};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

use crate::endpoints::{CoinEndpoints, FutureEndpoints, MarketEndpoints};
use crate::error::{RestError, RestResult};
use crate::params::{FundingRatesParams, HistoricalPricesParams, OrderBookParams, TradesParams};
use crate::transport::Dispatcher;
use crate::types::{Candle, Coin, FundingRate, Future, FutureStats, Market, Orderbook, Trade};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://ftx.com/api";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// FTX REST API client
///
/// The client is immutable once built. Every request recomputes its own
/// timestamp and signature, so a single instance can be cloned and shared
/// across tasks freely.
///
/// # Example
///
/// ```no_run
/// use ftx_rest::{Credentials, FtxRestClient, OrderBookParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = FtxRestClient::new()?;
///     let book = client.get_order_book(&OrderBookParams::new("BTC/USD")).await?;
///
///     // Signed requests
///     let creds = Credentials::from_env()?;
///     let auth_client = FtxRestClient::with_credentials(creds)?;
///     let coins = auth_client.list_coins().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FtxRestClient {
    dispatcher: Dispatcher,
}

impl FtxRestClient {
    /// Create a new client without credentials
    ///
    /// Requests are sent unsigned.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client that signs every request
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("ftx-rest/0.1.0"))
            .build()
            .map_err(|e| RestError::failed(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            signed = config.credentials.is_some(),
            "Created FTX REST client"
        );

        Ok(Self {
            dispatcher: Dispatcher::new(http_client, config.base_url, config.credentials),
        })
    }

    /// Check if the client signs its requests
    pub fn has_credentials(&self) -> bool {
        self.dispatcher.credentials().is_some()
    }

    /// Base endpoint all paths are resolved against
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    /// Perform an arbitrary request against the API
    ///
    /// The response body is decoded as-is; callers that want the `result`
    /// field unwrapped can request `ApiResponse<T>` and call `into_result`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> RestResult<T> {
        self.dispatcher.request(method, path, body).await
    }

    // ========================================================================
    // Coins
    // ========================================================================

    /// Get coin endpoints
    pub fn coins(&self) -> CoinEndpoints<'_> {
        CoinEndpoints::new(&self.dispatcher)
    }

    /// List all coins
    pub async fn list_coins(&self) -> RestResult<Vec<Coin>> {
        self.coins().list_coins().await
    }

    // ========================================================================
    // Futures
    // ========================================================================

    /// Get futures endpoints
    pub fn futures(&self) -> FutureEndpoints<'_> {
        FutureEndpoints::new(&self.dispatcher)
    }

    /// List all futures
    pub async fn list_futures(&self) -> RestResult<Vec<Future>> {
        self.futures().list_futures().await
    }

    /// Get a single future by name
    pub async fn get_future(&self, name: &str) -> RestResult<Future> {
        self.futures().get_future(name).await
    }

    /// Get statistics for a future
    pub async fn get_future_stats(&self, name: &str) -> RestResult<FutureStats> {
        self.futures().get_future_stats(name).await
    }

    /// Get funding rates
    pub async fn get_funding_rates(
        &self,
        params: &FundingRatesParams,
    ) -> RestResult<Vec<FundingRate>> {
        self.futures().get_funding_rates(params).await
    }

    /// Get historical mark price candles
    pub async fn get_historical_prices(
        &self,
        params: &HistoricalPricesParams,
    ) -> RestResult<Vec<Candle>> {
        self.futures().get_historical_prices(params).await
    }

    // ========================================================================
    // Markets
    // ========================================================================

    /// Get market endpoints
    pub fn markets(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.dispatcher)
    }

    /// List all markets
    pub async fn list_markets(&self) -> RestResult<Vec<Market>> {
        self.markets().list_markets().await
    }

    /// Get a single market by name
    pub async fn get_market(&self, name: &str) -> RestResult<Market> {
        self.markets().get_market(name).await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `params` - Market name and depth (20-100)
    pub async fn get_order_book(&self, params: &OrderBookParams) -> RestResult<Orderbook> {
        self.markets().get_order_book(params).await
    }

    /// Get recent trades
    pub async fn get_trades(&self, params: &TradesParams) -> RestResult<Vec<Trade>> {
        self.markets().get_trades(params).await
    }
}

impl std::fmt::Debug for FtxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FtxRestClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base endpoint (default `https://ftx.com/api`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
