//! Coin listing endpoint

use ftx_auth::HttpMethod;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::transport::Dispatcher;
use crate::types::{ApiResponse, Coin};

/// Coin endpoints
pub struct CoinEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> CoinEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List all coins
    ///
    /// GET /coins
    #[instrument(skip(self))]
    pub async fn list_coins(&self) -> RestResult<Vec<Coin>> {
        debug!("Fetching coins");

        let response: ApiResponse<Vec<Coin>> =
            self.dispatcher.request(HttpMethod::Get, "/coins", None).await?;

        response.into_result()
    }
}
