//! Types for FTX REST API responses

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RestError, RestResult};

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard FTX API response envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Result data (present if successful)
    pub result: Option<T>,
    /// Error message (present if unsuccessful)
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the result, returning an error if the exchange reported a failure
    pub fn into_result(self) -> RestResult<T> {
        if !self.success {
            return Err(RestError::RequestFailed(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        self.result
            .ok_or_else(|| RestError::failed("No result in response"))
    }
}

// ============================================================================
// Coins
// ============================================================================

/// Coin information
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// Coin symbol (e.g., "BTC")
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub collateral: bool,
    #[serde(default)]
    pub collateral_weight: Option<Decimal>,
    #[serde(default)]
    pub can_deposit: bool,
    #[serde(default)]
    pub can_withdraw: bool,
    #[serde(default)]
    pub has_tag: bool,
    #[serde(default)]
    pub fiat: bool,
    #[serde(default)]
    pub usd_fungible: bool,
    #[serde(default)]
    pub is_token: bool,
    #[serde(default)]
    pub is_etf: bool,
}

// ============================================================================
// Futures
// ============================================================================

/// Future contract information
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Future {
    /// Future name (e.g., "BTC-PERP")
    pub name: String,
    /// Underlying coin
    pub underlying: String,
    pub description: String,
    /// "future", "perpetual", "move" or "prediction"
    #[serde(rename = "type")]
    pub future_type: String,
    /// Expiry timestamp, absent for perpetuals
    pub expiry: Option<String>,
    pub perpetual: bool,
    pub expired: bool,
    pub enabled: bool,
    pub post_only: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    pub last: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub index: Option<Decimal>,
    pub mark: Option<Decimal>,
    #[serde(default)]
    pub imf_factor: Option<Decimal>,
    #[serde(default)]
    pub lower_bound: Option<Decimal>,
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    #[serde(default)]
    pub change1h: Option<Decimal>,
    #[serde(default)]
    pub change24h: Option<Decimal>,
    #[serde(default)]
    pub volume_usd24h: Option<Decimal>,
    #[serde(default)]
    pub open_interest: Option<Decimal>,
}

impl Future {
    /// Basis of the mark price over the index price
    pub fn basis(&self) -> Option<Decimal> {
        Some(self.mark? - self.index?)
    }
}

/// Future statistics
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureStats {
    pub volume: Decimal,
    /// Next funding rate, perpetuals only
    #[serde(default)]
    pub next_funding_rate: Option<Decimal>,
    #[serde(default)]
    pub next_funding_time: Option<String>,
    /// Settlement price, expired futures only
    #[serde(default)]
    pub expiration_price: Option<Decimal>,
    #[serde(default)]
    pub predicted_expiration_price: Option<Decimal>,
    #[serde(default)]
    pub strike_price: Option<Decimal>,
    #[serde(default)]
    pub open_interest: Option<Decimal>,
}

/// Funding rate entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundingRate {
    /// Future name
    pub future: String,
    /// Hourly funding rate
    pub rate: Decimal,
    /// ISO 8601 timestamp
    pub time: String,
}

/// Mark price candle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// ISO 8601 start of the candle
    pub start_time: String,
    /// Start of the candle in milliseconds since the epoch
    pub time: f64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(default)]
    pub volume: Option<Decimal>,
}

// ============================================================================
// Markets
// ============================================================================

/// Market information
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market name (e.g., "BTC/USD" or "BTC-PERP")
    pub name: String,
    /// "spot" or "future"
    #[serde(rename = "type")]
    pub market_type: String,
    /// Base currency, spot markets only
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Quote currency, spot markets only
    #[serde(default)]
    pub quote_currency: Option<String>,
    /// Underlying, future markets only
    #[serde(default)]
    pub underlying: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub post_only: bool,
    #[serde(default)]
    pub restricted: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    pub ask: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub last: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub change1h: Option<Decimal>,
    #[serde(default)]
    pub change24h: Option<Decimal>,
    #[serde(default)]
    pub quote_volume24h: Option<Decimal>,
    #[serde(default)]
    pub volume_usd24h: Option<Decimal>,
}

impl Market {
    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.bid? + self.ask?) / Decimal::TWO)
    }
}

/// A single order book level: `[price, size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel(pub Decimal, pub Decimal);

impl BookLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn size(&self) -> Decimal {
        self.1
    }
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Orderbook {
    /// Asks, best (lowest) first
    pub asks: Vec<BookLevel>,
    /// Bids, best (highest) first
    pub bids: Vec<BookLevel>,
}

impl Orderbook {
    pub fn best_bid(&self) -> Option<BookLevel> {
        self.bids.first().copied()
    }

    pub fn best_ask(&self) -> Option<BookLevel> {
        self.asks.first().copied()
    }

    /// Get the bid-ask spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price() - self.best_bid()?.price())
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()?.price() + self.best_bid()?.price()) / Decimal::TWO)
    }
}

/// Trade side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// Public trade
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    pub id: u64,
    /// Whether the trade was a liquidation
    #[serde(default)]
    pub liquidation: bool,
    pub price: Decimal,
    pub side: Side,
    pub size: Decimal,
    /// ISO 8601 timestamp
    pub time: String,
}
