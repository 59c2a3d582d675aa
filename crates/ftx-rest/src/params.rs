//! Endpoint parameter objects and their validation
//!
//! Each parameter struct carries documented defaults, builds its own request
//! path, and can be parsed from dynamic JSON input. Types are enforced by the
//! struct definitions; only presence and numeric-range checks remain at runtime.

use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RestError, RestResult};
use crate::query::{query_object, with_query};

/// Default candle resolution in seconds
pub const DEFAULT_RESOLUTION: u32 = 300;
/// Default number of candles
pub const DEFAULT_CANDLE_LIMIT: u32 = 35;
/// Default order book depth
pub const DEFAULT_DEPTH: u32 = 20;
/// Default number of trades
pub const DEFAULT_TRADE_LIMIT: u32 = 20;
/// Accepted range for order book depth
pub const DEPTH_RANGE: RangeInclusive<u32> = 20..=100;
/// Accepted range for the trade-list limit
pub const TRADE_LIMIT_RANGE: RangeInclusive<u32> = 20..=100;

/// Check that a dynamic parameter object was supplied and is a JSON object
pub fn assert_params(params: Option<&Value>) -> RestResult<&Map<String, Value>> {
    match params {
        None | Some(Value::Null) => Err(RestError::invalid("parameters are required")),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(RestError::invalid(format!(
            "parameters must be an object, got {}",
            json_type(other)
        ))),
    }
}

/// Fail unless `value` is a non-empty string usable as a path segment
///
/// Names are inserted into the request path as-is (`BTC/USD` stays two
/// segments), so anything that would end the path or be re-encoded on the
/// wire is rejected.
pub fn require_name(field: &str, value: &str) -> RestResult<()> {
    if value.trim().is_empty() {
        return Err(RestError::invalid(format!("{} is required", field)));
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '?' | '#') || c.is_whitespace() || c.is_control())
    {
        return Err(RestError::invalid(format!(
            "{} contains invalid character {:?}",
            field, c
        )));
    }
    Ok(())
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> RestResult<()> {
    if !range.contains(&value) {
        return Err(RestError::invalid(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )));
    }
    Ok(())
}

fn from_json<T: DeserializeOwned>(value: Value) -> RestResult<T> {
    assert_params(Some(&value))?;
    serde_json::from_value(value).map_err(|e| RestError::invalid(e.to_string()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

fn default_candle_limit() -> u32 {
    DEFAULT_CANDLE_LIMIT
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_trade_limit() -> u32 {
    DEFAULT_TRADE_LIMIT
}

// ============================================================================
// Funding rates
// ============================================================================

/// Parameters for `GET /funding_rates`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FundingRatesParams {
    /// Window start, seconds since the Unix epoch
    #[serde(default)]
    pub start_time: Option<u64>,
    /// Window end, seconds since the Unix epoch
    #[serde(default)]
    pub end_time: Option<u64>,
}

impl FundingRatesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Request path including the query string
    pub fn path(&self) -> RestResult<String> {
        let query = query_object([("start_time", self.start_time), ("end_time", self.end_time)]);
        with_query("/funding_rates", &query)
    }
}

impl TryFrom<Value> for FundingRatesParams {
    type Error = RestError;

    fn try_from(value: Value) -> RestResult<Self> {
        from_json(value)
    }
}

// ============================================================================
// Historical prices
// ============================================================================

/// Parameters for `GET /futures/{future_name}/mark_candles`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoricalPricesParams {
    /// Future name, e.g. `BTC-PERP`
    pub future_name: String,
    /// Candle width in seconds (default 300)
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// Number of candles (default 35)
    #[serde(default = "default_candle_limit")]
    pub limit: u32,
    #[serde(default)]
    pub start_time: Option<u64>,
    #[serde(default)]
    pub end_time: Option<u64>,
}

impl HistoricalPricesParams {
    pub fn new(future_name: impl Into<String>) -> Self {
        Self {
            future_name: future_name.into(),
            resolution: DEFAULT_RESOLUTION,
            limit: DEFAULT_CANDLE_LIMIT,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require_name("future_name", &self.future_name)
    }

    /// Request path including the query string
    pub fn path(&self) -> RestResult<String> {
        self.validate()?;

        let query = query_object([
            ("resolution", Some(u64::from(self.resolution))),
            ("limit", Some(u64::from(self.limit))),
            ("start_time", self.start_time),
            ("end_time", self.end_time),
        ]);
        with_query(&format!("/futures/{}/mark_candles", self.future_name), &query)
    }
}

impl TryFrom<Value> for HistoricalPricesParams {
    type Error = RestError;

    fn try_from(value: Value) -> RestResult<Self> {
        let params: Self = from_json(value)?;
        params.validate()?;
        Ok(params)
    }
}

// ============================================================================
// Order book
// ============================================================================

/// Parameters for `GET /markets/{market_name}/orderbook`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderBookParams {
    /// Market name, e.g. `BTC/USD`
    pub market_name: String,
    /// Levels per side, 20..=100 (default 20)
    #[serde(default = "default_depth")]
    pub depth: u32,
}

impl OrderBookParams {
    pub fn new(market_name: impl Into<String>) -> Self {
        Self {
            market_name: market_name.into(),
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require_name("market_name", &self.market_name)?;
        check_range("depth", self.depth, &DEPTH_RANGE)
    }

    /// Request path including the query string
    pub fn path(&self) -> RestResult<String> {
        self.validate()?;

        let query = query_object([("depth", Some(self.depth))]);
        with_query(&format!("/markets/{}/orderbook", self.market_name), &query)
    }
}

impl TryFrom<Value> for OrderBookParams {
    type Error = RestError;

    fn try_from(value: Value) -> RestResult<Self> {
        let params: Self = from_json(value)?;
        params.validate()?;
        Ok(params)
    }
}

// ============================================================================
// Trades
// ============================================================================

/// Parameters for `GET /markets/{market_name}/trades`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradesParams {
    /// Market name, e.g. `BTC/USD`
    pub market_name: String,
    /// Number of trades, 20..=100 (default 20)
    #[serde(default = "default_trade_limit")]
    pub limit: u32,
    #[serde(default)]
    pub start_time: Option<u64>,
    #[serde(default)]
    pub end_time: Option<u64>,
}

impl TradesParams {
    pub fn new(market_name: impl Into<String>) -> Self {
        Self {
            market_name: market_name.into(),
            limit: DEFAULT_TRADE_LIMIT,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require_name("market_name", &self.market_name)?;
        check_range("limit", self.limit, &TRADE_LIMIT_RANGE)
    }

    /// Request path including the query string
    pub fn path(&self) -> RestResult<String> {
        self.validate()?;

        let query = query_object([
            ("limit", Some(u64::from(self.limit))),
            ("start_time", self.start_time),
            ("end_time", self.end_time),
        ]);
        with_query(&format!("/markets/{}/trades", self.market_name), &query)
    }
}

impl TryFrom<Value> for TradesParams {
    type Error = RestError;

    fn try_from(value: Value) -> RestResult<Self> {
        let params: Self = from_json(value)?;
        params.validate()?;
        Ok(params)
    }
}
