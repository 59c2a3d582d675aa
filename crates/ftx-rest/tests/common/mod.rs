//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes documented for the FTX REST API.

#![allow(dead_code)]

use ftx_rest::{ClientConfig, Credentials, FtxRestClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "LR0RQT6bKjrUNh38eCw9jYC89VDAbRkCogAc_XAm";
pub const API_SECRET: &str = "T4lPid48QtjNxjLUFOcUZghD7CUJ7sTVsfuvQZF2";

pub const COINS: &str = r#"{
    "success": true,
    "result": [
        {
            "id": "BTC",
            "name": "Bitcoin",
            "collateral": true,
            "collateralWeight": 0.975,
            "canDeposit": true,
            "canWithdraw": true,
            "hasTag": false,
            "fiat": false,
            "usdFungible": false,
            "isToken": false,
            "isEtf": false
        },
        {
            "id": "USD",
            "name": "US Dollar",
            "collateral": true,
            "collateralWeight": 1.0,
            "fiat": true,
            "usdFungible": true
        }
    ]
}"#;

pub const FUTURE: &str = r#"{
    "success": true,
    "result": {
        "ask": 4196.0,
        "bid": 4114.25,
        "change1h": 0.0,
        "change24h": 0.0,
        "description": "Bitcoin March 2019 Futures",
        "enabled": true,
        "expired": false,
        "expiry": "2019-03-29T03:00:00+00:00",
        "index": 3919.58841011,
        "last": 4196.0,
        "lowerBound": 3663.75,
        "mark": 3854.75,
        "name": "BTC-0329",
        "perpetual": false,
        "postOnly": false,
        "priceIncrement": 0.25,
        "sizeIncrement": 0.0001,
        "underlying": "BTC",
        "upperBound": 4112.2,
        "type": "future"
    }
}"#;

pub const FUTURES: &str = r#"{
    "success": true,
    "result": [
        {
            "ask": 9000.5,
            "bid": 9000.25,
            "description": "Bitcoin Perpetual Futures",
            "enabled": true,
            "expired": false,
            "expiry": null,
            "index": 8999.5,
            "last": 9000.5,
            "mark": 9000.25,
            "name": "BTC-PERP",
            "perpetual": true,
            "postOnly": false,
            "priceIncrement": 0.25,
            "sizeIncrement": 0.0001,
            "underlying": "BTC",
            "type": "perpetual"
        }
    ]
}"#;

pub const FUTURE_STATS: &str = r#"{
    "success": true,
    "result": {
        "volume": 1000.23,
        "nextFundingRate": 0.00025,
        "nextFundingTime": "2019-03-29T03:00:00+00:00",
        "expirationPrice": 3992.1,
        "predictedExpirationPrice": 3993.6,
        "strikePrice": 8182.35,
        "openInterest": 21124.583
    }
}"#;

pub const FUNDING_RATES: &str = r#"{
    "success": true,
    "result": [
        {"future": "BTC-PERP", "rate": 0.0025, "time": "2019-06-02T08:00:00+00:00"},
        {"future": "ETH-PERP", "rate": -0.0005, "time": "2019-06-02T08:00:00+00:00"}
    ]
}"#;

pub const MARK_CANDLES: &str = r#"{
    "success": true,
    "result": [
        {
            "close": 11055.25,
            "high": 11089.0,
            "low": 11043.5,
            "open": 11059.25,
            "startTime": "2019-06-24T17:15:00+00:00",
            "time": 1561396500000.0
        }
    ]
}"#;

pub const MARKETS: &str = r#"{
    "success": true,
    "result": [
        {
            "name": "BTC-0628",
            "baseCurrency": null,
            "quoteCurrency": null,
            "type": "future",
            "underlying": "BTC",
            "enabled": true,
            "ask": 3949.25,
            "bid": 3949.0,
            "last": 10579.52,
            "postOnly": false,
            "priceIncrement": 0.25,
            "sizeIncrement": 0.0001,
            "restricted": false
        },
        {
            "name": "BTC/USD",
            "baseCurrency": "BTC",
            "quoteCurrency": "USD",
            "type": "spot",
            "underlying": null,
            "enabled": true,
            "ask": 9000.5,
            "bid": 9000.0,
            "last": 9000.25,
            "postOnly": false,
            "priceIncrement": 0.5,
            "sizeIncrement": 0.0001,
            "restricted": false
        }
    ]
}"#;

pub const MARKET: &str = r#"{
    "success": true,
    "result": {
        "name": "BTC/USD",
        "baseCurrency": "BTC",
        "quoteCurrency": "USD",
        "type": "spot",
        "underlying": null,
        "enabled": true,
        "ask": 9000.5,
        "bid": 9000.0,
        "last": 9000.25,
        "postOnly": false,
        "priceIncrement": 0.5,
        "sizeIncrement": 0.0001,
        "restricted": false
    }
}"#;

pub const ORDERBOOK: &str = r#"{
    "success": true,
    "result": {
        "asks": [[4114.25, 6.263], [4115.0, 1.5]],
        "bids": [[4112.25, 49.29], [4112.0, 2.0]]
    }
}"#;

pub const TRADES: &str = r#"{
    "success": true,
    "result": [
        {
            "id": 3855995,
            "liquidation": false,
            "price": 3857.75,
            "side": "buy",
            "size": 0.111,
            "time": "2019-03-20T18:16:23.397991+00:00"
        },
        {
            "id": 3855996,
            "liquidation": true,
            "price": 3857.5,
            "side": "sell",
            "size": 0.5,
            "time": "2019-03-20T18:16:24.000000+00:00"
        }
    ]
}"#;

/// Unsigned client pointed at the mock server
pub fn client_for(server: &MockServer) -> FtxRestClient {
    FtxRestClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client init")
}

/// Signing client pointed at the mock server
pub fn signed_client_for(server: &MockServer, subaccount: Option<&str>) -> FtxRestClient {
    let mut creds = Credentials::new(API_KEY, API_SECRET).expect("credentials");
    if let Some(name) = subaccount {
        creds = creds.with_subaccount(name);
    }

    FtxRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(creds),
    )
    .expect("client init")
}

/// Mount a GET handler returning `body` with status 200
pub async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(server)
        .await;
}

/// Query string of the single request the server received
pub async fn received_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}
