//! Endpoint tests against a local mock server
//!
//! Each test checks the path and query the client produced, then the decoded
//! result.

mod common;

use common::*;
use ftx_rest::{
    FundingRatesParams, HistoricalPricesParams, OrderBookParams, Side, TradesParams,
};
use rust_decimal_macros::dec;
use wiremock::MockServer;

#[tokio::test]
async fn test_list_coins() {
    let server = MockServer::start().await;
    mount_json(&server, "/coins", COINS).await;

    let coins = client_for(&server).list_coins().await.expect("list_coins failed");

    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].id, "BTC");
    assert_eq!(coins[0].collateral_weight, Some(dec!(0.975)));
    assert!(coins[0].can_withdraw);
    assert!(coins[1].fiat);
    assert!(!coins[1].can_deposit);
    assert_eq!(received_query(&server).await, None);
}

#[tokio::test]
async fn test_list_futures() {
    let server = MockServer::start().await;
    mount_json(&server, "/futures", FUTURES).await;

    let futures = client_for(&server).list_futures().await.expect("list_futures failed");

    assert_eq!(futures.len(), 1);
    assert!(futures[0].perpetual);
    assert_eq!(futures[0].expiry, None);
    assert_eq!(futures[0].basis(), Some(dec!(0.75)));
}

#[tokio::test]
async fn test_get_future() {
    let server = MockServer::start().await;
    mount_json(&server, "/futures/BTC-0329", FUTURE).await;

    let future = client_for(&server)
        .get_future("BTC-0329")
        .await
        .expect("get_future failed");

    assert_eq!(future.name, "BTC-0329");
    assert_eq!(future.future_type, "future");
    assert!(!future.perpetual);
    assert_eq!(future.mark, Some(dec!(3854.75)));
    assert_eq!(future.expiry.as_deref(), Some("2019-03-29T03:00:00+00:00"));
}

#[tokio::test]
async fn test_get_future_stats() {
    let server = MockServer::start().await;
    mount_json(&server, "/futures/BTC-PERP/stats", FUTURE_STATS).await;

    let stats = client_for(&server)
        .get_future_stats("BTC-PERP")
        .await
        .expect("get_future_stats failed");

    assert_eq!(stats.volume, dec!(1000.23));
    assert_eq!(stats.next_funding_rate, Some(dec!(0.00025)));
    assert_eq!(stats.open_interest, Some(dec!(21124.583)));
}

#[tokio::test]
async fn test_get_funding_rates_without_window() {
    let server = MockServer::start().await;
    mount_json(&server, "/funding_rates", FUNDING_RATES).await;

    let rates = client_for(&server)
        .get_funding_rates(&FundingRatesParams::new())
        .await
        .expect("get_funding_rates failed");

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].future, "BTC-PERP");
    assert_eq!(rates[1].rate, dec!(-0.0005));
    assert_eq!(received_query(&server).await, None);
}

#[tokio::test]
async fn test_get_funding_rates_with_window() {
    let server = MockServer::start().await;
    mount_json(&server, "/funding_rates", FUNDING_RATES).await;

    let params = FundingRatesParams::new()
        .with_start_time(1_559_881_511)
        .with_end_time(1_559_891_511);
    client_for(&server)
        .get_funding_rates(&params)
        .await
        .expect("get_funding_rates failed");

    assert_eq!(
        received_query(&server).await.as_deref(),
        Some("start_time=1559881511&end_time=1559891511")
    );
}

#[tokio::test]
async fn test_get_historical_prices_defaults() {
    let server = MockServer::start().await;
    mount_json(&server, "/futures/BTC-PERP/mark_candles", MARK_CANDLES).await;

    let candles = client_for(&server)
        .get_historical_prices(&HistoricalPricesParams::new("BTC-PERP"))
        .await
        .expect("get_historical_prices failed");

    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].close, dec!(11055.25));
    assert_eq!(candles[0].volume, None);
    assert_eq!(
        received_query(&server).await.as_deref(),
        Some("resolution=300&limit=35")
    );
}

#[tokio::test]
async fn test_list_markets() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets", MARKETS).await;

    let markets = client_for(&server).list_markets().await.expect("list_markets failed");

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].underlying.as_deref(), Some("BTC"));
    assert_eq!(markets[1].base_currency.as_deref(), Some("BTC"));
    assert_eq!(markets[1].mid_price(), Some(dec!(9000.25)));
}

#[tokio::test]
async fn test_get_market() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets/BTC/USD", MARKET).await;

    let market = client_for(&server)
        .get_market("BTC/USD")
        .await
        .expect("get_market failed");

    assert_eq!(market.name, "BTC/USD");
    assert_eq!(market.market_type, "spot");
    assert_eq!(market.price_increment, dec!(0.5));
}

#[tokio::test]
async fn test_get_order_book() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets/BTC/USD/orderbook", ORDERBOOK).await;

    let book = client_for(&server)
        .get_order_book(&OrderBookParams::new("BTC/USD"))
        .await
        .expect("get_order_book failed");

    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.best_bid().map(|l| l.price()), Some(dec!(4112.25)));
    assert_eq!(book.spread(), Some(dec!(2)));
    assert_eq!(received_query(&server).await.as_deref(), Some("depth=20"));
}

#[tokio::test]
async fn test_get_order_book_max_depth() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets/BTC/USD/orderbook", ORDERBOOK).await;

    client_for(&server)
        .get_order_book(&OrderBookParams::new("BTC/USD").with_depth(100))
        .await
        .expect("depth 100 should be accepted");

    assert_eq!(received_query(&server).await.as_deref(), Some("depth=100"));
}

#[tokio::test]
async fn test_get_order_book_rejects_shallow_depth() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .get_order_book(&OrderBookParams::new("BTC/USD").with_depth(10))
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    let requests = server.received_requests().await.expect("request recording enabled");
    assert!(requests.is_empty(), "no request should reach the server");
}

#[tokio::test]
async fn test_get_trades_default_limit() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets/BTC/USD/trades", TRADES).await;

    let trades = client_for(&server)
        .get_trades(&TradesParams::new("BTC/USD"))
        .await
        .expect("get_trades failed");

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].side, Side::Buy);
    assert!(trades[1].liquidation);
    assert_eq!(trades[1].size, dec!(0.5));
    assert_eq!(received_query(&server).await.as_deref(), Some("limit=20"));
}

#[tokio::test]
async fn test_get_trades_with_window() {
    let server = MockServer::start().await;
    mount_json(&server, "/markets/ETH-PERP/trades", TRADES).await;

    let params = TradesParams::new("ETH-PERP")
        .with_limit(100)
        .with_start_time(1_559_881_511)
        .with_end_time(1_559_891_511);
    client_for(&server)
        .get_trades(&params)
        .await
        .expect("get_trades failed");

    assert_eq!(
        received_query(&server).await.as_deref(),
        Some("limit=100&start_time=1559881511&end_time=1559891511")
    );
}
