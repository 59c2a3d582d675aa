//! Demo 1: Market Snapshot
//!
//! Showcases: Market listing, orderbook depth chart, recent trades
//!
//! Run: cargo run --bin market_snapshot -- BTC/USD

use colored::*;
use ftx_rest::{BookLevel, FtxRestClient, OrderBookParams, Side, TradesParams};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

const LEVELS_TO_SHOW: usize = 10;
const HALF_WIDTH: usize = 25;

fn bar_len(size: Decimal, max: Decimal) -> usize {
    if max.is_zero() {
        return 0;
    }
    ((size / max) * Decimal::from(HALF_WIDTH))
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(HALF_WIDTH)
}

fn draw_depth_chart(bids: &[BookLevel], asks: &[BookLevel]) {
    let max_vol = bids
        .iter()
        .chain(asks.iter())
        .take(LEVELS_TO_SHOW * 2)
        .map(|l| l.size())
        .max()
        .unwrap_or(dec!(1));

    for level in asks.iter().take(LEVELS_TO_SHOW).rev() {
        let len = bar_len(level.size(), max_vol);
        println!(
            "  {:>10.4} │{}{}│ ${:<10.2}",
            level.size(),
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).red(),
            level.price()
        );
    }

    println!("  {:>10} ├{}┤", "", "─".repeat(HALF_WIDTH));

    for level in bids.iter().take(LEVELS_TO_SHOW) {
        let len = bar_len(level.size(), max_vol);
        println!(
            "  {:>10.4} │{}{}│ ${:<10.2}",
            level.size(),
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).green(),
            level.price()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market_name = std::env::args().nth(1).unwrap_or_else(|| "BTC/USD".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {}", market_name).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = FtxRestClient::new()?;

    let market = client.get_market(&market_name).await?;
    println!(
        "  {} {}  last {}  bid {}  ask {}",
        "•".white(),
        market.market_type.white().bold(),
        fmt_price(market.last),
        fmt_price(market.bid),
        fmt_price(market.ask)
    );
    if let Some(mid) = market.mid_price() {
        println!("  {} mid {:.4}", "•".white(), mid);
    }
    println!();

    let book = client
        .get_order_book(&OrderBookParams::new(&market_name).with_depth(20))
        .await?;
    draw_depth_chart(&book.bids, &book.asks);

    if let (Some(spread), Some(mid)) = (book.spread(), book.mid_price()) {
        let bps = if mid.is_zero() { Decimal::ZERO } else { spread / mid * dec!(10000) };
        println!();
        println!("  spread {:.4} ({:.2} bps)", spread, bps);
    }
    println!();

    let trades = client.get_trades(&TradesParams::new(&market_name)).await?;
    println!("  {}", "RECENT TRADES".white().bold());
    println!("  {}", "─".repeat(54));
    for trade in trades.iter().take(LEVELS_TO_SHOW) {
        let side = match trade.side {
            Side::Buy => "BUY ".green(),
            Side::Sell => "SELL".red(),
        };
        let flag = if trade.liquidation { " liq".yellow() } else { "".normal() };
        println!(
            "  {} {:>12.2} {:>12.4}  {}{}",
            side, trade.price, trade.size, trade.time, flag
        );
    }

    Ok(())
}

fn fmt_price(price: Option<Decimal>) -> String {
    price.map_or_else(|| "-".to_string(), |p| p.to_string())
}
