//! Demo 2: Futures Funding Rate Monitor
//!
//! Showcases: Futures listing, funding rates, future stats, mark candles
//!
//! Run: cargo run --bin funding_rates

use colored::*;
use ftx_rest::{FtxRestClient, FundingRatesParams, HistoricalPricesParams};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

const PRODUCTS: [&str; 3] = ["BTC-PERP", "ETH-PERP", "SOL-PERP"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  FUTURES FUNDING RATE MONITOR".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = FtxRestClient::new()?;

    // Latest rate per future
    let mut latest: HashMap<String, Decimal> = HashMap::new();
    for rate in client.get_funding_rates(&FundingRatesParams::new()).await? {
        latest.entry(rate.future).or_insert(rate.rate);
    }

    println!(
        "  {:<12} {:>12} {:>14} {:>14} {:>12}",
        "PRODUCT".white().bold(),
        "MARK".white().bold(),
        "LAST RATE".white().bold(),
        "NEXT RATE".white().bold(),
        "ANNUAL".white().bold()
    );
    println!("  {}", "─".repeat(68));

    for product in PRODUCTS {
        let future = client.get_future(product).await?;
        let stats = client.get_future_stats(product).await?;

        let last = latest.get(product).copied().unwrap_or_default();
        // Hourly funding
        let annual = last * dec!(24) * dec!(365) * dec!(100);

        let rate_color = if last > Decimal::ZERO {
            format!("{:+.6}%", last * dec!(100)).green()
        } else if last < Decimal::ZERO {
            format!("{:+.6}%", last * dec!(100)).red()
        } else {
            format!("{:+.6}%", last * dec!(100)).white()
        };

        let next = stats
            .next_funding_rate
            .map_or_else(|| "-".to_string(), |r| format!("{:+.6}%", r * dec!(100)));

        println!(
            "  {:<12} {:>12} {:>14} {:>14} {:>11.2}%",
            product.cyan(),
            future.mark.map_or_else(|| "-".to_string(), |m| format!("{:.2}", m)),
            rate_color,
            next,
            annual
        );
    }

    println!();
    let hourly = HistoricalPricesParams::new(PRODUCTS[0])
        .with_resolution(3600)
        .with_limit(24);
    let candles = client.get_historical_prices(&hourly).await?;
    if let (Some(first), Some(last)) = (candles.first(), candles.last()) {
        let change = if first.open.is_zero() {
            Decimal::ZERO
        } else {
            (last.close - first.open) / first.open * dec!(100)
        };
        println!(
            "  {} mark over {} hourly candles: {:.2} → {:.2} ({:+.2}%)",
            PRODUCTS[0].cyan(),
            candles.len(),
            first.open,
            last.close,
            change
        );
    }

    println!();
    println!("  {} Positive rate = Longs pay shorts", "•".green());
    println!("  {} Negative rate = Shorts pay longs", "•".red());
    println!("  {} Funding is exchanged every hour", "•".white());

    Ok(())
}
