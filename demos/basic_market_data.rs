//! Basic market data example
//!
//! This example demonstrates how to fetch public market information:
//! - Market summaries
//! - Index prices
//! - OHLCV candles
//! - Order book
//! - Recent trades
//!
//! No API key is needed. To run this example:
//! cargo run --example basic_market_data

use btse_rust_sdk::{resolutions, Agent, Config, TradesQuery};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("🚀 Starting BTSE basic market data example");

    let agent = Agent::new(Config::public())?;
    let symbol = "BTSE-USDT";

    info!("📊 === MARKET DATA ===");

    match agent.markets(Some(symbol)).await {
        Ok(summary) => info!("✅ Market summary: {}", summary),
        Err(e) => error!("❌ Failed to get market summary: {}", e),
    }

    match agent.price(Some(symbol)).await {
        Ok(price) => info!("✅ Price: {}", price),
        Err(e) => error!("❌ Failed to get price: {}", e),
    }

    match agent
        .ohlcv(symbol, Some(resolutions::ONE_DAY), None, None)
        .await
    {
        Ok(candles) => {
            let count = candles.as_array().map(|c| c.len()).unwrap_or(0);
            info!("✅ Daily candles: {}", count);
        }
        Err(e) => error!("❌ Failed to get candles: {}", e),
    }

    match agent.order_book(symbol, Some(5)).await {
        Ok(book) => info!("✅ Order book: {}", book),
        Err(e) => error!("❌ Failed to get order book: {}", e),
    }

    match agent.trades(&TradesQuery::symbol(symbol).count(10)).await {
        Ok(trades) => {
            for trade in trades.as_array().into_iter().flatten().take(3) {
                info!("  - {} at {} ({})", trade["size"], trade["price"], trade["side"]);
            }
        }
        Err(e) => error!("❌ Failed to get trades: {}", e),
    }

    Ok(())
}
