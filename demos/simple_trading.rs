//! Simple trading example
//!
//! This example demonstrates basic trading operations:
//! - Placing a limit sell order
//! - Listing open orders
//! - Canceling the order
//!
//! To run this example:
//! 1. Put your API key and secret in options.json
//! 2. Make sure you have sufficient balance
//! 3. Run: cargo run --example simple_trading

use btse_rust_sdk::{Agent, Config, ErrorKind};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("🚀 Starting BTSE simple trading example");

    let agent = Agent::new(Config::from_file("options.json")?)?;
    let symbol = "BTSE-USDT";

    info!("💰 === TRADING OPERATIONS ===");

    // Sell 1 BTSE at 5 USDT
    let order_id = match agent.limit_sell(symbol, 1.0, 5.0).await {
        Ok(result) => {
            info!("✅ SELL order placed: {}", result);
            result[0]["orderID"].as_str().map(str::to_string)
        }
        Err(e) if e.kind() == ErrorKind::Remote => {
            warn!("⚠️ Order rejected by exchange: {:?}", e.payload());
            None
        }
        Err(e) => {
            error!("❌ Failed to place SELL order: {}", e);
            return Err(e.into());
        }
    };

    match agent.open_orders(symbol, None, None).await {
        Ok(orders) => info!("✅ Open orders: {}", orders),
        Err(e) => error!("❌ Failed to get open orders: {}", e),
    }

    if let Some(order_id) = order_id {
        match agent.cancel_order(symbol, Some(&order_id), None).await {
            Ok(result) => info!("✅ Order {} cancelled: {}", order_id, result),
            Err(e) => error!("❌ Failed to cancel order: {}", e),
        }
    }

    Ok(())
}
