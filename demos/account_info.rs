//! Account information example
//!
//! Reads credentials from a JSON file:
//! `{ "key": "...", "secret": "...", "market": "spot", "version": "v3.2" }`
//!
//! To run this example:
//! cargo run --example account_info -- options.json

use btse_rust_sdk::{Agent, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "options.json".to_string());
    let config = Config::from_file(&path)?;

    let agent = Agent::new(config)?;
    info!("✅ BTSE Agent initialized from {}", path);

    info!("💼 === ACCOUNT ===");

    match agent.balance(None).await {
        Ok(balances) => {
            for balance in balances.as_array().into_iter().flatten() {
                info!(
                    "  - {}: total={}, available={}",
                    balance["currency"], balance["total"], balance["available"]
                );
            }
        }
        Err(e) => error!("❌ Failed to get balance: {}", e),
    }

    match agent.open_orders("BTSE-USDT", None, None).await {
        Ok(orders) => info!("✅ Open orders: {}", orders),
        Err(e) => error!("❌ Failed to get open orders: {}", e),
    }

    Ok(())
}
