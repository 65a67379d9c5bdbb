//! Dead man's switch example
//!
//! Arms the switch so every open order is cancelled if the program stops
//! refreshing it within 60 seconds.
//!
//! To run this example:
//! cargo run --example cancel_all_orders

use btse_rust_sdk::{Agent, Config};
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let agent = Agent::new(Config::from_file("options.json")?)?;

    for _ in 0..3 {
        match agent.cancel_all_after(Some(60_000)).await {
            Ok(result) => info!("✅ Dead man's switch refreshed: {}", result),
            Err(e) => error!("❌ Failed to refresh dead man's switch: {}", e),
        }
        tokio::time::sleep(Duration::from_secs(30)).await;
    }

    // Disarm
    agent.cancel_all_after(Some(0)).await?;
    info!("🛑 Dead man's switch disarmed");

    Ok(())
}
