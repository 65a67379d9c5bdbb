//! # BTSE Rust SDK
//!
//! A Rust SDK for the BTSE exchange REST API.
//!
//! ## Features
//!
//! - **Market Data**: funding history, OHLCV candles, order book, market summaries, prices, trades
//! - **Trading API**: limit and market orders, open orders, cancellation, dead man's switch
//! - **Request Signing**: HMAC-SHA384 signed envelopes with millisecond nonces
//! - **Spot and Futures**: market segment and API version are plain configuration
//! - **Error Handling**: one tagged error type for configuration, remote and transport failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use btse_rust_sdk::{Agent, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // or Config::from_file("options.json")?
//!     let config = Config::new("your_api_key", "your_api_secret")?;
//!     let agent = Agent::new(config)?;
//!
//!     // Get market data
//!     let candles = agent.ohlcv("BTSE-USDT", Some(1440), None, None).await?;
//!     println!("Candles: {}", candles);
//!
//!     // Place an order
//!     let order = agent.limit_sell("BTSE-USDT", 1.0, 5.0).await?;
//!     println!("Order placed: {}", order);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod agent;
pub mod api;
pub mod error;
pub mod signer;
pub mod types;

// Re-exports for convenience
pub use agent::Agent;
pub use api::ApiClient;
pub use error::{BtseError, ErrorKind, Result};
pub use signer::{hmac_sha384_hex, BtseSigner, Config, Credentials, SignedEnvelope};
pub use types::*;
