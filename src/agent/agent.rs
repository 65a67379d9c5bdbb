//! Main Agent for the BTSE SDK
//!
//! Provides one typed method per REST endpoint, on top of [`ApiClient`].

use crate::{
    api::ApiClient,
    error::Result,
    signer::Config,
    types::{
        api::{HttpMethod, Params},
        constants::{defaults, resources},
        market::TradesQuery,
        orders::{OrderRequest, OrderSide},
    },
};
use serde_json::Value;
use tracing::info;

/// Main Agent for BTSE operations
///
/// Every method maps to exactly one request against `{market}/api/{version}/{resource}`.
/// Market data methods use the public path, account methods the signed path.
#[derive(Debug, Clone)]
pub struct Agent {
    /// API client for REST operations
    api: ApiClient,
    /// Configuration
    config: Config,
}

impl Agent {
    /// Create a new Agent
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use btse_rust_sdk::{Agent, Config};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = Config::new("your_api_key", "your_api_secret")?;
    ///     let agent = Agent::new(config)?;
    ///     let price = agent.price(Some("BTSE-USDT")).await?;
    ///     println!("{}", price);
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;

        info!(
            "✅ BTSE Agent initialized for {}/{} ({})",
            config.market,
            config.version,
            if api.can_sign() {
                "authenticated"
            } else {
                "public only"
            }
        );

        Ok(Self { api, config })
    }

    /// Replace the configuration
    ///
    /// Requests already in flight keep the client they started with.
    pub fn configure(&mut self, config: Config) -> Result<()> {
        self.api = ApiClient::new(&config)?;
        self.config = config;
        Ok(())
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying API client, for endpoints without a dedicated method
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    async fn public(&self, resource: &str, params: Params) -> Result<Value> {
        self.api
            .get(&self.api.endpoint(resource), Some(&params))
            .await
    }

    async fn signed(
        &self,
        resource: &str,
        params: Option<Params>,
        method: HttpMethod,
    ) -> Result<Value> {
        self.api
            .signed_request(&self.api.endpoint(resource), params.as_ref(), method)
            .await
    }

    // === Public Market Data API ===

    /// Funding rate history, for every market when `symbol` is `None`
    pub async fn funding_history(&self, symbol: Option<&str>) -> Result<Value> {
        self.public(
            resources::FUNDING_HISTORY,
            Params::new().with_opt("symbol", symbol),
        )
        .await
    }

    /// OHLCV candles
    ///
    /// # Arguments
    ///
    /// * `symbol` - Market symbol (e.g., "BTSE-USDT")
    /// * `resolution` - Candle width in minutes, see [`crate::types::resolutions`] (default 30)
    /// * `start` - Start time in seconds
    /// * `end` - End time in seconds
    pub async fn ohlcv(
        &self,
        symbol: &str,
        resolution: Option<u32>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with(
                "resolution",
                resolution.unwrap_or(defaults::OHLCV_RESOLUTION),
            )
            .with_opt("start", start)
            .with_opt("end", end);
        self.public(resources::OHLCV, params).await
    }

    /// L2 order book snapshot (default depth 10)
    pub async fn order_book(&self, symbol: &str, depth: Option<u32>) -> Result<Value> {
        let params = Params::new().with("symbol", symbol).with(
            "depth",
            depth.unwrap_or(defaults::ORDER_BOOK_DEPTH).to_string(),
        );
        self.public(resources::ORDER_BOOK, params).await
    }

    /// Market summaries, for every market when `symbol` is `None`
    pub async fn markets(&self, symbol: Option<&str>) -> Result<Value> {
        self.public(
            resources::MARKET_SUMMARY,
            Params::new().with_opt("symbol", symbol),
        )
        .await
    }

    /// Index and mark prices, for every market when `symbol` is `None`
    pub async fn price(&self, symbol: Option<&str>) -> Result<Value> {
        self.public(resources::PRICE, Params::new().with_opt("symbol", symbol))
            .await
    }

    /// Recent public trades
    pub async fn trades(&self, query: &TradesQuery) -> Result<Value> {
        self.public(resources::TRADES, query.to_params()).await
    }

    // === Account API ===

    /// Wallet balances, optionally for a single wallet
    pub async fn balance(&self, wallet: Option<&str>) -> Result<Value> {
        let params = wallet.map(|wallet| Params::new().with("wallet", wallet));
        self.signed(resources::USER_WALLET, params, HttpMethod::Get)
            .await
    }

    /// Open orders of a market, optionally narrowed to one order
    pub async fn open_orders(
        &self,
        symbol: &str,
        order_id: Option<&str>,
        cl_order_id: Option<&str>,
    ) -> Result<Value> {
        self.signed(
            resources::USER_OPEN_ORDERS,
            Some(order_ref_params(symbol, order_id, cl_order_id)),
            HttpMethod::Get,
        )
        .await
    }

    // === Trading API ===

    /// Submit an order
    pub async fn place_order(&self, order: &OrderRequest) -> Result<Value> {
        let params = Params::from_serializable(order)?;
        info!(
            "Placing {} {} order on {}: size={}",
            order.order_type, order.side, order.symbol, order.size
        );
        self.signed(resources::ORDER, Some(params), HttpMethod::Post)
            .await
    }

    /// Limit buy order
    pub async fn limit_buy(&self, symbol: &str, size: f64, price: f64) -> Result<Value> {
        self.place_order(&OrderRequest::limit(symbol, OrderSide::Buy, size, price))
            .await
    }

    /// Limit sell order
    pub async fn limit_sell(&self, symbol: &str, size: f64, price: f64) -> Result<Value> {
        self.place_order(&OrderRequest::limit(symbol, OrderSide::Sell, size, price))
            .await
    }

    /// Market buy order
    pub async fn market_buy(&self, symbol: &str, size: f64) -> Result<Value> {
        self.place_order(&OrderRequest::market(symbol, OrderSide::Buy, size))
            .await
    }

    /// Market sell order
    pub async fn market_sell(&self, symbol: &str, size: f64) -> Result<Value> {
        self.place_order(&OrderRequest::market(symbol, OrderSide::Sell, size))
            .await
    }

    /// Cancel orders of a market
    ///
    /// Without `order_id` or `cl_order_id` every open order of `symbol` is cancelled.
    pub async fn cancel_order(
        &self,
        symbol: &str,
        order_id: Option<&str>,
        cl_order_id: Option<&str>,
    ) -> Result<Value> {
        self.signed(
            resources::ORDER,
            Some(order_ref_params(symbol, order_id, cl_order_id)),
            HttpMethod::Delete,
        )
        .await
    }

    /// Dead man's switch: cancel all orders unless called again within `timeout_ms`
    /// (default 60 000 ms)
    pub async fn cancel_all_after(&self, timeout_ms: Option<u64>) -> Result<Value> {
        let params = Params::new().with(
            "timeout",
            timeout_ms.unwrap_or(defaults::CANCEL_ALL_AFTER_MS),
        );
        self.signed(resources::CANCEL_ALL_AFTER, Some(params), HttpMethod::Get)
            .await
    }
}

fn order_ref_params(symbol: &str, order_id: Option<&str>, cl_order_id: Option<&str>) -> Params {
    Params::new()
        .with("symbol", symbol)
        .with_opt("orderID", order_id)
        .with_opt("clOrderID", cl_order_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::utils::build_query_string;

    #[test]
    fn test_order_ref_params() {
        let params = order_ref_params("BTSE-USDT", None, Some("my-order"));
        assert_eq!(
            build_query_string(&params),
            "symbol=BTSE-USDT&clOrderID=my-order"
        );
    }

    #[test]
    fn test_configure_replaces_market() {
        let mut agent = Agent::new(Config::public()).unwrap();
        assert_eq!(agent.api().endpoint("price").path(), "spot/api/v3.2/price");

        agent.configure(Config::public().futures()).unwrap();
        assert_eq!(agent.config().market, "futures");
        assert_eq!(
            agent.api().endpoint("price").path(),
            "futures/api/v2.1/price"
        );
    }

    #[test]
    fn test_configure_switches_signing() {
        let mut agent = Agent::new(Config::public()).unwrap();
        assert!(!agent.api().can_sign());

        agent
            .configure(Config::new("key", "secret").unwrap())
            .unwrap();
        assert!(agent.api().can_sign());
    }
}
