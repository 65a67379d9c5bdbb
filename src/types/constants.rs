//! Constants used throughout the BTSE SDK

/// Production REST API base URL
pub const BTSE_API_URL: &str = "https://api.btse.com/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("btse-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// Market segments and the API version each one is served under
pub mod markets {
    /// Spot market segment
    pub const SPOT: &str = "spot";

    /// Spot API version
    pub const SPOT_VERSION: &str = "v3.2";

    /// Futures market segment
    pub const FUTURES: &str = "futures";

    /// Futures API version
    pub const FUTURES_VERSION: &str = "v2.1";
}

/// Authentication header names
pub mod headers {
    /// Millisecond timestamp the signature was computed with
    pub const NONCE: &str = "btse-nonce";

    /// API key
    pub const API_KEY: &str = "btse-api";

    /// Hex encoded HMAC-SHA384 signature
    pub const SIGNATURE: &str = "btse-sign";
}

/// REST resources, relative to `{market}/api/{version}/`
pub mod resources {
    /// Funding rate history
    pub const FUNDING_HISTORY: &str = "funding_history";
    /// OHLCV candles
    pub const OHLCV: &str = "ohlcv";
    /// L2 order book snapshot
    pub const ORDER_BOOK: &str = "orderbook/L2";
    /// Market summaries
    pub const MARKET_SUMMARY: &str = "market_summary";
    /// Index and mark prices
    pub const PRICE: &str = "price";
    /// Public trade history
    pub const TRADES: &str = "trades";
    /// Wallet balances
    pub const USER_WALLET: &str = "user/wallet";
    /// Order placement and cancellation
    pub const ORDER: &str = "order";
    /// Open orders of the authenticated user
    pub const USER_OPEN_ORDERS: &str = "user/open_orders";
    /// Dead man's switch
    pub const CANCEL_ALL_AFTER: &str = "order/cancelAllAfter";
}

/// Supported OHLCV resolutions, in minutes
pub mod resolutions {
    /// 1 minute
    pub const ONE_MINUTE: u32 = 1;
    /// 5 minutes
    pub const FIVE_MINUTES: u32 = 5;
    /// 15 minutes
    pub const FIFTEEN_MINUTES: u32 = 15;
    /// 30 minutes
    pub const THIRTY_MINUTES: u32 = 30;
    /// 1 hour
    pub const ONE_HOUR: u32 = 60;
    /// 6 hours
    pub const SIX_HOURS: u32 = 360;
    /// 1 day
    pub const ONE_DAY: u32 = 1440;
}

/// Client-side defaults applied by the endpoint wrappers
pub mod defaults {
    use super::resolutions;

    /// OHLCV resolution when none is given
    pub const OHLCV_RESOLUTION: u32 = resolutions::THIRTY_MINUTES;
    /// Order book depth when none is given
    pub const ORDER_BOOK_DEPTH: u32 = 10;
    /// Number of trades when none is given
    pub const TRADE_COUNT: u32 = 50;
    /// Dead man's switch timeout in milliseconds
    pub const CANCEL_ALL_AFTER_MS: u64 = 60_000;
}
