//! Market data query types

use crate::types::{api::Params, constants::defaults};

/// Filters for the public trade history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesQuery {
    /// Market symbol, all markets when `None`
    pub symbol: Option<String>,
    /// Start time in milliseconds
    pub start_time: Option<i64>,
    /// End time in milliseconds
    pub end_time: Option<i64>,
    /// Number of trades, defaults to 50
    pub count: Option<u32>,
    /// Include trades older than the default window, defaults to false
    pub include_old: Option<bool>,
}

impl TradesQuery {
    /// Query the trades of a single market
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    /// Restrict to a time window
    pub fn between(mut self, start_time: i64, end_time: i64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Set the number of trades
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Query parameters with defaults applied
    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("symbol", self.symbol.clone())
            .with_opt("startTime", self.start_time)
            .with_opt("endTime", self.end_time)
            .with("count", self.count.unwrap_or(defaults::TRADE_COUNT))
            .with("includeOld", self.include_old.unwrap_or(false))
    }
}
