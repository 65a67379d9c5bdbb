//! Order-related types for the BTSE API

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Limit order, requires a price
    Limit,
    /// Market order
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

/// Body of a new order request
///
/// Field order is the order the exchange sees in the signed JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Market symbol, e.g. `BTSE-USDT`
    pub symbol: String,
    /// Order size
    #[serde(serialize_with = "serialize_compact")]
    pub size: f64,
    /// Limit price, omitted for market orders
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_compact_opt"
    )]
    pub price: Option<f64>,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side
    pub side: OrderSide,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(symbol: impl Into<String>, side: OrderSide, size: f64, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            size,
            price: Some(price),
            order_type: OrderType::Limit,
            side,
        }
    }

    /// Create a market order
    pub fn market(symbol: impl Into<String>, side: OrderSide, size: f64) -> Self {
        Self {
            symbol: symbol.into(),
            size,
            price: None,
            order_type: OrderType::Market,
            side,
        }
    }
}

/// Whole numbers go out as integers (`1`, not `1.0`)
fn serialize_compact<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_compact_opt<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_compact(v, serializer),
        None => serializer.serialize_none(),
    }
}
