//! Request-side types shared by the API client and the signer

use crate::error::{BtseError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// HTTP methods accepted by the signed request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET: parameters go to the query string
    Get,
    /// POST: parameters go to the JSON body
    Post,
    /// PUT: parameters go to the JSON body
    Put,
    /// DELETE: parameters go to the query string
    Delete,
}

impl HttpMethod {
    /// Whether parameters are sent as a query string (and left out of the signature)
    pub fn uses_query(self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

/// A versioned, market-scoped REST resource
///
/// The URL path and the signed route are built side by side from the same parts, so the
/// market segment never has to be cut back out of a finished path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    market: String,
    version: String,
    resource: String,
}

impl Endpoint {
    /// Create an endpoint for `resource` under the given market segment and API version
    pub fn new(
        market: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            market: market.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    /// Path relative to the API base URL: `{market}/api/{version}/{resource}`
    pub fn path(&self) -> String {
        format!("{}{}", self.market, self.route())
    }

    /// Route covered by the signature: `/api/{version}/{resource}`
    pub fn route(&self) -> String {
        format!("/api/{}/{}", self.version, self.resource)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Insertion-ordered request parameters
///
/// A `None` value marks a parameter the caller left out. Absent entries never reach the
/// query string or the JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<Value>)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Params::insert_opt`]
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Set a parameter. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.set(key.into(), Some(value.into()));
    }

    /// Set a parameter that may be absent
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.set(key.into(), value.map(Into::into));
    }

    fn set(&mut self, key: String, value: Option<Value>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value of a present parameter
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether the key was declared, present or not
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Present parameters in insertion order
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// Number of declared parameters, including absent ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter was declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object of the present parameters, in insertion order
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .present()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Value::Object(map)
    }

    /// Compact JSON text of the present parameters
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    /// Build parameters from any struct that serializes to a JSON object
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().map(|(k, v)| (k, Some(v))).collect(),
            }),
            other => Err(BtseError::Json(serde::ser::Error::custom(format!(
                "request parameters must serialize to a JSON object, got {}",
                other
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_path_and_route() {
        let endpoint = Endpoint::new("spot", "v3.2", "order");
        assert_eq!(endpoint.path(), "spot/api/v3.2/order");
        assert_eq!(endpoint.route(), "/api/v3.2/order");
    }

    #[test]
    fn test_route_keeps_market_name_inside_resource() {
        // a resource that happens to contain the market name must survive untouched
        let endpoint = Endpoint::new("spot", "v3.2", "user/spot_wallet");
        assert_eq!(endpoint.route(), "/api/v3.2/user/spot_wallet");
        assert_eq!(endpoint.path(), "spot/api/v3.2/user/spot_wallet");
    }

    #[test]
    fn test_params_preserve_insertion_order() {
        let params = Params::new()
            .with("symbol", "BTSE-USDT")
            .with("size", 1)
            .with("price", 5)
            .with("type", "LIMIT")
            .with("side", "SELL");

        assert_eq!(
            params.to_body().unwrap(),
            r#"{"symbol":"BTSE-USDT","size":1,"price":5,"type":"LIMIT","side":"SELL"}"#
        );
    }

    #[test]
    fn test_absent_params_are_dropped_from_json() {
        let params = Params::new()
            .with("symbol", "BTSE-USDT")
            .with_opt::<String>("orderID", None)
            .with_opt("clOrderID", Some("abc"));

        assert_eq!(params.len(), 3);
        assert!(params.contains_key("orderID"));
        assert!(params.get("orderID").is_none());
        assert_eq!(
            params.to_json(),
            json!({"symbol": "BTSE-USDT", "clOrderID": "abc"})
        );
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        let keys: Vec<&str> = params.present().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&json!(3)));
    }

    #[test]
    fn test_from_serializable_rejects_non_objects() {
        assert!(Params::from_serializable(&vec![1, 2, 3]).is_err());
        let params = Params::from_serializable(&json!({"timeout": 60000})).unwrap();
        assert_eq!(params.get("timeout"), Some(&json!(60000)));
    }

    #[test]
    fn test_http_method_query_placement() {
        assert!(HttpMethod::Get.uses_query());
        assert!(HttpMethod::Delete.uses_query());
        assert!(!HttpMethod::Post.uses_query());
        assert!(!HttpMethod::Put.uses_query());
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
