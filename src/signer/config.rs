//! Configuration for the BTSE SDK

use crate::error::{BtseError, Result};
use crate::types::constants::{markets, BTSE_API_URL, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use url::Url;

/// API key pair used to sign private requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create a key pair. Both halves must be non-empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(BtseError::config("Invalid key, or secret"));
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// API key sent in the `btse-api` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// On-disk configuration: `{ "key", "secret", "market", "version" }`
#[derive(Debug, Deserialize)]
struct ConfigFile {
    key: Option<String>,
    secret: Option<String>,
    market: Option<String>,
    version: Option<String>,
}

/// Configuration for the BTSE client
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub api_url: Url,

    /// Key pair for signed requests, `None` for a public-only client
    pub credentials: Option<Credentials>,

    /// Market segment prefixed to every path (e.g. "spot", "futures")
    pub market: String,

    /// API version tag (e.g. "v3.2")
    pub version: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Create a new configuration for the spot market
    ///
    /// # Arguments
    ///
    /// * `api_key` - BTSE API key
    /// * `api_secret` - BTSE API secret
    ///
    /// Fails when either value is empty.
    pub fn new(api_key: &str, api_secret: &str) -> Result<Self> {
        let mut config = Self::public();
        config.credentials = Some(Credentials::new(api_key, api_secret)?);
        Ok(config)
    }

    /// Create a configuration without credentials. Only public endpoints will work.
    pub fn public() -> Self {
        Self {
            api_url: Url::parse(BTSE_API_URL).expect("default API URL is valid"),
            credentials: None,
            market: markets::SPOT.to_string(),
            version: markets::SPOT_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// `market` and `version` are optional and default to `spot` / `v3.2`. A missing or empty
    /// `key` or `secret` is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents).map_err(|e| {
            BtseError::config(format!(
                "Malformed configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::new(
            file.key.as_deref().unwrap_or_default(),
            file.secret.as_deref().unwrap_or_default(),
        )?;
        if let Some(market) = file.market {
            config.market = market;
        }
        if let Some(version) = file.version {
            config.version = version;
        }
        Ok(config)
    }

    /// Set the market segment
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Set the API version tag
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Switch to the futures market and its API version
    pub fn futures(self) -> Self {
        self.with_market(markets::FUTURES)
            .with_version(markets::FUTURES_VERSION)
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, api_url: &str) -> Result<Self> {
        self.api_url = Url::parse(api_url).map_err(|_| BtseError::config("Invalid API URL"))?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Whether signed endpoints can be called
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("key", "secret").unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.btse.com/");
        assert_eq!(config.market, "spot");
        assert_eq!(config.version, "v3.2");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.credentials.unwrap().api_key(), "key");
    }

    #[test]
    fn test_empty_credentials_are_rejected() {
        assert_eq!(
            Config::new("", "secret").unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Config::new("key", "").unwrap_err().kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_futures_switches_market_and_version() {
        let config = Config::public().futures();
        assert_eq!(config.market, "futures");
        assert_eq!(config.version, "v2.1");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(Config::public().with_base_url("not a url").is_err());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"{"key": "k", "secret": "s", "market": "futures", "version": "v2.1"}"#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.market, "futures");
        assert_eq!(config.version, "v2.1");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_from_file_defaults_market_and_version() {
        let file = write_config(r#"{"key": "k", "secret": "s"}"#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.market, "spot");
        assert_eq!(config.version, "v3.2");
    }

    #[test]
    fn test_from_file_missing_secret() {
        let file = write_config(r#"{"key": "k"}"#);
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BtseError::Config(_)));
    }

    #[test]
    fn test_from_file_malformed() {
        let file = write_config("{ not json");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BtseError::Config(_)));
    }

    #[test]
    fn test_secret_is_not_printed() {
        let credentials = Credentials::new("key", "very-secret").unwrap();
        assert!(!format!("{:?}", credentials).contains("very-secret"));
    }
}
