//! API client for the BTSE REST API

use crate::{
    api::utils::{join_url, with_query},
    error::{BtseError, Result},
    signer::{BtseSigner, Config},
    types::{
        api::{Endpoint, HttpMethod, Params},
        constants::{headers, USER_AGENT},
    },
};
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// BTSE API client
///
/// Issues public requests as-is and signs private ones with the configured key pair.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http_client: HttpClient,
    /// Base API URL
    base_url: String,
    /// Signer for authenticated requests
    signer: Option<BtseSigner>,
    /// Market segment of every endpoint
    market: String,
    /// API version of every endpoint
    version: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| BtseError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.to_string(),
            signer: config.credentials.clone().map(BtseSigner::new),
            market: config.market.clone(),
            version: config.version.clone(),
        })
    }

    /// Endpoint for `resource` under the configured market and version
    pub fn endpoint(&self, resource: &str) -> Endpoint {
        Endpoint::new(self.market.as_str(), self.version.as_str(), resource)
    }

    /// Whether signed requests can be made
    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }

    /// Make an unauthenticated GET request
    ///
    /// Absent parameters are left out of the query string.
    pub async fn get(&self, endpoint: &Endpoint, params: Option<&Params>) -> Result<Value> {
        let url = with_query(join_url(&self.base_url, &endpoint.path()), params);

        debug!("GET {}", url);
        let response = self.http_client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make an authenticated request
    ///
    /// GET and DELETE send the present parameters as a query string; other methods send them
    /// as the JSON body that was signed.
    pub async fn signed_request(
        &self,
        endpoint: &Endpoint,
        params: Option<&Params>,
        method: HttpMethod,
    ) -> Result<Value> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| BtseError::auth("API key and secret required for signed endpoints"))?;

        let envelope = signer.sign_request(endpoint, params, method)?;

        let mut url = join_url(&self.base_url, &endpoint.path());
        if method.uses_query() {
            url = with_query(url, params);
        }

        debug!("{} {} (nonce {})", method, url, envelope.timestamp);
        let mut request = self
            .http_client
            .request(method.as_reqwest(), &url)
            .header(headers::NONCE, envelope.timestamp.to_string())
            .header(headers::API_KEY, signer.api_key())
            .header(headers::SIGNATURE, &envelope.signature);

        if let Some(body) = envelope.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Decode a response body, turning non-2xx statuses into [`BtseError::Api`]
    async fn handle_response(response: Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text)?)
        } else {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            warn!("BTSE API returned {}: {}", status, body);
            Err(BtseError::api(status.as_u16(), body))
        }
    }
}
