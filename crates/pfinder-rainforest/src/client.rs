//! HTTP client for the Rainforest API `request` endpoint.
//!
//! Issues one `type=search` request per call against a fixed Amazon
//! marketplace and hands back the JSON body text untouched, key order and
//! whitespace included. The body is only checked to be well-formed JSON; the
//! proxy does not interpret the provider schema (see `pfinder_core::raw`).

use std::time::Duration;

use pfinder_core::{
    encode_query_value, SearchQuery, DEFAULT_AMAZON_DOMAIN, DEFAULT_PROVIDER_BASE_URL,
};
use reqwest::{Client, Url};
use serde::de::IgnoredAny;

use crate::error::RainforestError;

const SEARCH_TYPE: &str = "search";

/// Client for the Rainforest API.
///
/// Use [`RainforestClient::new`] for production or
/// [`RainforestClient::with_base_url`] to point at a mock server in tests.
pub struct RainforestClient {
    client: Client,
    api_key: String,
    base_url: String,
    amazon_domain: String,
}

impl std::fmt::Debug for RainforestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RainforestClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("amazon_domain", &self.amazon_domain)
            .finish_non_exhaustive()
    }
}

impl RainforestClient {
    /// Creates a client pointed at the production Rainforest API.
    ///
    /// # Errors
    ///
    /// Returns [`RainforestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, RainforestError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_PROVIDER_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`RainforestError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`RainforestError::InvalidBaseUrl`] if `base_url` does
    /// not parse or carries its own query string.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, RainforestError> {
        let parsed = Url::parse(base_url).map_err(|e| RainforestError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.query().is_some() {
            return Err(RainforestError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "must not contain a query string".to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pfinder/0.1 (product-research)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            amazon_domain: DEFAULT_AMAZON_DOMAIN.to_owned(),
        })
    }

    /// Overrides the Amazon marketplace searched (default `amazon.com`).
    #[must_use]
    pub fn with_amazon_domain(mut self, amazon_domain: &str) -> Self {
        amazon_domain.clone_into(&mut self.amazon_domain);
        self
    }

    /// Runs a keyword search and returns the provider body verbatim.
    ///
    /// Exactly one request is sent; there is no retry. The body must parse as
    /// JSON but is returned as received, never re-serialized.
    ///
    /// # Errors
    ///
    /// - [`RainforestError::Http`] on network failure or timeout.
    /// - [`RainforestError::UnexpectedStatus`] on a non-2xx status.
    /// - [`RainforestError::Deserialize`] if the body is not JSON.
    pub async fn search(&self, query: &SearchQuery) -> Result<String, RainforestError> {
        let url = self.build_url(query);
        tracing::debug!(
            search_term = query.as_str(),
            amazon_domain = %self.amazon_domain,
            "requesting rainforest search"
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RainforestError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str::<IgnoredAny>(&body).map_err(|e| RainforestError::Deserialize {
            context: format!("search(search_term={query})"),
            source: e,
        })?;
        Ok(body)
    }

    /// Builds the request URL with every value percent-encoded.
    fn build_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}?api_key={}&type={SEARCH_TYPE}&amazon_domain={}&search_term={}",
            self.base_url,
            encode_query_value(&self.api_key),
            encode_query_value(&self.amazon_domain),
            query.encoded(),
        )
    }
}
