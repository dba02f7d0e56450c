use thiserror::Error;

/// Errors returned by the Rainforest API client.
///
/// Messages never contain the request URL, which carries the API key.
#[derive(Debug, Error)]
pub enum RainforestError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from Rainforest API")]
    UnexpectedStatus { status: u16 },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
