//! Defensive view of Rainforest API search payloads.
//!
//! ## Observed shape of `type=search` responses
//!
//! ```json
//! {
//!   "request_info": { "success": true },
//!   "search_results": [
//!     {
//!       "asin": "B07XJ8C8F5",
//!       "title": "Digital Kitchen Scale",
//!       "price": { "value": 12.99, "currency": "USD" },
//!       "rating": 4.6,
//!       "reviews": 38211,
//!       "images": [ { "link": "https://m.media-amazon.com/images/I/..." } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional in practice: sponsored slots omit `price`, new
//! listings omit `rating` and `reviews`, and `images` may be missing. Only
//! `images[0].link` is read for the picture; other image fields are ignored.
//! The proxy forwards this body untouched, so nothing here is validated
//! upstream.
//!
//! Each field decodes through [`lenient`]: a missing, `null`, or wrongly
//! typed value becomes `None` instead of failing the whole entry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of `search_results`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSearchResult {
    #[serde(default, deserialize_with = "lenient")]
    pub asin: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<RawPrice>,

    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,

    /// Review count. Negative or fractional values are treated as absent.
    #[serde(default, deserialize_with = "lenient")]
    pub reviews: Option<u64>,

    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<RawImage>>,
}

/// `price` object; only `value` is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPrice {
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawImage {
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

impl RawSearchResult {
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        self.price.as_ref().and_then(|p| p.value)
    }

    /// Link of the first image, if that image has a non-empty link.
    #[must_use]
    pub fn first_image_link(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .and_then(|image| image.link.as_deref())
            .filter(|link| !link.trim().is_empty())
    }
}

/// Extracts the `search_results` list from a provider payload.
///
/// Returns an empty vec when the list is missing, `null`, or not an array.
/// Entries that are not JSON objects are skipped; provider order is kept.
#[must_use]
pub fn extract_results(payload: &Value) -> Vec<RawSearchResult> {
    let Some(entries) = payload.get("search_results").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| RawSearchResult::deserialize(entry).ok())
        .collect()
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
