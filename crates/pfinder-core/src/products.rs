use serde::{Serialize, Serializer};

/// Image shown when the provider returns no usable image reference.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/80";

/// A numeric field the provider may omit.
///
/// Serializes as the bare number, or the string `"N/A"` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Unavailable,
}

impl Metric {
    #[must_use]
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Metric::Unavailable, Metric::Value)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v}"),
            Metric::Unavailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => serializer.serialize_f64(*v),
            Metric::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

/// A search result in the presenter's fixed record shape.
///
/// Built fresh from each provider response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    /// Amazon ASIN, when the provider supplied one.
    pub id: Option<String>,
    pub title: String,
    pub price: Metric,
    pub rating: Metric,
    pub review_count: u64,
    /// Synthetic placeholder, not derived from any real signal.
    pub estimated_monthly_sales: u32,
    /// Synthetic placeholder, not derived from any real signal.
    pub estimated_profit_margin_percent: u32,
    pub image_url: String,
}
