//! Normalization from raw Rainforest payloads to [`NormalizedProduct`].

use rand::Rng;
use serde_json::Value;

use crate::metrics::SyntheticRanges;
use crate::products::{Metric, NormalizedProduct, PLACEHOLDER_IMAGE_URL};
use crate::raw::{extract_results, RawSearchResult};

/// Normalizes every entry of a provider payload, in provider order.
///
/// A payload without a `search_results` list yields an empty vec; callers
/// report that as "no results", not as a failure.
pub fn normalize<R: Rng>(
    payload: &Value,
    ranges: &SyntheticRanges,
    rng: &mut R,
) -> Vec<NormalizedProduct> {
    extract_results(payload)
        .into_iter()
        .map(|raw| normalize_result(raw, ranges, rng))
        .collect()
}

/// Normalizes a single raw entry, drawing fresh synthetic metrics.
pub fn normalize_result<R: Rng>(
    raw: RawSearchResult,
    ranges: &SyntheticRanges,
    rng: &mut R,
) -> NormalizedProduct {
    let price = Metric::from_option(raw.price_value());
    let image_url = raw
        .first_image_link()
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
        .to_owned();

    NormalizedProduct {
        id: raw.asin.filter(|id| !id.is_empty()),
        title: raw.title.unwrap_or_default(),
        price,
        rating: Metric::from_option(raw.rating),
        review_count: raw.reviews.unwrap_or(0),
        estimated_monthly_sales: ranges.draw_monthly_sales(rng),
        estimated_profit_margin_percent: ranges.draw_profit_margin_percent(rng),
        image_url,
    }
}
