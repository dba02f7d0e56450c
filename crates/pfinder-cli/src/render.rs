//! Text and JSON rendering of presenter state.

use std::fmt::Write as _;

use pfinder_core::{Metric, PresenterState, TieredProduct, TieredResults};
use serde_json::json;

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const NO_RESULTS_MESSAGE: &str = "No products found.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products.";
pub const UPGRADE_MESSAGE: &str = "Upgrade to Pro to unlock all results!";

#[must_use]
pub fn render_state(state: &PresenterState) -> String {
    match state {
        PresenterState::Idle => String::new(),
        PresenterState::Loading { .. } => LOADING_MESSAGE.to_owned(),
        PresenterState::Success(results) => render_results(results),
        PresenterState::NoResults => NO_RESULTS_MESSAGE.to_owned(),
        PresenterState::Failed(_) => FETCH_FAILED_MESSAGE.to_owned(),
    }
}

#[must_use]
pub fn render_results(results: &TieredResults) -> String {
    let mut out = String::new();
    for item in &results.items {
        out.push_str(&render_product(item));
        out.push('\n');
    }
    if results.show_upgrade {
        out.push_str(UPGRADE_MESSAGE);
        out.push('\n');
    }
    out
}

fn render_product(item: &TieredProduct) -> String {
    let product = &item.product;
    let mut out = String::new();

    if item.locked {
        out.push_str("[LOCKED] ");
    }
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "  Price: {}", format_price(product.price));
    let _ = writeln!(
        out,
        "  Rating: {} \u{2b50} ({} reviews)",
        product.rating, product.review_count
    );
    let _ = writeln!(out, "  Est. Monthly Sales: {}", product.estimated_monthly_sales);
    let _ = writeln!(
        out,
        "  Estimated Profit Margin: {}%",
        product.estimated_profit_margin_percent
    );
    let _ = writeln!(out, "  Image: {}", product.image_url);
    out
}

/// Dollar amount with cents, or a bare `N/A` when the provider gave no price.
fn format_price(price: Metric) -> String {
    match price {
        Metric::Value(v) => format!("${v:.2}"),
        Metric::Unavailable => "N/A".to_owned(),
    }
}

/// Machine-readable form of a settled state, for `--json` output.
#[must_use]
pub fn state_json(state: &PresenterState) -> serde_json::Value {
    match state {
        PresenterState::Idle => json!({ "status": "idle" }),
        PresenterState::Loading { query, .. } => {
            json!({ "status": "loading", "query": query.as_str() })
        }
        PresenterState::Success(results) => json!({
            "status": "success",
            "showUpgrade": results.show_upgrade,
            "items": results.items,
        }),
        PresenterState::NoResults => json!({ "status": "no_results", "message": NO_RESULTS_MESSAGE }),
        PresenterState::Failed(_) => json!({ "status": "error", "message": FETCH_FAILED_MESSAGE }),
    }
}
