use serde::Serialize;

use crate::products::NormalizedProduct;

/// Leading results shown without the Pro upgrade.
pub const DEFAULT_FREE_RESULTS: usize = 3;

/// Position-based free/locked policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieringPolicy {
    free_results: usize,
}

impl Default for TieringPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FREE_RESULTS)
    }
}

impl TieringPolicy {
    #[must_use]
    pub fn new(free_results: usize) -> Self {
        Self { free_results }
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        index >= self.free_results
    }

    /// Marks each product free or locked by position, keeping order.
    #[must_use]
    pub fn tier(&self, products: Vec<NormalizedProduct>) -> TieredResults {
        let show_upgrade = products.len() > self.free_results;
        let items = products
            .into_iter()
            .enumerate()
            .map(|(index, product)| TieredProduct {
                locked: self.is_locked(index),
                product,
            })
            .collect();

        TieredResults {
            items,
            show_upgrade,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredProduct {
    pub product: NormalizedProduct,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredResults {
    pub items: Vec<TieredProduct>,
    /// Whether the "upgrade to Pro" banner accompanies the list.
    pub show_upgrade: bool,
}

impl TieredResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::{Metric, PLACEHOLDER_IMAGE_URL};

    fn products(n: usize) -> Vec<NormalizedProduct> {
        (0..n)
            .map(|i| NormalizedProduct {
                id: Some(format!("B{i:04}")),
                title: format!("Product {i}"),
                price: Metric::Unavailable,
                rating: Metric::Unavailable,
                review_count: 0,
                estimated_monthly_sales: 300,
                estimated_profit_margin_percent: 30,
                image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            })
            .collect()
    }

    #[test]
    fn five_results_lock_the_last_two() {
        let tiered = TieringPolicy::default().tier(products(5));
        let locked: Vec<bool> = tiered.items.iter().map(|item| item.locked).collect();
        assert_eq!(locked, [false, false, false, true, true]);
        assert!(tiered.show_upgrade);
        assert_eq!(tiered.items.iter().filter(|item| item.locked).count(), 2);
    }

    #[test]
    fn three_results_are_all_free() {
        let tiered = TieringPolicy::default().tier(products(3));
        assert!(tiered.items.iter().all(|item| !item.locked));
        assert!(!tiered.show_upgrade);
    }

    #[test]
    fn tiering_keeps_order() {
        let tiered = TieringPolicy::default().tier(products(4));
        let titles: Vec<_> = tiered
            .items
            .iter()
            .map(|item| item.product.title.as_str())
            .collect();
        assert_eq!(titles, ["Product 0", "Product 1", "Product 2", "Product 3"]);
    }

    #[test]
    fn empty_input_has_no_upgrade() {
        let tiered = TieringPolicy::default().tier(Vec::new());
        assert!(tiered.is_empty());
        assert!(!tiered.show_upgrade);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let tiered = TieringPolicy::new(1).tier(products(2));
        assert!(!tiered.items[0].locked);
        assert!(tiered.items[1].locked);
        assert!(tiered.show_upgrade);
    }
}
