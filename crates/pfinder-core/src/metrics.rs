//! Synthetic placeholder metrics.
//!
//! Monthly sales and profit margin are drawn uniformly at random for every
//! normalized entry. They carry no information about the listing; the random
//! source is injected so callers can seed it.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::CoreError;

pub const DEFAULT_MONTHLY_SALES: RangeInclusive<u32> = 300..=699;
pub const DEFAULT_PROFIT_MARGIN_PERCENT: RangeInclusive<u32> = 30..=59;

/// Inclusive ranges the synthetic metrics are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRanges {
    monthly_sales: RangeInclusive<u32>,
    profit_margin_percent: RangeInclusive<u32>,
}

impl Default for SyntheticRanges {
    fn default() -> Self {
        Self {
            monthly_sales: DEFAULT_MONTHLY_SALES,
            profit_margin_percent: DEFAULT_PROFIT_MARGIN_PERCENT,
        }
    }
}

impl SyntheticRanges {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyRange`] if either range contains no values.
    pub fn new(
        monthly_sales: RangeInclusive<u32>,
        profit_margin_percent: RangeInclusive<u32>,
    ) -> Result<Self, CoreError> {
        check_non_empty("monthly_sales", &monthly_sales)?;
        check_non_empty("profit_margin_percent", &profit_margin_percent)?;
        Ok(Self {
            monthly_sales,
            profit_margin_percent,
        })
    }

    #[must_use]
    pub fn monthly_sales(&self) -> &RangeInclusive<u32> {
        &self.monthly_sales
    }

    #[must_use]
    pub fn profit_margin_percent(&self) -> &RangeInclusive<u32> {
        &self.profit_margin_percent
    }

    pub fn draw_monthly_sales<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.monthly_sales.clone())
    }

    pub fn draw_profit_margin_percent<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.profit_margin_percent.clone())
    }
}

fn check_non_empty(name: &'static str, range: &RangeInclusive<u32>) -> Result<(), CoreError> {
    if range.is_empty() {
        return Err(CoreError::EmptyRange {
            name,
            start: *range.start(),
            end: *range.end(),
        });
    }
    Ok(())
}
