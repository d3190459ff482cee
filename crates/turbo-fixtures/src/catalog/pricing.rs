//! Product pricing.

use crate::error::FixtureError;
use serde::{Deserialize, Serialize};

/// Original and discounted price of a product.
///
/// The current price never exceeds the original price and never drops
/// below zero. Deserialization rejects documents that break either rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPricing")]
pub struct Pricing {
    original_price: i64,
    current_price: i64,
}

impl Pricing {
    /// Apply a discount to an original price, clamping at zero.
    pub fn discounted(original_price: i64, discount: i64) -> Self {
        let original_price = original_price.max(0);
        let current_price = (original_price - discount.max(0)).max(0);
        Self {
            original_price,
            current_price,
        }
    }

    pub fn original_price(&self) -> i64 {
        self.original_price
    }

    pub fn current_price(&self) -> i64 {
        self.current_price
    }

    /// Amount taken off the original price.
    pub fn savings(&self) -> i64 {
        self.original_price - self.current_price
    }

    /// Check if the product is given away.
    pub fn is_free(&self) -> bool {
        self.current_price == 0
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPricing {
    original_price: i64,
    current_price: i64,
}

impl TryFrom<RawPricing> for Pricing {
    type Error = FixtureError;

    fn try_from(raw: RawPricing) -> Result<Self, Self::Error> {
        if raw.current_price < 0 || raw.current_price > raw.original_price {
            return Err(FixtureError::InvalidRecord(format!(
                "currentPrice {} outside [0, {}]",
                raw.current_price, raw.original_price
            )));
        }
        Ok(Self {
            original_price: raw.original_price,
            current_price: raw.current_price,
        })
    }
}
