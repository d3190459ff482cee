//! Stock tracking for fixture products.

use crate::error::FixtureError;
use serde::{Deserialize, Serialize};

/// Stock level of a product.
///
/// `in_stock` is derived from the quantity and cannot be set on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInventory")]
pub struct Inventory {
    stock_quantity: u32,
    in_stock: bool,
}

impl Inventory {
    pub fn new(stock_quantity: u32) -> Self {
        Self {
            stock_quantity,
            in_stock: stock_quantity > 0,
        }
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInventory {
    stock_quantity: u32,
    in_stock: bool,
}

impl TryFrom<RawInventory> for Inventory {
    type Error = FixtureError;

    fn try_from(raw: RawInventory) -> Result<Self, Self::Error> {
        let inventory = Inventory::new(raw.stock_quantity);
        if inventory.in_stock != raw.in_stock {
            return Err(FixtureError::InvalidRecord(format!(
                "inStock {} disagrees with stockQuantity {}",
                raw.in_stock, raw.stock_quantity
            )));
        }
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock_follows_quantity() {
        assert!(Inventory::new(12).in_stock());
        assert!(!Inventory::new(0).in_stock());
        assert_eq!(Inventory::new(0).stock_quantity(), 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Inventory::new(3)).unwrap();
        assert_eq!(json["stockQuantity"], 3);
        assert_eq!(json["inStock"], true);
    }

    #[test]
    fn test_rejects_inconsistent_flag() {
        let bad: Result<Inventory, _> =
            serde_json::from_str(r#"{"stockQuantity": 0, "inStock": true}"#);
        assert!(bad.is_err());

        let good: Inventory =
            serde_json::from_str(r#"{"stockQuantity": 9, "inStock": true}"#).unwrap();
        assert_eq!(good.stock_quantity(), 9);
    }
}
