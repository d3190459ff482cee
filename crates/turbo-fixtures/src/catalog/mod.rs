//! Fixture record types.
//!
//! Contains the product and review documents exactly as the storefront
//! stores them, plus the pricing and inventory blocks whose invariants are
//! checked on deserialization.

mod inventory;
mod pricing;
mod product;
mod review;

pub use inventory::Inventory;
pub use pricing::Pricing;
pub use product::{
    Category, ExpressDelivery, Media, Metadata, Product, Specifications, TechnicalSpecs, Variants,
};
pub use review::Review;
