//! Synthetic catalog fixtures for TurboCommerce storefronts.
//!
//! This crate produces the seed data a storefront loads into its `products`
//! and `reviews` collections:
//!
//! - **Catalog**: Product and review records with their pricing, inventory and media
//! - **Generator**: Seeded generation context with a unique-name pool
//! - **Output**: Pretty-printed JSON files and a loader that reads them back
//! - **Check**: Invariant verification over a generated or loaded fixture set
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_fixtures::prelude::*;
//!
//! let mut generator = FixtureGenerator::seeded(42);
//! let fixtures = generator.generate()?;
//!
//! let paths = write_fixtures(Path::new("fixtures"), &fixtures)?;
//! println!("Wrote {}", paths.products.display());
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod check;
pub mod generator;
pub mod names;
pub mod output;
pub mod tables;

pub use error::FixtureError;
pub use ids::*;

/// Number of reviews generated per run.
pub const REVIEW_COUNT: usize = 100;

/// Number of products generated per run.
pub const PRODUCT_COUNT: usize = 120;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::FixtureError;
    pub use crate::ids::*;
    pub use crate::{PRODUCT_COUNT, REVIEW_COUNT};

    // Catalog
    pub use crate::catalog::{
        Category, ExpressDelivery, Inventory, Media, Metadata, Pricing, Product, Review,
        Specifications, TechnicalSpecs, Variants,
    };

    // Generation
    pub use crate::check::check;
    pub use crate::generator::{FixtureGenerator, FixtureSet};
    pub use crate::names::NameGenerator;
    pub use crate::output::{load_fixtures, write_fixtures, FixturePaths};
}
