//! Seeded fixture generation.
//!
//! [`FixtureGenerator`] is the whole generation context: the random source,
//! the seen-name set and the image pool all live on it, so independent runs
//! never share state and a fixed seed reproduces a run exactly.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::{
    Category, ExpressDelivery, Inventory, Media, Metadata, Pricing, Product, Review,
    Specifications, TechnicalSpecs, Variants,
};
use crate::error::FixtureError;
use crate::ids::{ProductId, ReviewId};
use crate::names::NameGenerator;
use crate::tables::*;
use crate::{PRODUCT_COUNT, REVIEW_COUNT};

/// Format used for `createdAt` and `lastUpdated`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Products and the reviews they reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub products: Vec<Product>,
    pub reviews: Vec<Review>,
}

/// Generation context for one fixture run.
#[derive(Debug, Clone)]
pub struct FixtureGenerator<R = StdRng> {
    rng: R,
    names: NameGenerator,
    images: Vec<String>,
    clock: Option<NaiveDateTime>,
}

impl FixtureGenerator<StdRng> {
    /// Create a reproducible generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    /// Create a generator around an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            names: NameGenerator::new(),
            images: IMAGE_URLS.iter().map(|s| s.to_string()).collect(),
            clock: None,
        }
    }

    /// Stamp every record with a fixed time instead of the local clock.
    pub fn with_clock(mut self, now: NaiveDateTime) -> Self {
        self.clock = Some(now);
        self
    }

    /// Replace the name generator.
    pub fn with_names(mut self, names: NameGenerator) -> Self {
        self.names = names;
        self
    }

    /// Generate the full fixture set: reviews first, then products linking to them.
    pub fn generate(&mut self) -> Result<FixtureSet, FixtureError> {
        let reviews = self.generate_reviews(REVIEW_COUNT);
        let products = self.generate_products(PRODUCT_COUNT, &reviews)?;
        Ok(FixtureSet { products, reviews })
    }

    /// Generate `count` reviews with IDs `rev_1001` onwards.
    pub fn generate_reviews(&mut self, count: usize) -> Vec<Review> {
        let reviews: Vec<Review> = (1..=count).map(|n| self.generate_review(n)).collect();
        debug!(count = reviews.len(), "generated reviews");
        reviews
    }

    /// Generate the `n`th review (1-based).
    pub fn generate_review(&mut self, n: usize) -> Review {
        let rng = &mut self.rng;

        let email = Review::email_for(
            pick(rng, FIRST_NAMES),
            pick(rng, LAST_NAMES),
            EMAIL_DOMAIN,
        );
        let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
        let rating = rng.gen_range(1..=5);
        let review = pick(rng, REVIEW_TEXTS).to_string();
        let date = format!(
            "{}-{:02}-{:02}",
            REVIEW_YEAR,
            rng.gen_range(1..=12u32),
            rng.gen_range(1..=REVIEW_MAX_DAY)
        );
        let timestamp = rng.gen_range(REVIEW_TIMESTAMP_MIN..=REVIEW_TIMESTAMP_MAX);

        Review {
            review_id: ReviewId::sequential(n),
            email,
            name,
            rating,
            review,
            date,
            timestamp,
        }
    }

    /// Generate `count` products, each linking to reviews from `reviews`.
    pub fn generate_products(
        &mut self,
        count: usize,
        reviews: &[Review],
    ) -> Result<Vec<Product>, FixtureError> {
        let review_ids: Vec<ReviewId> = reviews.iter().map(|r| r.review_id.clone()).collect();

        let products = (1..=count)
            .map(|n| self.generate_product(n, &review_ids))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            count = products.len(),
            names_used = self.names.produced(),
            "generated products"
        );
        Ok(products)
    }

    /// Generate the `n`th product (1-based).
    pub fn generate_product(
        &mut self,
        n: usize,
        review_ids: &[ReviewId],
    ) -> Result<Product, FixtureError> {
        let category = pick(&mut self.rng, &Category::ALL[..]);
        let name = self.names.next_name(&mut self.rng)?;
        let media = self.next_media()?;
        let now = self.timestamp();
        let rng = &mut self.rng;

        let original_price = rng
            .gen_range(ORIGINAL_PRICE_MIN / PRICE_STEP..=ORIGINAL_PRICE_MAX / PRICE_STEP)
            * PRICE_STEP;
        let discount =
            rng.gen_range(DISCOUNT_MIN / PRICE_STEP..=DISCOUNT_MAX / PRICE_STEP) * PRICE_STEP;
        let pricing = Pricing::discounted(original_price, discount);

        let description = pick(rng, DESCRIPTIONS).to_string();
        let key_features = pick(rng, FEATURE_SETS).iter().map(|f| f.to_string()).collect();
        let express_delivery = if rng.gen_bool(0.5) {
            ExpressDelivery::Available
        } else {
            ExpressDelivery::NotAvailable
        };
        let technical_specs = TechnicalSpecs::new(
            pick(rng, TECHNICAL_SPECS),
            express_delivery,
            rng.gen_range(MODEL_YEAR_MIN..=MODEL_YEAR_MAX),
        );

        let sample_size = rng
            .gen_range(MIN_REVIEWS_PER_PRODUCT..=MAX_REVIEWS_PER_PRODUCT)
            .min(review_ids.len());
        let linked_reviews = review_ids
            .choose_multiple(rng, sample_size)
            .cloned()
            .collect();

        let stock_quantity = if rng.gen_bool(0.5) {
            0
        } else {
            rng.gen_range(1..=MAX_STOCK)
        };
        let is_featured = rng.gen_ratio(1, FEATURED_ONE_IN);
        let variants = Variants::from_palette(pick(rng, COLOR_PALETTES));
        let package_contents = pick(rng, PACKAGE_CONTENTS).to_string();

        Ok(Product {
            id: ProductId::sequential(n),
            category,
            name,
            pricing,
            inventory: Inventory::new(stock_quantity),
            is_featured,
            created_at: now.clone(),
            variants,
            media,
            specifications: Specifications {
                package_contents,
                description,
                key_features,
                technical_specs,
                review_ids: linked_reviews,
            },
            metadata: Metadata {
                last_updated: now,
                source: SOURCE_TAG.to_string(),
            },
        })
    }

    /// Shuffle the shared image pool and take the leading images.
    fn next_media(&mut self) -> Result<Media, FixtureError> {
        self.images.shuffle(&mut self.rng);
        let take = IMAGES_PER_PRODUCT.min(self.images.len());
        Media::from_images(self.images[..take].to_vec())
            .ok_or_else(|| FixtureError::InvalidRecord("image pool is empty".to_string()))
    }

    fn timestamp(&self) -> String {
        self.clock
            .unwrap_or_else(|| Local::now().naive_local())
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

/// Pick one element of a non-empty constant table.
fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}
