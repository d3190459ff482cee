//! Invariant checks over a fixture set.
//!
//! Runs after generation in tests and against files on disk from the CLI.
//! Every violation is collected so one pass reports the whole picture.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::catalog::{Product, Review};
use crate::error::FixtureError;
use crate::generator::FixtureSet;
use crate::tables::{
    IMAGES_PER_PRODUCT, MAX_REVIEWS_PER_PRODUCT, MIN_REVIEWS_PER_PRODUCT, REVIEW_MAX_DAY,
    REVIEW_TIMESTAMP_MAX, REVIEW_TIMESTAMP_MIN,
};
use crate::{PRODUCT_COUNT, REVIEW_COUNT};

/// Verify a fixture set, failing with every violation found.
pub fn check(set: &FixtureSet) -> Result<(), FixtureError> {
    let found = violations(set);
    if found.is_empty() {
        Ok(())
    } else {
        Err(FixtureError::Invalid(found))
    }
}

/// List every invariant violation in a fixture set.
pub fn violations(set: &FixtureSet) -> Vec<String> {
    let mut out = Vec::new();

    if set.reviews.len() != REVIEW_COUNT {
        out.push(format!(
            "expected {} reviews, found {}",
            REVIEW_COUNT,
            set.reviews.len()
        ));
    }
    if set.products.len() != PRODUCT_COUNT {
        out.push(format!(
            "expected {} products, found {}",
            PRODUCT_COUNT,
            set.products.len()
        ));
    }

    let mut review_ids = HashSet::new();
    for review in &set.reviews {
        if !review_ids.insert(review.review_id.as_str()) {
            out.push(format!("duplicate review id {}", review.review_id));
        }
        check_review(review, &mut out);
    }

    let mut product_ids = HashSet::new();
    let mut names = HashSet::new();
    for product in &set.products {
        if !product_ids.insert(product.id.as_str()) {
            out.push(format!("duplicate product id {}", product.id));
        }
        if !names.insert(product.name.as_str()) {
            out.push(format!("product {}: duplicate name {:?}", product.id, product.name));
        }
        check_product(product, &review_ids, &mut out);
    }

    out
}

fn check_review(review: &Review, out: &mut Vec<String>) {
    let id = &review.review_id;

    if !(1..=5).contains(&review.rating) {
        out.push(format!("review {}: rating {} outside 1..=5", id, review.rating));
    }

    let date_ok = review.date.len() == 10
        && NaiveDate::parse_from_str(&review.date, "%Y-%m-%d")
            .map(|d| d.day() <= REVIEW_MAX_DAY)
            .unwrap_or(false);
    if !date_ok {
        out.push(format!("review {}: bad date {:?}", id, review.date));
    }

    if !(REVIEW_TIMESTAMP_MIN..=REVIEW_TIMESTAMP_MAX).contains(&review.timestamp) {
        out.push(format!("review {}: timestamp {} out of range", id, review.timestamp));
    }
}

fn check_product(product: &Product, review_ids: &HashSet<&str>, out: &mut Vec<String>) {
    let id = &product.id;

    let pricing = product.pricing;
    if pricing.current_price() < 0 || pricing.current_price() > pricing.original_price() {
        out.push(format!(
            "product {}: currentPrice {} outside [0, {}]",
            id,
            pricing.current_price(),
            pricing.original_price()
        ));
    }

    if product.inventory.in_stock() != (product.inventory.stock_quantity() > 0) {
        out.push(format!("product {}: inStock disagrees with stockQuantity", id));
    }

    let media = &product.media;
    if media.image_urls.len() != IMAGES_PER_PRODUCT {
        out.push(format!(
            "product {}: {} images, expected {}",
            id,
            media.image_urls.len(),
            IMAGES_PER_PRODUCT
        ));
    }
    if media.image_urls.first() != Some(&media.primary_image) {
        out.push(format!("product {}: primaryImage is not the first image", id));
    }

    let linked = product.review_ids();
    if !(MIN_REVIEWS_PER_PRODUCT..=MAX_REVIEWS_PER_PRODUCT).contains(&linked.len()) {
        out.push(format!("product {}: {} review ids", id, linked.len()));
    }
    let distinct: HashSet<_> = linked.iter().collect();
    if distinct.len() != linked.len() {
        out.push(format!("product {}: repeated review id", id));
    }
    for review_id in linked {
        if !review_ids.contains(review_id.as_str()) {
            out.push(format!("product {}: unknown review id {}", id, review_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FixtureGenerator;
    use crate::ids::ReviewId;

    fn generated() -> FixtureSet {
        FixtureGenerator::seeded(31).generate().unwrap()
    }

    #[test]
    fn test_generated_set_passes() {
        assert!(check(&generated()).is_ok());
    }

    #[test]
    fn test_dangling_review_id() {
        let mut set = generated();
        set.products[0].specifications.review_ids[0] = ReviewId::new("rev_9999");

        let found = violations(&set);
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("unknown review id rev_9999"));
    }

    #[test]
    fn test_duplicate_name() {
        let mut set = generated();
        set.products[1].name = set.products[0].name.clone();
        assert!(violations(&set).iter().any(|v| v.contains("duplicate name")));
    }

    #[test]
    fn test_bad_review_fields() {
        let mut set = generated();
        set.reviews[0].rating = 0;
        set.reviews[1].date = "2024-02-30".to_string();
        set.reviews[2].date = "2024-1-5".to_string();
        set.reviews[3].timestamp = 1_600_000_000;

        let found = violations(&set);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_primary_image_mismatch() {
        let mut set = generated();
        set.products[0].media.primary_image = "/api/images/other.jpeg".to_string();
        assert!(violations(&set).iter().any(|v| v.contains("primaryImage")));
    }

    #[test]
    fn test_wrong_counts() {
        let mut set = generated();
        set.reviews.truncate(10);

        // Products now also point at missing reviews.
        let err = check(&set).unwrap_err();
        match err {
            FixtureError::Invalid(found) => {
                assert!(found.iter().any(|v| v.contains("expected 100 reviews, found 10")));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
