//! Constant lookup tables the generator samples from.

/// Product image URLs served by the storefront image route.
pub const IMAGE_URLS: &[&str] = &[
    "/api/images/img1.jpeg",
    "/api/images/img2.jpeg",
    "/api/images/img3.jpeg",
    "/api/images/img4.jpeg",
    "/api/images/img5.jpeg",
    "/api/images/img6.jpeg",
    "/api/images/img7.jpeg",
    "/api/images/img8.jpeg",
    "/api/images/img9.jpeg",
    "/api/images/img10.jpeg",
    "/api/images/img11.jpeg",
    "/api/images/img12.jpeg",
    "/api/images/img13.jpeg",
];

/// Images attached to each product.
pub const IMAGES_PER_PRODUCT: usize = 4;

// Product names are "{prefix}{middle} {suffix}".
pub const NAME_PREFIXES: &[&str] = &["Hyper", "Fit", "Charge", "Qi", "Immersa", "Pulse", "Sound"];
pub const NAME_MIDDLES: &[&str] = &["Boost", "Mate", "Sync", "Pro", "X", "Titan", "Max"];
pub const NAME_SUFFIXES: &[&str] = &["Ultra", "X2", "5", "Elite", "Air", "360", "Plus"];

pub const DESCRIPTIONS: &[&str] = &[
    "Experience cutting-edge technology with our premium product.",
    "The ultimate solution for your everyday needs with advanced features.",
    "Designed for performance and style, this product exceeds expectations.",
    "Innovative design meets superior functionality in this amazing product.",
    "Transform your experience with this high-quality, feature-rich product.",
];

pub const FEATURE_SETS: &[&[&str]] = &[
    &["Long battery life", "Fast charging", "Water resistant", "Bluetooth connectivity"],
    &["High-resolution display", "Multiple color options", "Lightweight design", "Voice assistant"],
    &["Noise cancellation", "Comfortable fit", "Wireless freedom", "Crystal clear sound"],
    &["Sleek design", "Multiple ports", "Compact size", "Fast data transfer"],
    &["Immersive experience", "Adjustable straps", "High refresh rate", "Wide compatibility"],
];

/// Base technical specs; each product also gets delivery and model year fields.
pub const TECHNICAL_SPECS: &[&[(&str, &str)]] = &[
    &[("material", "Plastic"), ("warranty", "1 year"), ("dimensions", "5x3x1 inches")],
    &[("weight", "150g"), ("compatibility", "iOS/Android"), ("chargingTime", "2 hours")],
    &[("batteryCapacity", "4000mAh"), ("connectivity", "Bluetooth 5.0"), ("colorOptions", "3")],
    &[
        ("screenSize", "1.4 inch"),
        ("sensors", "Heart rate, Step counter"),
        ("waterResistance", "IP68"),
    ],
    &[("driverSize", "40mm"), ("frequencyResponse", "20Hz-20kHz"), ("impedance", "32 ohms")],
];

pub const PACKAGE_CONTENTS: &[&str] = &[
    "1 x Main Unit, 1 x Charging Cable, 1 x User Manual, 1 x Warranty Card",
    "1 x Product, 2 x AAA Batteries, Quick Start Guide",
    "1 x Device, 1 x USB-C Cable, 1 x Ear Tips (S/M/L), 1 x Storage Pouch",
    "1 x Headset, 1 x AUX Cable, 1 x Cleaning Cloth",
    "1 x Smartwatch, 1 x Magnetic Charger, 1 x Strap (Extra)",
    "1 x Speaker, 1 x Power Adapter, 1 x 3.5mm Audio Cable",
    "1 x VR Headset, 2 x Controllers, 1 x Lens Cleaning Kit",
];

/// Comma-separated color palettes.
pub const COLOR_PALETTES: &[&str] = &[
    "Black, White, Silver, Gray",
    "Red, Blue, Yellow",
    "Green, LimeGreen, Olive",
];

pub const FIRST_NAMES: &[&str] = &[
    "Ali", "Fatima", "Usman", "Aisha", "Bilal", "Zainab", "Haroon", "Sana", "Owais", "Hira",
];

pub const LAST_NAMES: &[&str] = &[
    "Ahmed", "Khan", "Malik", "Rizwan", "Akhtar", "Shaikh", "Chaudhry", "Memon", "Qureshi",
    "Siddiqui",
];

pub const REVIEW_TEXTS: &[&str] = &[
    "Absolutely revolutionary! The immersion is unlike anything I've experienced.",
    "Great value for money, though the product gets warm after prolonged use.",
    "Frequent software glitches ruin the experience. Needs better QC.",
    "Worth every penny! The features make this product exceptional.",
];

/// Domain used for synthetic reviewer emails.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Year stamped on every review date.
pub const REVIEW_YEAR: i32 = 2024;

/// Inclusive window for review timestamps (unix seconds).
pub const REVIEW_TIMESTAMP_MIN: i64 = 1_700_000_000;
pub const REVIEW_TIMESTAMP_MAX: i64 = 1_730_000_000;

/// Review days stop at 28 so every month is valid.
pub const REVIEW_MAX_DAY: u32 = 28;

/// Prices are drawn in steps of this many units.
pub const PRICE_STEP: i64 = 100;
pub const ORIGINAL_PRICE_MIN: i64 = 5_000;
pub const ORIGINAL_PRICE_MAX: i64 = 9_000;
pub const DISCOUNT_MIN: i64 = 1_000;
pub const DISCOUNT_MAX: i64 = 4_000;

/// Upper bound for a non-zero stock quantity.
pub const MAX_STOCK: u32 = 50;

/// One in this many products is featured.
pub const FEATURED_ONE_IN: u32 = 7;

/// Inclusive bounds on review IDs attached to one product.
pub const MIN_REVIEWS_PER_PRODUCT: usize = 3;
pub const MAX_REVIEWS_PER_PRODUCT: usize = 6;

pub const MODEL_YEAR_MIN: u16 = 2020;
pub const MODEL_YEAR_MAX: u16 = 2023;

/// Source tag written into product metadata.
pub const SOURCE_TAG: &str = "inventorySystem";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_space_exceeds_product_count() {
        let capacity = NAME_PREFIXES.len() * NAME_MIDDLES.len() * NAME_SUFFIXES.len();
        assert_eq!(capacity, 343);
        assert!(capacity > crate::PRODUCT_COUNT);
    }

    #[test]
    fn test_image_pool_covers_product_images() {
        assert_eq!(IMAGE_URLS.len(), 13);
        assert!(IMAGE_URLS.len() >= IMAGES_PER_PRODUCT);
        let unique: HashSet<_> = IMAGE_URLS.iter().collect();
        assert_eq!(unique.len(), IMAGE_URLS.len());
    }

    #[test]
    fn test_review_pool_covers_sample_size() {
        assert!(crate::REVIEW_COUNT >= MAX_REVIEWS_PER_PRODUCT);
        assert!(MIN_REVIEWS_PER_PRODUCT <= MAX_REVIEWS_PER_PRODUCT);
    }

    #[test]
    fn test_technical_specs_do_not_shadow_extra_fields() {
        for specs in TECHNICAL_SPECS {
            for (key, _) in specs.iter() {
                assert_ne!(*key, "expressDelivery");
                assert_ne!(*key, "modelYear");
            }
        }
    }
}
