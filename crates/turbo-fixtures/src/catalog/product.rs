//! Product records and their nested blocks.

use std::fmt;

use crate::catalog::{Inventory, Pricing};
use crate::ids::{ProductId, ReviewId};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Storefront category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Smartwatch,
    Powerbank,
    Airbuds,
    GamingHeadset,
    WirelessCharger,
    BluetoothSpeaker,
    VrHeadset,
}

impl Category {
    /// Every category, in storefront menu order.
    pub const ALL: [Category; 7] = [
        Category::Smartwatch,
        Category::Powerbank,
        Category::Airbuds,
        Category::GamingHeadset,
        Category::WirelessCharger,
        Category::BluetoothSpeaker,
        Category::VrHeadset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smartwatch => "smartwatch",
            Category::Powerbank => "powerbank",
            Category::Airbuds => "airbuds",
            Category::GamingHeadset => "gaming-headset",
            Category::WirelessCharger => "wireless-charger",
            Category::BluetoothSpeaker => "bluetooth-speaker",
            Category::VrHeadset => "vr-headset",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Whether express delivery is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressDelivery {
    Available,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

/// A product document as loaded into the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Category tag.
    pub category: Category,
    /// Display name (unique within a fixture set).
    pub name: String,
    /// Original and current price.
    pub pricing: Pricing,
    /// Stock level.
    pub inventory: Inventory,
    /// Shown on the featured carousel.
    pub is_featured: bool,
    /// ISO-8601 creation time.
    pub created_at: String,
    /// Color variants.
    pub variants: Variants,
    /// Product images.
    pub media: Media,
    /// Descriptive content and linked reviews.
    pub specifications: Specifications,
    /// Bookkeeping block, hidden from storefront responses.
    pub metadata: Metadata,
}

impl Product {
    /// Review IDs linked to this product.
    pub fn review_ids(&self) -> &[ReviewId] {
        &self.specifications.review_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variants {
    pub has_color_options: bool,
    pub available_colors: Vec<String>,
}

impl Variants {
    /// Build color variants from a comma-separated palette.
    pub fn from_palette(palette: &str) -> Self {
        let available_colors = palette
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            has_color_options: true,
            available_colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub image_urls: Vec<String>,
    pub primary_image: String,
}

impl Media {
    /// Build media from an ordered image list; the first image is primary.
    ///
    /// Returns `None` for an empty list.
    pub fn from_images(image_urls: Vec<String>) -> Option<Self> {
        let primary_image = image_urls.first()?.clone();
        Some(Self {
            image_urls,
            primary_image,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub package_contents: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub technical_specs: TechnicalSpecs,
    pub review_ids: Vec<ReviewId>,
}

/// Free-form technical details plus the two fields every product carries.
///
/// Serialized as one flat object. Detail keys keep their table order and are
/// followed by `expressDelivery` and `modelYear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalSpecs {
    pub details: Vec<(String, String)>,
    pub express_delivery: ExpressDelivery,
    pub model_year: u16,
}

const EXPRESS_DELIVERY_KEY: &str = "expressDelivery";
const MODEL_YEAR_KEY: &str = "modelYear";

impl TechnicalSpecs {
    pub fn new(
        details: &[(&str, &str)],
        express_delivery: ExpressDelivery,
        model_year: u16,
    ) -> Self {
        Self {
            details: details
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            express_delivery,
            model_year,
        }
    }

    /// Look up a free-form detail by key.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for TechnicalSpecs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.details.len() + 2))?;
        for (key, value) in &self.details {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(EXPRESS_DELIVERY_KEY, &self.express_delivery)?;
        map.serialize_entry(MODEL_YEAR_KEY, &self.model_year)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TechnicalSpecs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TechnicalSpecsVisitor)
    }
}

struct TechnicalSpecsVisitor;

impl<'de> Visitor<'de> for TechnicalSpecsVisitor {
    type Value = TechnicalSpecs;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a technical specs object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut details = Vec::new();
        let mut express_delivery = None;
        let mut model_year = None;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                EXPRESS_DELIVERY_KEY => express_delivery = Some(access.next_value()?),
                MODEL_YEAR_KEY => model_year = Some(access.next_value()?),
                _ => {
                    if details.iter().any(|(k, _): &(String, String)| *k == key) {
                        return Err(de::Error::custom(format!("duplicate field `{}`", key)));
                    }
                    let value = access.next_value()?;
                    details.push((key, value));
                }
            }
        }

        Ok(TechnicalSpecs {
            details,
            express_delivery: express_delivery
                .ok_or_else(|| de::Error::missing_field(EXPRESS_DELIVERY_KEY))?,
            model_year: model_year.ok_or_else(|| de::Error::missing_field(MODEL_YEAR_KEY))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub last_updated: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::VrHeadset.as_str(), "vr-headset");
        assert_eq!(Category::from_str("toaster"), None);
    }

    #[test]
    fn test_variants_from_palette() {
        let variants = Variants::from_palette("Black, White, Silver, Gray");
        assert!(variants.has_color_options);
        assert_eq!(variants.available_colors, vec!["Black", "White", "Silver", "Gray"]);
    }

    #[test]
    fn test_media_primary_is_first() {
        let media = Media::from_images(vec!["/a.jpeg".into(), "/b.jpeg".into()]).unwrap();
        assert_eq!(media.primary_image, "/a.jpeg");
        assert!(Media::from_images(Vec::new()).is_none());
    }

    #[test]
    fn test_technical_specs_flatten() {
        let specs = TechnicalSpecs::new(
            &[("weight", "150g"), ("chargingTime", "2 hours")],
            ExpressDelivery::NotAvailable,
            2022,
        );
        let json = serde_json::to_value(&specs).unwrap();
        assert_eq!(json["weight"], "150g");
        assert_eq!(json["chargingTime"], "2 hours");
        assert_eq!(json["expressDelivery"], "Not Available");
        assert_eq!(json["modelYear"], 2022);

        let text = serde_json::to_string(&specs).unwrap();
        let back: TechnicalSpecs = serde_json::from_str(&text).unwrap();
        assert_eq!(back, specs);
        assert_eq!(back.detail("weight"), Some("150g"));
    }

    #[test]
    fn test_technical_specs_keep_table_order() {
        let specs = TechnicalSpecs::new(
            &[("material", "Plastic"), ("warranty", "1 year"), ("dimensions", "5x3x1 inches")],
            ExpressDelivery::Available,
            2020,
        );
        let text = serde_json::to_string(&specs).unwrap();
        let expected = concat!(
            r#"{"material":"Plastic","warranty":"1 year","dimensions":"5x3x1 inches","#,
            r#""expressDelivery":"Available","modelYear":2020}"#,
        );
        assert_eq!(text, expected);

        let back: TechnicalSpecs = serde_json::from_str(&text).unwrap();
        let keys: Vec<_> = back.details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["material", "warranty", "dimensions"]);
    }

    #[test]
    fn test_technical_specs_require_extra_fields() {
        let missing: Result<TechnicalSpecs, _> =
            serde_json::from_str(r#"{"weight": "150g", "expressDelivery": "Available"}"#);
        assert!(missing.is_err());

        let non_string: Result<TechnicalSpecs, _> = serde_json::from_str(
            r#"{"weight": 150, "expressDelivery": "Available", "modelYear": 2021}"#,
        );
        assert!(non_string.is_err());
    }
}
