use serde::{Deserialize, Serialize};

/// Display rank assigned to products that carry none in the payload.
/// Unranked products sort after every ranked one.
pub const DEFAULT_RANK: u32 = 999;

/// Wood species of a product: a stable filter key plus a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wood {
    pub key: String,
    pub label: String,
}

/// Product photo metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default = "ProductImage::default_width")]
    pub width: u32,
    #[serde(default = "ProductImage::default_height")]
    pub height: u32,
}

impl ProductImage {
    fn default_width() -> u32 {
        800
    }

    fn default_height() -> u32 {
        600
    }
}

impl Default for ProductImage {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: String::new(),
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

/// Physical dimensions, in millimetres. Either field may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "widthMm", default, skip_serializing_if = "Option::is_none")]
    pub width_mm: Option<f64>,
    #[serde(
        rename = "thicknessMm",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thickness_mm: Option<f64>,
}

/// Extended information shown on the product detail page only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub care: Vec<String>,
    #[serde(rename = "longDescription", default)]
    pub long_description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// One entry of the catalog. Identity is `id`, unique within the catalog;
/// the loaded collection is a read-only snapshot for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rank: Option<u32>,
    pub wood: Wood,
    #[serde(default)]
    pub image: ProductImage,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

impl Product {
    /// Rank used for the popularity ordering, missing rank last.
    pub fn display_rank(&self) -> u32 {
        self.rank.unwrap_or(DEFAULT_RANK)
    }

    /// Only the first badge is ever displayed.
    pub fn first_badge(&self) -> Option<&str> {
        self.badges.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_payload() {
        let json = r#"{
            "id": "planche-chene",
            "name": "Planche classique",
            "description": "Planche à découper en chêne massif.",
            "price": 39.9,
            "rank": 1,
            "wood": { "key": "chene", "label": "Chêne" },
            "image": { "src": "assets/img/planche-chene.jpg", "alt": "Planche en chêne", "width": 800, "height": 600 },
            "badges": ["Bestseller", "Fabriqué à la main"],
            "details": {
                "features": ["Chêne massif"],
                "care": ["Essuyer après usage"],
                "longDescription": "Un grain serré et régulier.",
                "origin": "France — Jura",
                "dimensions": { "widthMm": 320, "thicknessMm": 22 }
            }
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product JSON");
        assert_eq!(product.id, "planche-chene");
        assert_eq!(product.display_rank(), 1);
        assert_eq!(product.first_badge(), Some("Bestseller"));
        let details = product.details.expect("details present");
        assert_eq!(details.origin, "France — Jura");
        let dims = details.dimensions.expect("dimensions present");
        assert_eq!(dims.width_mm, Some(320.0));
        assert_eq!(dims.thickness_mm, Some(22.0));
    }

    #[test]
    fn sparse_payload_gets_defaults() {
        let json = r#"{
            "id": "dessous-de-plat",
            "name": "Dessous de plat",
            "wood": { "key": "hetre", "label": "Hêtre" }
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid sparse JSON");
        assert_eq!(product.rank, None);
        assert_eq!(product.display_rank(), DEFAULT_RANK);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.first_badge(), None);
        assert!(product.details.is_none());
        assert_eq!(product.image.width, 800);
        assert_eq!(product.image.height, 600);
    }
}
