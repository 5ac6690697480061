//! Catalog and cart records as persisted in browser storage.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Card title used when a product has no notes.
pub const DEFAULT_PRODUCT_TITLE: &str = "Silk Saree";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque product identifier, unique within the catalog.
pub struct ProductId(String);

impl ProductId {
    /// Wraps an existing identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A catalog entry.
///
/// Decoding is lenient about records written by hand or by older builds: a missing or `null`
/// color reads as empty, and the price may be a number, a numeric string, or `null` (zero).
pub struct Product {
    /// Unique id.
    pub id: ProductId,
    /// Color name; never empty for records created through upload.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub color: String,
    /// Price in rupees, `>= 0`.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    /// Free-form description.
    #[serde(default)]
    pub notes: Option<String>,
    /// Uploaded image embedded as a `data:` URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Remote fallback image used by demo records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

impl Product {
    /// Image to display: the embedded upload if present, otherwise the sample reference.
    pub fn display_image(&self) -> Option<&str> {
        self.image.as_deref().or(self.sample.as_deref())
    }

    /// Card title: the notes when non-empty, otherwise [`DEFAULT_PRODUCT_TITLE`].
    pub fn title(&self) -> &str {
        non_empty(self.notes.as_deref()).unwrap_or(DEFAULT_PRODUCT_TITLE)
    }

    /// Alt text for the product image.
    pub fn image_alt(&self) -> String {
        format!("{} saree", self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Fields for a product that has not been assigned an id yet.
pub struct ProductDraft {
    /// Color name.
    pub color: String,
    /// Price in rupees.
    pub price: f64,
    /// Free-form description.
    pub notes: Option<String>,
    /// Embedded image.
    pub image: Option<String>,
    /// Remote fallback image.
    pub sample: Option<String>,
}

impl ProductDraft {
    /// Assigns a fresh id.
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::generate(),
            color: self.color,
            price: self.price,
            notes: self.notes,
            image: self.image,
            sample: self.sample,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A cart entry holding a snapshot of the product taken when it was first added.
pub struct CartLine {
    /// Id of the product this line was created from. Not kept in sync with the catalog.
    pub id: ProductId,
    /// Color at add time.
    pub color: String,
    /// Unit price at add time.
    pub price: f64,
    /// Notes at add time.
    #[serde(default)]
    pub notes: Option<String>,
    /// Display image resolved at add time.
    #[serde(default)]
    pub image: Option<String>,
    /// Quantity, always `>= 1`.
    pub qty: u32,
}

impl CartLine {
    /// Snapshots `product` into a new line with quantity 1.
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            color: product.color.clone(),
            price: product.price,
            notes: product.notes.clone(),
            image: product.display_image().map(str::to_string),
            qty: 1,
        }
    }

    /// `price * qty`.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    /// "notes — color" when notes are present, otherwise the color.
    pub fn title(&self) -> String {
        match non_empty(self.notes.as_deref()) {
            Some(notes) => format!("{notes} — {}", self.color),
            None => self.color.clone(),
        }
    }
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
    Null(()),
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(price) => Ok(price),
        RawPrice::Text(text) if text.trim().is_empty() => Ok(0.0),
        RawPrice::Text(text) => text.trim().parse().map_err(de::Error::custom),
        RawPrice::Null(()) => Ok(0.0),
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn product(notes: Option<&str>, image: Option<&str>, sample: Option<&str>) -> Product {
        Product {
            id: ProductId::new("p-1"),
            color: "Gold".to_string(),
            price: 5599.0,
            notes: notes.map(str::to_string),
            image: image.map(str::to_string),
            sample: sample.map(str::to_string),
        }
    }

    #[test]
    fn display_image_prefers_upload_over_sample() {
        assert_eq!(
            product(None, Some("data:image/png;base64,AA"), Some("https://x")).display_image(),
            Some("data:image/png;base64,AA")
        );
        assert_eq!(product(None, None, Some("https://x")).display_image(), Some("https://x"));
        assert_eq!(product(None, None, None).display_image(), None);
    }

    #[test]
    fn titles_fall_back_when_notes_are_blank() {
        assert_eq!(product(Some("Banarasi"), None, None).title(), "Banarasi");
        assert_eq!(product(Some(""), None, None).title(), DEFAULT_PRODUCT_TITLE);

        let line = CartLine::snapshot(&product(Some("Banarasi"), None, Some("https://x")));
        assert_eq!(line.title(), "Banarasi — Gold");
        assert_eq!(line.image.as_deref(), Some("https://x"));
        assert_eq!(CartLine::snapshot(&product(None, None, None)).title(), "Gold");
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }

    #[test]
    fn product_decodes_with_optional_fields_missing() {
        let decoded: Product =
            serde_json::from_str(r#"{"id":"a","color":"Gold","price":10}"#).expect("decode");
        assert_eq!(decoded, product(None, None, None).with_id("a").with_price(10.0));
    }

    #[test]
    fn product_decoding_tolerates_loose_field_types() {
        let decoded: Product = serde_json::from_str(
            r#"{"id":"a","color":null,"price":" 1250 ","notes":null,"tag":"ignored"}"#,
        )
        .expect("decode");
        assert_eq!(decoded.color, "");
        assert_eq!(decoded.price, 1250.0);

        let decoded: Product =
            serde_json::from_str(r#"{"id":"b","color":"Gold","price":null}"#).expect("decode");
        assert_eq!(decoded.price, 0.0);

        assert!(serde_json::from_str::<Product>(r#"{"id":"c","price":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Product>(r#"{"color":"Gold","price":1}"#).is_err());
    }

    impl Product {
        fn with_id(mut self, id: &str) -> Self {
            self.id = ProductId::new(id);
            self
        }

        fn with_price(mut self, price: f64) -> Self {
            self.price = price;
            self
        }
    }
}
