use crate::serde_helpers;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a product. Issued at creation, monotonic with creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(ProductId)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

/// Availability status.
///
/// Text other than the two known labels is kept verbatim in `Other`, so records written
/// by the backend round-trip unchanged. An absent status is `Other("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    Other(String),
}

impl ProductStatus {
    const IN_STOCK: &'static str = "In Stock";
    const OUT_OF_STOCK: &'static str = "Out of Stock";

    /// Maps stored status text, falling back to `Other` for anything unrecognized.
    pub fn from_wire(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.as_str() {
            Self::IN_STOCK => ProductStatus::InStock,
            Self::OUT_OF_STOCK => ProductStatus::OutOfStock,
            _ => ProductStatus::Other(text),
        }
    }

    /// The text as stored.
    pub fn wire(&self) -> &str {
        match self {
            ProductStatus::InStock => Self::IN_STOCK,
            ProductStatus::OutOfStock => Self::OUT_OF_STOCK,
            ProductStatus::Other(text) => text,
        }
    }

    pub fn label(&self) -> &str {
        if self.is_unset() {
            "Unknown"
        } else {
            self.wire()
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ProductStatus::Other(text) if text.is_empty())
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Other(String::new())
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = serde_helpers::string(deserializer)?;
        Ok(ProductStatus::from_wire(text))
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    /// Accepts the display labels as well as CLI-friendly spellings (`in-stock`, `out_of_stock`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "instock" => Ok(ProductStatus::InStock),
            "outofstock" => Ok(ProductStatus::OutOfStock),
            _ => Err(format!("Invalid status: {} (expected in-stock or out-of-stock)", s)),
        }
    }
}

/// A product record as supplied by the backend.
///
/// Every field but `id` falls back to its default when absent, null or of the wrong
/// type, so partially populated records load without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub sku: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::option_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::count")]
    pub stock: u32,
    /// Utilization percentage, 0 to 100. Only used for severity tiering.
    #[serde(default, deserialize_with = "serde_helpers::f64_or_zero")]
    pub capacity: f64,
    #[serde(default, skip_serializing_if = "ProductStatus::is_unset")]
    pub status: ProductStatus,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub image: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub brand: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub location: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub weight: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub updated_at: String,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            category: String::new(),
            price: None,
            stock: 0,
            capacity: 0.0,
            status: ProductStatus::default(),
            image: String::new(),
            brand: String::new(),
            location: String::new(),
            weight: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Price used for ordering: a missing price counts as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Capacity clamped into 0..=100.
    pub fn capacity_percent(&self) -> f64 {
        if self.capacity.is_nan() {
            0.0
        } else {
            self.capacity.clamp(0.0, 100.0)
        }
    }
}

/// Raw create-form input. Numeric fields hold the text as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub capacity: String,
    pub status: ProductStatus,
    pub image: String,
    pub brand: String,
    pub location: String,
    pub weight: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            status: ProductStatus::InStock,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_loads_with_defaults() {
        let product: Product = serde_json::from_str(r#"{"id": 7, "name": "Widget"}"#).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.sku, "");
        assert_eq!(product.price, None);
        assert_eq!(product.price_or_zero(), 0.0);
        assert!(product.status.is_unset());
        assert_eq!(product.status.label(), "Unknown");
    }

    #[test]
    fn null_and_mistyped_fields_load_with_defaults() {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": null, "category": null, "stock": -1, "price": "x",
                "capacity": "high", "status": null, "weight": 2.5}"#,
        )
        .unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.category, "");
        assert_eq!(product.stock, 0);
        assert_eq!(product.price, None);
        assert_eq!(product.capacity, 0.0);
        assert!(product.status.is_unset());
        assert_eq!(product.weight, "2.5");
    }

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "status": "Out of Stock", "updatedAt": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert_eq!(product.updated_at, "2024-05-01");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], "Out of Stock");
        assert_eq!(json["updatedAt"], "2024-05-01");
    }

    #[test]
    fn unrecognized_status_is_kept_verbatim() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "status": "Discontinued"}"#).unwrap();
        assert_eq!(product.status, ProductStatus::Other("Discontinued".into()));
        assert_eq!(product.status.label(), "Discontinued");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], "Discontinued");
    }

    #[test]
    fn absent_status_is_not_written_back() {
        let product: Product = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("status").is_none());
    }

    #[test]
    fn status_parses_cli_spellings() {
        assert_eq!("in-stock".parse::<ProductStatus>(), Ok(ProductStatus::InStock));
        assert_eq!("Out of Stock".parse::<ProductStatus>(), Ok(ProductStatus::OutOfStock));
        assert_eq!("out_of_stock".parse::<ProductStatus>(), Ok(ProductStatus::OutOfStock));
        assert!("maybe".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn capacity_is_clamped() {
        let p = Product::new(ProductId(1), "A", "A1").with_capacity(140.0);
        assert_eq!(p.capacity_percent(), 100.0);
        let p = p.with_capacity(-5.0);
        assert_eq!(p.capacity_percent(), 0.0);
    }
}
