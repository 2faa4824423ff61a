//! # Mutation Gateway
//!
//! [`add`] is the only way a collection grows. It validates a [`ProductDraft`], assigns a
//! fresh id, and returns a new collection with the product prepended. The input slice is
//! left untouched.
//!
//! ## Validation
//!
//! - `name` and `sku` must be non-empty after trimming.
//! - `price`, `stock` and `capacity` are parsed from the typed text. Blank means "not
//!   given" (no price, zero stock, zero capacity). Anything that does not parse rejects
//!   the whole submission; there is no silent coercion to zero.
//! - `price` must be finite and non-negative, `capacity` must lie in 0..=100.
//!
//! Rejections are returned as a [`CreateError`] so the form can stay open and show why.

use crate::model::{Product, ProductDraft, ProductId};
use chrono::{SecondsFormat, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreateError {
    #[error("{0} is required")]
    MissingField(DraftField),

    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: DraftField, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: DraftField, value: String },

    #[error("no product id is left above {0}")]
    IdsExhausted(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Sku,
    Price,
    Stock,
    Capacity,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftField::Name => "name",
            DraftField::Sku => "sku",
            DraftField::Price => "price",
            DraftField::Stock => "stock",
            DraftField::Capacity => "capacity",
        };
        f.write_str(s)
    }
}

/// Source of fresh product ids.
pub trait IdSource {
    /// Next unissued id, no lower than `floor`. `None` once ids run out.
    fn next_id(&mut self, floor: u64) -> Option<ProductId>;
}

/// Ids from the wall clock in epoch milliseconds, never repeating within the process.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self, floor: u64) -> Option<ProductId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.checked_add(1)?).max(floor);
        Some(ProductId(self.last))
    }
}

/// Counter-based ids, starting after a given value.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, floor: u64) -> Option<ProductId> {
        self.last = self.last.checked_add(1)?.max(floor);
        Some(ProductId(self.last))
    }
}

/// Outcome of a successful [`add`].
#[derive(Debug, Clone)]
pub struct Created {
    pub products: Vec<Product>,
    pub product: Product,
}

/// Validates `draft` and returns the collection with the new product in front.
pub fn add<I: IdSource + ?Sized>(
    products: &[Product],
    draft: &ProductDraft,
    ids: &mut I,
) -> Result<Created, CreateError> {
    let name = required(&draft.name, DraftField::Name)?;
    let sku = required(&draft.sku, DraftField::Sku)?;
    let price = parse_price(&draft.price)?;
    let stock = parse_stock(&draft.stock)?;
    let capacity = parse_capacity(&draft.capacity)?;

    let id = fresh_id(products, ids)?;

    let product = Product {
        id,
        name,
        sku,
        category: draft.category.trim().to_string(),
        price,
        stock,
        capacity,
        status: draft.status.clone(),
        image: draft.image.trim().to_string(),
        brand: draft.brand.trim().to_string(),
        location: draft.location.trim().to_string(),
        weight: draft.weight.trim().to_string(),
        updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    tracing::debug!(id = %product.id, sku = %product.sku, "product accepted");

    let mut next = Vec::with_capacity(products.len() + 1);
    next.push(product.clone());
    next.extend_from_slice(products);

    Ok(Created {
        products: next,
        product,
    })
}

/// An id greater than every id in `products`, so `newest` stays correct against ids
/// loaded from elsewhere.
fn fresh_id<I: IdSource + ?Sized>(
    products: &[Product],
    ids: &mut I,
) -> Result<ProductId, CreateError> {
    let floor = match products.iter().map(|p| p.id).max() {
        Some(max) => max.0.checked_add(1).ok_or(CreateError::IdsExhausted(max))?,
        None => 0,
    };
    ids.next_id(floor)
        .ok_or(CreateError::IdsExhausted(ProductId(floor.saturating_sub(1))))
}

fn required(value: &str, field: DraftField) -> Result<String, CreateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CreateError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_price(text: &str) -> Result<Option<f64>, CreateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: f64 = text.parse().map_err(|_| CreateError::InvalidNumber {
        field: DraftField::Price,
        value: text.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(CreateError::OutOfRange {
            field: DraftField::Price,
            value: text.to_string(),
        });
    }
    Ok(Some(value))
}

fn parse_stock(text: &str) -> Result<u32, CreateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    match text.parse::<i64>() {
        Ok(n) if n < 0 || n > i64::from(u32::MAX) => Err(CreateError::OutOfRange {
            field: DraftField::Stock,
            value: text.to_string(),
        }),
        Ok(n) => Ok(n as u32),
        Err(_) => Err(CreateError::InvalidNumber {
            field: DraftField::Stock,
            value: text.to_string(),
        }),
    }
}

fn parse_capacity(text: &str) -> Result<f64, CreateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = text.parse().map_err(|_| CreateError::InvalidNumber {
        field: DraftField::Capacity,
        value: text.to_string(),
    })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(CreateError::OutOfRange {
            field: DraftField::Capacity,
            value: text.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductStatus;

    fn existing() -> Vec<Product> {
        vec![
            Product::new(ProductId(1), "Widget", "W1"),
            Product::new(ProductId(2), "Gadget", "G1"),
        ]
    }

    #[test]
    fn prepends_new_product_with_fresh_id() {
        let products = existing();
        let mut ids = SequentialIds::starting_after(2);
        let mut draft = ProductDraft::new("  Sprocket ", "S1");
        draft.price = "12.50".into();
        draft.stock = "4".into();
        draft.category = "Parts".into();

        let created = add(&products, &draft, &mut ids).unwrap();

        assert_eq!(created.product.id, ProductId(3));
        assert_eq!(created.product.name, "Sprocket");
        assert_eq!(created.product.price, Some(12.5));
        assert_eq!(created.product.stock, 4);
        assert_eq!(created.product.status, ProductStatus::InStock);
        assert!(!created.product.updated_at.is_empty());

        let order: Vec<u64> = created.products.iter().map(|p| p.id.0).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn rejects_blank_name_and_sku() {
        let mut ids = SequentialIds::default();

        let err = add(&[], &ProductDraft::new("   ", "S1"), &mut ids).unwrap_err();
        assert_eq!(err, CreateError::MissingField(DraftField::Name));

        let err = add(&[], &ProductDraft::new("Sprocket", ""), &mut ids).unwrap_err();
        assert_eq!(err, CreateError::MissingField(DraftField::Sku));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let mut ids = SequentialIds::default();
        let mut draft = ProductDraft::new("Sprocket", "S1");
        draft.price = "twelve".into();

        let err = add(&[], &draft, &mut ids).unwrap_err();
        assert_eq!(
            err,
            CreateError::InvalidNumber {
                field: DraftField::Price,
                value: "twelve".into()
            }
        );
        assert_eq!(err.to_string(), "price must be a number, got \"twelve\"");

        draft.price = String::new();
        draft.stock = "4.5".into();
        assert!(matches!(
            add(&[], &draft, &mut ids),
            Err(CreateError::InvalidNumber {
                field: DraftField::Stock,
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut ids = SequentialIds::default();
        let mut draft = ProductDraft::new("Sprocket", "S1");

        draft.price = "-1".into();
        assert!(matches!(
            add(&[], &draft, &mut ids),
            Err(CreateError::OutOfRange {
                field: DraftField::Price,
                ..
            })
        ));

        draft.price = "NaN".into();
        assert!(matches!(
            add(&[], &draft, &mut ids),
            Err(CreateError::OutOfRange {
                field: DraftField::Price,
                ..
            })
        ));

        draft.price = String::new();
        draft.stock = "-3".into();
        assert!(matches!(
            add(&[], &draft, &mut ids),
            Err(CreateError::OutOfRange {
                field: DraftField::Stock,
                ..
            })
        ));

        draft.stock = String::new();
        draft.capacity = "101".into();
        assert!(matches!(
            add(&[], &draft, &mut ids),
            Err(CreateError::OutOfRange {
                field: DraftField::Capacity,
                ..
            })
        ));
    }

    #[test]
    fn blank_numbers_mean_not_given() {
        let mut ids = SequentialIds::default();
        let created = add(&[], &ProductDraft::new("Sprocket", "S1"), &mut ids).unwrap();
        assert_eq!(created.product.price, None);
        assert_eq!(created.product.stock, 0);
        assert_eq!(created.product.capacity, 0.0);
    }

    #[test]
    fn id_is_above_every_existing_id() {
        let products = vec![Product::new(ProductId(500), "Old", "O1")];
        let mut ids = SequentialIds::starting_after(10);

        let created = add(&products, &ProductDraft::new("New", "N1"), &mut ids).unwrap();
        assert_eq!(created.product.id, ProductId(501));
    }

    #[test]
    fn clock_ids_never_repeat() {
        let mut ids = ClockIds::new();
        let a = ids.next_id(0).unwrap();
        let b = ids.next_id(0).unwrap();
        let c = ids.next_id(0).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn clock_ids_jump_past_large_stored_ids() {
        let micros = ProductId(1_760_000_000_000_000);
        let products = vec![Product::new(micros, "Old", "O1")];
        let mut ids = ClockIds::new();

        let created = add(&products, &ProductDraft::new("New", "N1"), &mut ids).unwrap();
        assert_eq!(created.product.id, ProductId(micros.0 + 1));

        let next = add(&created.products, &ProductDraft::new("Next", "N2"), &mut ids).unwrap();
        assert_eq!(next.product.id, ProductId(micros.0 + 2));
    }

    #[test]
    fn ids_near_the_top_of_the_range() {
        let products = vec![Product::new(ProductId(u64::MAX - 1), "Old", "O1")];
        let mut ids = ClockIds::new();

        let created = add(&products, &ProductDraft::new("New", "N1"), &mut ids).unwrap();
        assert_eq!(created.product.id, ProductId(u64::MAX));

        let err = add(&created.products, &ProductDraft::new("Next", "N2"), &mut ids).unwrap_err();
        assert_eq!(err, CreateError::IdsExhausted(ProductId(u64::MAX)));
    }

    #[test]
    fn exhausted_source_is_an_error() {
        let mut ids = SequentialIds::starting_after(u64::MAX);
        let err = add(&[], &ProductDraft::new("New", "N1"), &mut ids).unwrap_err();
        assert!(matches!(err, CreateError::IdsExhausted(_)));
    }
}
