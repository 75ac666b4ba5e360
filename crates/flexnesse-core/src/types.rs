//! # Domain Types
//!
//! Core domain types used throughout the Flexnesse storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DraftProduct   │──►│    Product      │──►│   CartEntry     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name, price    │   │  id (millis)    │   │  product copy   │       │
//! │  │  sizes, colors  │   │  image (data:)  │   │  quantity = 1   │       │
//! │  └─────────────────┘   │  created_at     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │      Size       │   │     Color       │       │
//! │  │  5 fixed labels │   │  XS .. XXL      │   │  6 fixed labels │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text-Typed Fields
//! `price`, `stock` and `discount` are kept as the text the admin typed.
//! They are displayed, never computed with, so nothing parses them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::image::ImageData;
use crate::validation::validate_submission;
use crate::{CART_ENTRY_QUANTITY, DEFAULT_DISCOUNT};

// =============================================================================
// Product Id
// =============================================================================

/// Product identifier derived from the creation time in milliseconds.
///
/// Two products created in the same millisecond share an id; nothing
/// enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] i64);

impl ProductId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        ProductId(value)
    }

    /// Id for a product created at `at`.
    #[inline]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        ProductId(at.timestamp_millis())
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Fixed Label Sets
// =============================================================================

/// Product category. The storefront knows exactly five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Shirts,
    Pants,
    Jackets,
    Shoes,
    Accessories,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Shirts,
        Category::Pants,
        Category::Jackets,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Label shown to shoppers.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Shirts => "قمصان",
            Category::Pants => "بناطيل",
            Category::Jackets => "جواكت",
            Category::Shoes => "أحذية",
            Category::Accessories => "إكسسوارات",
        }
    }
}

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    pub const fn label(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }
}

/// Garment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
    Red,
    Blue,
    Green,
    Gray,
}

impl Color {
    /// Every color, in display order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Black,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Gray,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Color::White => "أبيض",
            Color::Black => "أسود",
            Color::Red => "أحمر",
            Color::Blue => "أزرق",
            Color::Green => "أخضر",
            Color::Gray => "رمادي",
        }
    }
}

/// Adds `item` if absent, removes it if present. The result stays sorted
/// in the set's declaration order.
fn toggle_in<T: Copy + Ord>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
        items.sort();
    }
}

// =============================================================================
// View
// =============================================================================

/// Which screen the storefront shows.
///
/// Every view is reachable from every other; there are no guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum View {
    /// Shopper-facing product grid.
    #[default]
    Store,
    /// Product management panel.
    Admin,
    /// New product form.
    AddProduct,
}

// =============================================================================
// Draft Product
// =============================================================================

/// Form buffer for a product that has not been added yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftProduct {
    pub name: String,
    pub price: String,
    pub description: String,
    /// Unset until the admin picks one.
    pub category: Option<Category>,
    pub sizes: Vec<Size>,
    pub colors: Vec<Color>,
    pub stock: String,
    pub discount: String,
}

impl Default for DraftProduct {
    fn default() -> Self {
        DraftProduct {
            name: String::new(),
            price: String::new(),
            description: String::new(),
            category: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: String::new(),
            discount: DEFAULT_DISCOUNT.to_string(),
        }
    }
}

impl DraftProduct {
    pub fn toggle_size(&mut self, size: Size) {
        toggle_in(&mut self.sizes, size);
    }

    pub fn toggle_color(&mut self, color: Color) {
        toggle_in(&mut self.colors, color);
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: Option<Category>,
    pub sizes: Vec<Size>,
    pub colors: Vec<Color>,
    pub stock: String,
    pub discount: String,
    /// Inline data URL, never a reference to stored media.
    pub image: ImageData,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Commits a draft as a product created at `created_at`.
    ///
    /// ## Rules
    /// - `name`, `price` and `image` must be non-empty
    /// - The id is the creation time in milliseconds
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use flexnesse_core::{DraftProduct, ImageData, Product};
    ///
    /// let draft = DraftProduct::default();
    /// let image = ImageData::encode("image/png", b"png");
    /// assert!(Product::from_draft(&draft, image, Utc::now()).is_err());
    /// ```
    pub fn from_draft(
        draft: &DraftProduct,
        image: ImageData,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_submission(draft, Some(&image))?;

        Ok(Product {
            id: ProductId::from_timestamp(created_at),
            name: draft.name.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            category: draft.category,
            sizes: draft.sizes.clone(),
            colors: draft.colors.clone(),
            stock: draft.stock.clone(),
            discount: draft.discount.clone(),
            image,
            created_at,
        })
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A product copy placed in the cart.
///
/// Uses the snapshot pattern: later edits or deletion of the catalog
/// product do not touch entries already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn from_product(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: CART_ENTRY_QUANTITY,
        }
    }
}

// =============================================================================
// Notification
// =============================================================================

/// The single toast slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub visible: bool,
    pub message: String,
}

impl Notification {
    pub fn shown(message: impl Into<String>) -> Self {
        Notification {
            visible: true,
            message: message.into(),
        }
    }

    /// Cleared slot: invisible with an empty message.
    pub fn hidden() -> Self {
        Notification::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shirt_draft() -> DraftProduct {
        DraftProduct {
            name: "Shirt".to_string(),
            price: "100".to_string(),
            ..DraftProduct::default()
        }
    }

    #[test]
    fn test_draft_default() {
        let draft = DraftProduct::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.category, None);
        assert_eq!(draft.discount, "0");
    }

    #[test]
    fn test_product_id_from_timestamp() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(ProductId::from_timestamp(at).value(), 1_700_000_000_123);
    }

    #[test]
    fn test_product_from_draft() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let image = ImageData::encode("image/png", b"png");
        let product = Product::from_draft(&shirt_draft(), image.clone(), at).unwrap();

        assert_eq!(product.id, ProductId::new(1_700_000_000_000));
        assert_eq!(product.name, "Shirt");
        assert_eq!(product.price, "100");
        assert_eq!(product.image, image);
        assert_eq!(product.created_at, at);
    }

    #[test]
    fn test_product_from_draft_rejects_empty_image() {
        let result = Product::from_draft(&shirt_draft(), ImageData::default(), Utc::now());
        assert_eq!(
            result.unwrap_err(),
            ValidationError::Incomplete {
                missing: vec!["image"]
            }
        );
    }

    #[test]
    fn test_toggle_keeps_canonical_order() {
        let mut draft = DraftProduct::default();
        draft.toggle_size(Size::Xl);
        draft.toggle_size(Size::S);
        draft.toggle_size(Size::M);
        assert_eq!(draft.sizes, vec![Size::S, Size::M, Size::Xl]);

        draft.toggle_size(Size::M);
        assert_eq!(draft.sizes, vec![Size::S, Size::Xl]);

        draft.toggle_color(Color::Gray);
        draft.toggle_color(Color::White);
        assert_eq!(draft.colors, vec![Color::White, Color::Gray]);
    }

    #[test]
    fn test_cart_entry_quantity_is_one() {
        let product = Product::from_draft(
            &shirt_draft(),
            ImageData::encode("image/png", b"png"),
            Utc::now(),
        )
        .unwrap();
        let entry = CartEntry::from_product(&product);
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.product, product);
    }

    #[test]
    fn test_label_sets() {
        assert_eq!(Category::ALL.len(), 5);
        assert_eq!(Category::Shirts.label(), "قمصان");
        assert_eq!(Size::Xxl.label(), "XXL");
        assert_eq!(Color::Gray.label(), "رمادي");
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(serde_json::to_string(&View::AddProduct).unwrap(), "\"addProduct\"");
        assert_eq!(View::default(), View::Store);
    }

    #[test]
    fn test_cart_entry_flattens_product() {
        let product = Product::from_draft(
            &shirt_draft(),
            ImageData::encode("image/png", b"png"),
            Utc.timestamp_millis_opt(5).unwrap(),
        )
        .unwrap();
        let json = serde_json::to_value(CartEntry::from_product(&product)).unwrap();
        assert_eq!(json["name"], "Shirt");
        assert_eq!(json["id"], 5);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["sizes"], serde_json::json!([]));
    }
}
