//! # Validation Module
//!
//! The storefront checks presence only. A product needs a name, a price
//! and an image before it can join the catalog; nothing else is checked.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Submit Flow                                        │
//! │                                                                         │
//! │  Admin clicks "add product"                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_submission(draft, preview) ← THIS MODULE                     │
//! │       │                                                                 │
//! │       ├── name / price empty?  ─┐                                       │
//! │       ├── no image preview?    ─┴─► Incomplete { missing }            │
//! │       │                               → toast, catalog untouched        │
//! │       │                                                                 │
//! │       └── OK → Product::from_draft → catalog.push                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price, stock and discount are never parsed; "abc" is an acceptable price.

use crate::error::ValidationError;
use crate::image::ImageData;
use crate::types::DraftProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a draft may be committed.
///
/// Only empty text is missing; a name of spaces is still a name.
///
/// ## Example
/// ```rust
/// use flexnesse_core::validation::validate_submission;
/// use flexnesse_core::{DraftProduct, ImageData};
///
/// let mut draft = DraftProduct::default();
/// draft.name = "Shirt".to_string();
/// draft.price = "100".to_string();
///
/// assert!(validate_submission(&draft, None).is_err());
///
/// let image = ImageData::encode("image/png", b"png");
/// assert!(validate_submission(&draft, Some(&image)).is_ok());
/// ```
pub fn validate_submission(
    draft: &DraftProduct,
    image: Option<&ImageData>,
) -> ValidationResult<()> {
    let mut missing = Vec::new();

    if draft.name.is_empty() {
        missing.push("name");
    }
    if draft.price.is_empty() {
        missing.push("price");
    }
    if image.map_or(true, ImageData::is_empty) {
        missing.push("image");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Incomplete { missing })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
