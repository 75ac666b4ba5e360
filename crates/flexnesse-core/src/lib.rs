//! # flexnesse-core: Pure Business Logic for the Flexnesse Storefront
//!
//! Domain types and rules for a small clothing storefront whose whole state
//! lives in memory. Nothing in here touches the file system, a timer or the
//! network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Flexnesse Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host renderer (web view)                     │   │
//! │  │     Store grid ──► Admin panel ──► Add-product form ──► Toast   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Screen view models                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    flexnesse-storefront                          │   │
//! │  │    AppState, add_to_cart, delete_product, submit_product, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ flexnesse-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   image   │  │  notice   │  │ validation│  │   │
//! │  │   │  Product  │  │ ImageData │  │  Notice   │  │  draft    │  │   │
//! │  │   │ CartEntry │  │ data URLs │  │  texts    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DraftProduct, CartEntry, View, label sets)
//! - [`image`] - Inline data URL images
//! - [`notice`] - User-facing notification texts
//! - [`error`] - Domain error types
//! - [`validation`] - Draft completeness rules
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use flexnesse_core::image::ImageData;
//! use flexnesse_core::types::{DraftProduct, Product};
//!
//! let mut draft = DraftProduct::default();
//! draft.name = "Shirt".to_string();
//! draft.price = "100".to_string();
//!
//! let image = ImageData::encode("image/png", b"\x89PNG");
//! let product = Product::from_draft(&draft, image, Utc::now()).unwrap();
//!
//! assert_eq!(product.name, "Shirt");
//! assert_eq!(product.discount, "0");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod image;
pub mod notice;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use image::ImageData;
pub use notice::Notice;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How long a notification stays on screen before it clears itself.
pub const NOTIFICATION_DISMISS_MS: u64 = 3000;

/// Quantity given to every cart entry.
///
/// Adding the same product twice yields two entries, never quantity 2.
pub const CART_ENTRY_QUANTITY: u32 = 1;

/// Default discount text for a fresh draft.
pub const DEFAULT_DISCOUNT: &str = "0";
