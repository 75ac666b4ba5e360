//! # Error Types
//!
//! Domain-specific error types for flexnesse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  flexnesse-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Draft completeness failures                    │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the host renderer sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Host                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one failure is ever shown to the shopper: a product submitted with
//! missing required fields. The rest exist for hosts that call handlers with
//! stale identifiers.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not (or no longer) in the catalog.
    ///
    /// ## When This Occurs
    /// - The host renders a card, the product is deleted from the admin
    ///   panel, then the stale card's "add to cart" fires
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields of a draft are empty.
    ///
    /// `missing` lists the field names in form order.
    #[error("required fields missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(1_700_000_000_000));
        assert_eq!(err.to_string(), "Product not found: 1700000000000");
    }

    #[test]
    fn test_incomplete_lists_fields() {
        let err = ValidationError::Incomplete {
            missing: vec!["name", "image"],
        };
        assert_eq!(err.to_string(), "required fields missing: name, image");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Incomplete {
            missing: vec!["price"],
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
