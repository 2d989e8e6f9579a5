//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog and coupon lookups                     │
//! │  └── ValidationError  - Cart item validation failures                  │
//! │                                                                         │
//! │  checkout-cli errors (app crate)                                       │
//! │  └── CliError         - Config, catalog file, output failures          │
//! │                                                                         │
//! │  NOTE: calculate_order / apply_coupon never return any of these.       │
//! │        Validation is a separate step callers opt into.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the lookup helpers around the engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Coupon code is not one of the known codes.
    ///
    /// Only produced by `Coupon::from_str`. `apply_coupon` ignores unknown
    /// codes instead.
    #[error("Unknown coupon code: {0}")]
    UnknownCoupon(String),

    /// Product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout id does not exist in the catalog.
    #[error("Checkout not found: {0}")]
    CheckoutNotFound(String),

    /// Checkout exists but is switched off.
    #[error("Checkout {0} is inactive")]
    CheckoutInactive(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Cart item validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// The cart has no main product.
    #[error("cart must contain a main product")]
    MissingMainItem,

    /// The cart has more than one main product.
    #[error("cart must contain exactly one main product, found {count}")]
    MultipleMainItems { count: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
