//! # Validation Module
//!
//! Cart validation, kept apart from the engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      When Validation Runs                               │
//! │                                                                         │
//! │  Buyer toggles bumps ──► calculate_order()        (no validation)       │
//! │                          speculative totals, shown immediately          │
//! │                                                                         │
//! │  Buyer submits order ──► validate_cart() ──► calculate_order()          │
//! │                          THIS MODULE           final totals             │
//! │                                                                         │
//! │  The engine never calls into this module: partial or odd carts still   │
//! │  get totals, and only the submitting caller decides to reject them.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::CartLineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single line item.
///
/// ## Rules
/// - `id` must not be empty
/// - `name` must not be empty
/// - price must be greater than zero
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_cart_item;
/// use checkout_core::CartLineItem;
///
/// assert!(validate_cart_item(&CartLineItem::main("p1", "Course", 49700)).is_ok());
/// assert!(validate_cart_item(&CartLineItem::main("p1", "Course", 0)).is_err());
/// assert!(validate_cart_item(&CartLineItem::main("", "Course", 49700)).is_err());
/// ```
pub fn validate_cart_item(item: &CartLineItem) -> ValidationResult<()> {
    if item.id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if item.name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if item.price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Boolean form of [`validate_cart_item`].
#[inline]
pub fn is_valid_cart_item(item: &CartLineItem) -> bool {
    validate_cart_item(item).is_ok()
}

/// Validates a cart ready for submission: every item valid and exactly one
/// main product.
pub fn validate_cart(items: &[CartLineItem]) -> ValidationResult<()> {
    items.iter().try_for_each(validate_cart_item)?;

    match items.iter().filter(|item| item.kind.is_main()).count() {
        0 => Err(ValidationError::MissingMainItem),
        1 => Ok(()),
        count => Err(ValidationError::MultipleMainItems { count }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item() {
        assert!(is_valid_cart_item(&CartLineItem::bump("b1", "Ebook", 1)));
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(
            validate_cart_item(&CartLineItem::main("", "Course", 100)),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );
        assert_eq!(
            validate_cart_item(&CartLineItem::main("p1", "", 100)),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_whitespace_fields_are_not_empty() {
        assert!(is_valid_cart_item(&CartLineItem::main(" ", " ", 100)));
    }

    #[test]
    fn test_non_positive_price() {
        assert!(!is_valid_cart_item(&CartLineItem::main("p1", "Course", 0)));
        assert!(!is_valid_cart_item(&CartLineItem::main("p1", "Course", -1)));
    }

    #[test]
    fn test_validate_cart_main_count() {
        assert_eq!(validate_cart(&[]), Err(ValidationError::MissingMainItem));
        assert_eq!(
            validate_cart(&[CartLineItem::bump("b1", "Ebook", 9700)]),
            Err(ValidationError::MissingMainItem)
        );
        assert_eq!(
            validate_cart(&[
                CartLineItem::main("p1", "Course", 49700),
                CartLineItem::main("p2", "Other", 49700),
            ]),
            Err(ValidationError::MultipleMainItems { count: 2 })
        );
        assert!(validate_cart(&[
            CartLineItem::main("p1", "Course", 49700),
            CartLineItem::bump("b1", "Ebook", 9700),
        ])
        .is_ok());
    }

    #[test]
    fn test_validate_cart_reports_first_bad_item() {
        let result = validate_cart(&[
            CartLineItem::main("p1", "Course", 49700),
            CartLineItem::bump("b1", "Ebook", 0),
        ]);
        assert!(matches!(result, Err(ValidationError::MustBePositive { .. })));
    }
}
