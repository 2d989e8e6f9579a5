//! # Cart Assembly
//!
//! Builds the line items the engine consumes from checkout configuration and
//! the buyer's bump selection.
//!
//! ## User Workflow
//! ```text
//! Checkout page opens
//!      │
//!      ▼
//! offered_bumps(checkout, catalog)  → bump cards shown to the buyer
//!      │
//!      ▼
//! Buyer ticks / unticks bumps       → selected ids
//!      │
//!      ▼
//! assemble_cart(main, offered, selected) ← THIS MODULE
//!      │
//!      ▼
//! calculate_order(cart)             → fresh OrderCalculation
//! ```
//!
//! Each call builds the cart from scratch; nothing is cached between
//! selections.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{CartLineItem, CheckoutConfig, ItemKind, Product};

/// Builds the cart: the main product first, then every selected bump in
/// selection order.
///
/// Selected ids that are not among `order_bumps` are skipped.
///
/// ## Example
/// ```rust
/// use checkout_core::cart::assemble_cart;
/// use checkout_core::{ItemKind, Product};
///
/// let product = |id: &str, price| Product {
///     id: id.to_string(),
///     name: id.to_string(),
///     price_cents: price,
///     kind: ItemKind::Bump,
///     description: None,
///     original_price_cents: None,
///     is_active: true,
/// };
///
/// let main = product("course", 49700);
/// let bumps = vec![product("ebook", 9700), product("mentoring", 29700)];
/// let selected = vec!["mentoring".to_string(), "gone".to_string()];
///
/// let cart = assemble_cart(&main, &bumps, &selected);
/// assert_eq!(cart.len(), 2);
/// assert_eq!(cart[0].kind, ItemKind::Main);
/// assert_eq!(cart[1].id, "mentoring");
/// ```
pub fn assemble_cart(
    main: &Product,
    order_bumps: &[Product],
    selected: &[String],
) -> Vec<CartLineItem> {
    let mut cart = Vec::with_capacity(1 + selected.len());
    cart.push(main.to_line_item(ItemKind::Main));

    for bump_id in selected {
        match order_bumps.iter().find(|bump| &bump.id == bump_id) {
            Some(bump) => cart.push(bump.to_line_item(ItemKind::Bump)),
            None => debug!(bump_id = %bump_id, "Selected bump not offered, skipping"),
        }
    }

    cart
}

/// Resolves the bumps a checkout offers, in configured order.
///
/// Ids missing from `catalog` are skipped.
pub fn offered_bumps(checkout: &CheckoutConfig, catalog: &[Product]) -> Vec<Product> {
    checkout
        .allowed_order_bumps
        .iter()
        .filter_map(|id| {
            let found = catalog.iter().find(|product| &product.id == id);
            if found.is_none() {
                debug!(
                    checkout = %checkout.id,
                    product_id = %id,
                    "Configured bump missing from catalog"
                );
            }
            found.cloned()
        })
        .collect()
}

/// Finds a checkout's main product.
pub fn main_product<'a>(
    checkout: &CheckoutConfig,
    catalog: &'a [Product],
) -> CoreResult<&'a Product> {
    catalog
        .iter()
        .find(|product| product.id == checkout.main_product_id)
        .ok_or_else(|| CoreError::ProductNotFound(checkout.main_product_id.clone()))
}

// =============================================================================
// Unit Tests
// =============================================================================
