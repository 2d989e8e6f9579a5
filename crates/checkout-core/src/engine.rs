//! # Order Calculation Engine
//!
//! Turns a cart into order totals.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_order(items)                               │
//! │                                                                         │
//! │  items ──┬── kind = main ──► Σ price ──► subtotal                       │
//! │          ├── kind = bump ──► Σ price ──► bump_total                     │
//! │          └── (unknown)  ──► ignored, still kept in `items`              │
//! │                                                                         │
//! │  bump count >= 2 ? ──► discount = 10% of bump_total                     │
//! │                                                                         │
//! │  final_total = subtotal + bump_total - discount                         │
//! │                                                                         │
//! │                    apply_coupon(calculation, code)                      │
//! │                                                                         │
//! │  unknown code ──► calculation returned unchanged                        │
//! │  known code   ──► discount += coupon% of the current final_total        │
//! │                   final_total = subtotal + bump_total - discount        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both operations are pure and infallible. Nothing is validated here; run
//! [`crate::validation`] first when the cart is about to be submitted.
//!
//! ## Coupon Stacking
//! The coupon percentage applies to the already discounted `final_total`, so
//! coupons compound on top of the bundle discount and on top of each other.
//! Applying the same coupon twice discounts twice. Callers that allow one
//! coupon per order must enforce that themselves.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::coupon::Coupon;
use crate::money::Money;
use crate::types::CartLineItem;

/// Minimum number of bumps that unlocks the bundle discount.
pub const BUNDLE_MIN_BUMPS: usize = 2;

/// Bundle discount on the bump total, in basis points (10%).
pub const BUNDLE_DISCOUNT_BPS: u32 = 1000;

// =============================================================================
// Order Calculation
// =============================================================================

/// Snapshot of a cart's totals at one point in time.
///
/// Recomputed whenever the cart changes; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderCalculation {
    /// Sum of all `main` item prices.
    pub subtotal: Money,
    /// Sum of all `bump` item prices.
    pub bump_total: Money,
    /// Bundle discount plus any coupon discounts.
    pub discount: Money,
    /// `subtotal + bump_total - discount`.
    pub final_total: Money,
    /// The input cart, verbatim.
    pub items: Vec<CartLineItem>,
}

impl OrderCalculation {
    /// `subtotal + bump_total`.
    #[inline]
    pub fn total_before_discount(&self) -> Money {
        self.subtotal + self.bump_total
    }

    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Computes order totals for a cart.
///
/// ## Example
/// ```rust
/// use checkout_core::{calculate_order, CartLineItem};
///
/// let order = calculate_order(&[
///     CartLineItem::main("p1", "Course", 49700),
///     CartLineItem::bump("p2", "Ebook", 9700),
///     CartLineItem::bump("p3", "Mentoring", 29700),
/// ]);
///
/// assert_eq!(order.bump_total.cents(), 39400);
/// assert_eq!(order.discount.cents(), 3940);
/// assert_eq!(order.final_total.cents(), 85160);
/// ```
pub fn calculate_order(items: &[CartLineItem]) -> OrderCalculation {
    let (mains, bumps): (Vec<&CartLineItem>, Vec<&CartLineItem>) = items
        .iter()
        .filter(|item| item.kind.is_main() || item.kind.is_bump())
        .partition(|item| item.kind.is_main());

    let subtotal: Money = mains.iter().map(|item| item.price()).sum();
    let bump_total: Money = bumps.iter().map(|item| item.price()).sum();

    let discount = if bumps.len() >= BUNDLE_MIN_BUMPS {
        debug!(
            bumps = bumps.len(),
            %bump_total,
            "Bundle discount applied to order bumps"
        );
        bump_total.percentage(BUNDLE_DISCOUNT_BPS)
    } else {
        Money::zero()
    };

    let final_total = subtotal + bump_total - discount;

    debug!(
        items = items.len(),
        mains = mains.len(),
        bumps = bumps.len(),
        %subtotal,
        %bump_total,
        %discount,
        %final_total,
        "Order calculated"
    );

    OrderCalculation {
        subtotal,
        bump_total,
        discount,
        final_total,
        items: items.to_vec(),
    }
}

/// Layers a coupon on top of a previous calculation.
///
/// Unknown codes return an identical copy of `calculation`.
///
/// ## Example
/// ```rust
/// use checkout_core::{apply_coupon, calculate_order, CartLineItem};
///
/// let order = calculate_order(&[CartLineItem::main("p1", "Course", 10000)]);
///
/// let discounted = apply_coupon(&order, "desconto10");
/// assert_eq!(discounted.final_total.cents(), 9000);
///
/// let unchanged = apply_coupon(&order, "XYZ123");
/// assert_eq!(unchanged, order);
/// ```
pub fn apply_coupon(calculation: &OrderCalculation, coupon_code: &str) -> OrderCalculation {
    let Some(coupon) = Coupon::parse(coupon_code) else {
        debug!(code = coupon_code, "Unknown coupon ignored");
        return calculation.clone();
    };

    let coupon_discount = calculation.final_total.percentage(coupon.discount_bps());
    let mut discount = calculation.discount;
    discount += coupon_discount;
    let final_total = calculation.total_before_discount() - discount;

    debug!(
        %coupon,
        %coupon_discount,
        %discount,
        %final_total,
        "Coupon applied"
    );

    OrderCalculation {
        discount,
        final_total,
        ..calculation.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
