//! # checkout-core: Order Calculation for the Checkout
//!
//! This crate turns a cart (one main product plus any selected order bumps)
//! into order totals. It contains only pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout page / checkout-cli                       │   │
//! │  │   Bump selection ──► Order summary ──► Coupon field ──► Pay     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartLineItem[] / coupon code           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  cart    │  │  engine  │  │  coupon  │  │  validation  │   │   │
//! │  │   │ assemble │─►│ calculate│◄─│  table   │  │  (opt-in)    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `calculate_order` and `apply_coupon`
//! - [`coupon`] - Known coupon codes
//! - [`cart`] - Builds carts from checkout configuration
//! - [`installments`] - Installment options for display
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (CartLineItem, Product, CheckoutConfig)
//! - [`validation`] - Cart validation, separate from calculation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{apply_coupon, calculate_order, CartLineItem};
//!
//! let order = calculate_order(&[
//!     CartLineItem::main("p1", "Course", 49700),
//!     CartLineItem::bump("p2", "Ebook", 9700),
//!     CartLineItem::bump("p3", "Mentoring", 29700),
//! ]);
//! assert_eq!(order.final_total.to_string(), "R$ 851,60");
//!
//! let order = apply_coupon(&order, "PROMO20");
//! assert_eq!(order.discount.to_string(), "R$ 209,72");
//! assert_eq!(order.final_total.to_string(), "R$ 681,28");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod engine;
pub mod error;
pub mod installments;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coupon::Coupon;
pub use engine::{apply_coupon, calculate_order, OrderCalculation};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
