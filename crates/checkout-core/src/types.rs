//! # Domain Types
//!
//! Core domain types shared by the engine, the cart assembler and the
//! catalog-reading app layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CheckoutConfig  │   │    Product      │   │  CartLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │──►│  id             │       │
//! │  │  main_product_id│   │  name           │   │  name           │       │
//! │  │  allowed_order_ │   │  price_cents    │   │  price_cents    │       │
//! │  │    bumps        │   │  kind           │   │  kind           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ItemKind     │   │ CheckoutStatus  │   │ PaymentMethod   │       │
//! │  │  Main / Bump    │   │ Active/Inactive │   │ Pix / Card /    │       │
//! │  │  (Unknown)      │   │                 │   │ Boleto          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Kind
// =============================================================================

/// Distinguishes the purchased product from an add-on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// The primary product of the checkout.
    Main,
    /// An order bump: optional add-on offered next to the main product.
    Bump,
    /// Any kind string this build does not recognise.
    ///
    /// Such items are kept in the cart and in the calculation's `items`, but
    /// count towards neither the subtotal nor the bump total.
    #[serde(other)]
    Unknown,
}

impl ItemKind {
    #[inline]
    pub fn is_main(&self) -> bool {
        matches!(self, ItemKind::Main)
    }

    #[inline]
    pub fn is_bump(&self) -> bool {
        matches!(self, ItemKind::Bump)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One line of a checkout cart.
///
/// ## Snapshot Pattern
/// Name and price are copied from the product when the cart is assembled, so
/// a calculation always describes exactly what the buyer saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    /// Price in centavos.
    pub price_cents: i64,
    pub kind: ItemKind,
}

impl CartLineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        kind: ItemKind,
    ) -> Self {
        CartLineItem {
            id: id.into(),
            name: name.into(),
            price_cents,
            kind,
        }
    }

    /// Shorthand for a `Main` line.
    pub fn main(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Self::new(id, name, price_cents, ItemKind::Main)
    }

    /// Shorthand for a `Bump` line.
    pub fn bump(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Self::new(id, name, price_cents, ItemKind::Bump)
    }

    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product that a checkout can sell or offer as a bump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in centavos.
    pub price_cents: i64,
    pub kind: ItemKind,
    pub description: Option<String>,
    /// "De R$ X por R$ Y" anchor price, display only.
    pub original_price_cents: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Snapshot of this product as a cart line of the given kind.
    ///
    /// The kind comes from the checkout position, not from `self.kind`: a
    /// product is a bump because the checkout offers it as one.
    pub fn to_line_item(&self, kind: ItemKind) -> CartLineItem {
        CartLineItem::new(self.id.clone(), self.name.clone(), self.price_cents, kind)
    }
}

// =============================================================================
// Checkout Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Pix,
    CreditCard,
    Boleto,
}

/// A configured checkout page: one main product plus the bumps it may offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutConfig {
    pub id: String,
    pub name: String,
    pub main_product_id: String,
    /// Product ids offered as order bumps, in display order.
    #[serde(default)]
    pub allowed_order_bumps: Vec<String>,
    #[serde(default)]
    pub status: CheckoutStatus,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

impl CheckoutConfig {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == CheckoutStatus::Active
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ItemKind::Main).unwrap(), "\"main\"");
        assert_eq!(serde_json::to_string(&ItemKind::Bump).unwrap(), "\"bump\"");
    }

    #[test]
    fn test_unrecognised_kind_deserializes_as_unknown() {
        let item: CartLineItem = serde_json::from_str(
            r#"{"id":"x","name":"Gift","price_cents":100,"kind":"upsell"}"#,
        )
        .unwrap();
        assert_eq!(item.kind, ItemKind::Unknown);
    }

    #[test]
    fn test_line_item_constructors() {
        let main = CartLineItem::main("p1", "Course", 49700);
        assert!(main.kind.is_main());
        assert_eq!(main.price(), Money::from_cents(49700));

        let bump = CartLineItem::bump("p2", "Ebook", 9700);
        assert!(bump.kind.is_bump());
    }

    #[test]
    fn test_product_to_line_item_uses_given_kind() {
        let product = Product {
            id: "prod_02".to_string(),
            name: "Ebook".to_string(),
            price_cents: 9700,
            kind: ItemKind::Main,
            description: None,
            original_price_cents: None,
            is_active: true,
        };
        let line = product.to_line_item(ItemKind::Bump);
        assert_eq!(line, CartLineItem::bump("prod_02", "Ebook", 9700));
    }

    #[test]
    fn test_checkout_defaults() {
        let checkout: CheckoutConfig = serde_json::from_str(
            r#"{"id":"chk_01","name":"Curso","main_product_id":"prod_01"}"#,
        )
        .unwrap();
        assert!(checkout.is_active());
        assert!(checkout.allowed_order_bumps.is_empty());
        assert!(checkout.payment_methods.is_empty());
    }

    #[test]
    fn test_payment_method_wire_names() {
        let methods: Vec<PaymentMethod> =
            serde_json::from_str(r#"["pix","credit_card","boleto"]"#).unwrap();
        assert_eq!(
            methods,
            vec![PaymentMethod::Pix, PaymentMethod::CreditCard, PaymentMethod::Boleto]
        );
    }
}
