//! # Quotes
//!
//! Turns a checkout id, a bump selection and an optional coupon into a quote.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QuoteRequest                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.active_checkout() ──► main_product() + offered_bumps()         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  assemble_cart() ──► validate_cart() ──► calculate_order()              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_coupon() (at most once, code trimmed first)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Quote { id, created_at, calculation, installments }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use checkout_core::cart::assemble_cart;
use checkout_core::installments::{installment_options, Installment};
use checkout_core::validation::validate_cart;
use checkout_core::{
    apply_coupon, calculate_order, Coupon, CoreError, ItemKind, OrderCalculation, PaymentMethod,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::CliResult;

/// What the buyer picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub checkout_id: String,
    /// Selected bump product ids, in selection order.
    pub bumps: Vec<String>,
    /// Coupon code as typed. Surrounding whitespace is ignored.
    pub coupon: Option<String>,
}

/// A priced order, ready to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub checkout_id: String,
    pub checkout_name: String,
    pub created_at: DateTime<Utc>,
    /// The coupon that was applied, if the code was recognised.
    pub coupon: Option<Coupon>,
    pub calculation: OrderCalculation,
    pub payment_methods: Vec<PaymentMethod>,
    /// Empty unless the checkout accepts credit cards.
    pub installments: Vec<Installment>,
}

/// Prices a request against the catalog.
pub fn build_quote(catalog: &Catalog, request: &QuoteRequest) -> CliResult<Quote> {
    let checkout = catalog.active_checkout(&request.checkout_id)?;
    let main = catalog.main_product(checkout)?;
    let offered = catalog.offered_bumps(checkout);

    let cart = assemble_cart(main, &offered, &request.bumps);
    validate_cart(&cart).map_err(CoreError::from)?;
    let mut calculation = calculate_order(&cart);

    let mut coupon = None;
    if let Some(code) = request.coupon.as_deref().map(str::trim) {
        match code.parse::<Coupon>() {
            Ok(known) => {
                calculation = apply_coupon(&calculation, code);
                coupon = Some(known);
            }
            Err(err) => warn!(error = %err, "Coupon not recognised, order left unchanged"),
        }
    }

    let installments = if checkout.payment_methods.contains(&PaymentMethod::CreditCard) {
        installment_options(calculation.final_total)
    } else {
        Vec::new()
    };

    let quote = Quote {
        id: Uuid::new_v4(),
        checkout_id: checkout.id.clone(),
        checkout_name: checkout.name.clone(),
        created_at: Utc::now(),
        coupon,
        calculation,
        payment_methods: checkout.payment_methods.clone(),
        installments,
    };

    info!(
        quote_id = %quote.id,
        checkout = %quote.checkout_id,
        items = quote.calculation.items.len(),
        final_total = %quote.calculation.final_total,
        "Quote created"
    );
    Ok(quote)
}

/// Renders a quote as an order summary.
pub fn render_text(quote: &Quote) -> String {
    let calc = &quote.calculation;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", quote.checkout_name, quote.checkout_id);
    for item in &calc.items {
        let marker = if item.kind == ItemKind::Bump { "+ " } else { "" };
        let _ = writeln!(
            out,
            "  {:<40} {:>14}",
            format!("{marker}{}", item.name),
            item.price().to_string()
        );
    }

    let _ = writeln!(out, "Subtotal: {}", calc.subtotal);
    if calc.bump_total.is_positive() {
        let _ = writeln!(out, "Order bumps: + {}", calc.bump_total);
    }
    if calc.has_discount() {
        let _ = writeln!(out, "Discount: - {}", calc.discount);
    }
    if let Some(coupon) = quote.coupon {
        let _ = writeln!(out, "Coupon: {coupon}");
    }
    let _ = writeln!(out, "Total: {}", calc.final_total);

    if let Some(max) = quote.installments.last() {
        let _ = writeln!(out, "Installments: up to {}x de {}", max.count, max.amount);
    }

    out
}

/// Renders the active checkouts with their offers.
pub fn render_checkouts(catalog: &Catalog) -> String {
    let mut out = String::new();

    for checkout in catalog.checkouts.iter().filter(|c| c.is_active()) {
        let _ = writeln!(out, "{} - {}", checkout.id, checkout.name);
        match catalog.main_product(checkout) {
            Ok(main) => {
                let _ = writeln!(out, "  main: {} {} ({})", main.id, main.name, main.price());
            }
            Err(err) => {
                let _ = writeln!(out, "  main: <{err}>");
            }
        }
        for bump in catalog.offered_bumps(checkout) {
            let _ = writeln!(out, "  bump: {} {} ({})", bump.id, bump.name, bump.price());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::ValidationError;

    use crate::error::CliError;

    const CATALOG: &str = r#"
[[products]]
id = "prod_01"
name = "Curso de Marketing Digital"
price_cents = 49700
kind = "main"

[[products]]
id = "prod_02"
name = "E-book Copywriting"
price_cents = 9700
kind = "bump"

[[products]]
id = "prod_03"
name = "Mentoria em Grupo"
price_cents = 29700
kind = "bump"

[[checkouts]]
id = "chk_01"
name = "Checkout - Curso"
main_product_id = "prod_01"
allowed_order_bumps = ["prod_02", "prod_03"]
payment_methods = ["pix", "credit_card"]

[[checkouts]]
id = "chk_02"
name = "Checkout - Pix"
main_product_id = "prod_01"
allowed_order_bumps = ["prod_02"]
payment_methods = ["pix"]

[[products]]
id = "prod_04"
name = "Aula Gratuita"
price_cents = 0
kind = "main"

[[checkouts]]
id = "chk_03"
name = "Checkout - Broken"
main_product_id = "prod_99"

[[checkouts]]
id = "chk_04"
name = "Checkout - Free"
main_product_id = "prod_04"
"#;

    fn catalog() -> Catalog {
        toml::from_str(CATALOG).unwrap()
    }

    fn request(checkout: &str, bumps: &[&str], coupon: Option<&str>) -> QuoteRequest {
        QuoteRequest {
            checkout_id: checkout.to_string(),
            bumps: bumps.iter().map(|s| s.to_string()).collect(),
            coupon: coupon.map(str::to_string),
        }
    }

    #[test]
    fn test_bundle_with_coupon() {
        let quote = build_quote(
            &catalog(),
            &request("chk_01", &["prod_02", "prod_03"], Some("promo20")),
        )
        .unwrap();

        assert_eq!(quote.coupon, Some(Coupon::Promo20));
        assert_eq!(quote.calculation.discount.cents(), 20972);
        assert_eq!(quote.calculation.final_total.cents(), 68128);
        assert_eq!(quote.installments.len(), 12);
        assert_eq!(quote.installments[0].amount.cents(), 68128);
    }

    #[test]
    fn test_unknown_coupon_is_ignored() {
        let quote = build_quote(&catalog(), &request("chk_01", &["prod_02"], Some("XYZ123")))
            .unwrap();
        assert_eq!(quote.coupon, None);
        assert_eq!(quote.calculation.final_total.cents(), 59400);
    }

    #[test]
    fn test_coupon_whitespace_is_trimmed() {
        let quote = build_quote(&catalog(), &request("chk_02", &[], Some("  promo20\n"))).unwrap();
        assert_eq!(quote.coupon, Some(Coupon::Promo20));
        assert_eq!(quote.calculation.final_total.cents(), 39760);
    }

    #[test]
    fn test_invalid_cart_is_rejected() {
        let err = build_quote(&catalog(), &request("chk_04", &[], None)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_bumps_outside_checkout_are_dropped() {
        let quote =
            build_quote(&catalog(), &request("chk_02", &["prod_03", "prod_02"], None)).unwrap();
        let ids: Vec<&str> = quote
            .calculation
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["prod_01", "prod_02"]);
        assert!(quote.installments.is_empty());
    }

    #[test]
    fn test_missing_checkout_and_main_product() {
        let err = build_quote(&catalog(), &request("chk_99", &[], None)).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::CheckoutNotFound(_))));

        let err = build_quote(&catalog(), &request("chk_03", &[], None)).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_render_text() {
        let quote = build_quote(
            &catalog(),
            &request("chk_01", &["prod_02", "prod_03"], Some("PROMO20")),
        )
        .unwrap();
        let text = render_text(&quote);

        assert!(text.starts_with("Checkout - Curso (chk_01)\n"));
        assert!(text.contains("+ E-book Copywriting"));
        assert!(text.contains("Subtotal: R$ 497,00\n"));
        assert!(text.contains("Order bumps: + R$ 394,00\n"));
        assert!(text.contains("Discount: - R$ 209,72\n"));
        assert!(text.contains("Coupon: PROMO20\n"));
        assert!(text.contains("Total: R$ 681,28\n"));
        assert!(text.contains("Installments: up to 12x de R$ 56,77\n"));
    }

    #[test]
    fn test_render_text_without_extras() {
        let quote = build_quote(&catalog(), &request("chk_02", &[], None)).unwrap();
        let text = render_text(&quote);
        assert!(!text.contains("Order bumps"));
        assert!(!text.contains("Discount"));
        assert!(!text.contains("Installments"));
    }

    #[test]
    fn test_render_checkouts() {
        let text = render_checkouts(&catalog());
        assert!(text.contains("chk_01 - Checkout - Curso\n"));
        assert!(text.contains("  bump: prod_03 Mentoria em Grupo (R$ 297,00)\n"));
        assert!(text.contains("  main: <Product not found: prod_99>\n"));
    }

    #[test]
    fn test_quote_serializes() {
        let quote = build_quote(&catalog(), &request("chk_01", &[], Some("blackfriday"))).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["coupon"], "BLACKFRIDAY");
        assert_eq!(json["calculation"]["final_total"], 34790);
        assert_eq!(json["payment_methods"][1], "credit_card");
    }
}
