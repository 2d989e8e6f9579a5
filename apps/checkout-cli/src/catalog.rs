//! # Checkout Catalog
//!
//! Products and checkout pages loaded from a TOML file.
//!
//! ## File Format
//! ```toml
//! [[products]]
//! id = "prod_01"
//! name = "Curso de Marketing Digital"
//! price_cents = 49700
//! kind = "main"
//!
//! [[products]]
//! id = "prod_02"
//! name = "E-book Copywriting"
//! price_cents = 9700
//! kind = "bump"
//!
//! [[checkouts]]
//! id = "chk_01"
//! name = "Checkout - Curso"
//! main_product_id = "prod_01"
//! allowed_order_bumps = ["prod_02"]
//! payment_methods = ["pix", "credit_card"]
//! ```

use std::path::Path;

use checkout_core::cart::{main_product, offered_bumps};
use checkout_core::{CheckoutConfig, CoreError, CoreResult, Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub checkouts: Vec<CheckoutConfig>,
}

impl Catalog {
    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog: Catalog = toml::from_str(&raw).map_err(|source| CliError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            products = catalog.products.len(),
            checkouts = catalog.checkouts.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Finds a checkout by id, refusing inactive ones.
    pub fn active_checkout(&self, id: &str) -> CoreResult<&CheckoutConfig> {
        let checkout = self
            .checkouts
            .iter()
            .find(|checkout| checkout.id == id)
            .ok_or_else(|| CoreError::CheckoutNotFound(id.to_string()))?;

        if !checkout.is_active() {
            return Err(CoreError::CheckoutInactive(id.to_string()));
        }

        debug!(checkout = %checkout.id, "Checkout resolved");
        Ok(checkout)
    }

    /// A checkout's main product.
    pub fn main_product(&self, checkout: &CheckoutConfig) -> CoreResult<&Product> {
        main_product(checkout, &self.products)
    }

    /// The active products a checkout offers as bumps.
    pub fn offered_bumps(&self, checkout: &CheckoutConfig) -> Vec<Product> {
        offered_bumps(checkout, &self.products)
            .into_iter()
            .filter(|product| product.is_active)
            .collect()
    }
}
