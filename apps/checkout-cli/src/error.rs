//! # CLI Error Type
//!
//! Unified error type for checkout-cli.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  config ────► CliError::Config                                         │
//! │  catalog ───► CliError::Io / Toml                                      │
//! │  lookups ───► CliError::Core            (unknown / inactive checkout)  │
//! │  cart ──────► CliError::Core            (validate_cart rejected it)    │
//! │  output ────► CliError::Json                                           │
//! │                                                                         │
//! │  Bad command lines never get here: clap reports them and exits 2.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use checkout_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: CliError = CoreError::CheckoutNotFound("chk_99".to_string()).into();
        assert_eq!(err.to_string(), "Checkout not found: chk_99");
    }
}
