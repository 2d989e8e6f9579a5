//! # checkout-cli: Order Quotes from the Command Line
//!
//! Thin orchestration around `checkout-core`: load a catalog, assemble the
//! cart the buyer picked, run the engine, print the result.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ────► parse args, load config, init logging, exit codes        │
//! │                                                                         │
//! │  lib.rs ─────► run(): dispatch list / quote, render output              │
//! │                                                                         │
//! │  args.rs ────► clap command definition                                  │
//! │  config.rs ──► environment configuration                                │
//! │  catalog.rs ─► TOML products + checkouts                                │
//! │  quote.rs ───► cart assembly → calculate_order → apply_coupon           │
//! │                                                                         │
//! │  stdout: quote / listing only        stderr: tracing output             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod quote;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};
use catalog::Catalog;
use config::{CliConfig, OutputFormat};
use error::CliResult;

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies. Logs go
/// to stderr so stdout stays machine-readable.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes a parsed command line and returns what should be printed.
pub fn run(cli: Cli, mut config: CliConfig) -> CliResult<String> {
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::List => {
            let catalog = Catalog::load(&config.catalog_path)?;
            Ok(quote::render_checkouts(&catalog))
        }
        Command::Quote(args) => {
            let catalog = Catalog::load(&config.catalog_path)?;
            let quote = quote::build_quote(&catalog, &args.into())?;
            match config.output {
                OutputFormat::Text => Ok(quote::render_text(&quote)),
                OutputFormat::Json if config.pretty_json => {
                    Ok(serde_json::to_string_pretty(&quote)?)
                }
                OutputFormat::Json => Ok(serde_json::to_string(&quote)?),
            }
        }
    }
}
