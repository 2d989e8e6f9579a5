//! # checkout-cli Entry Point
//!
//! ## Usage
//! ```bash
//! # List checkouts in the catalog
//! checkout-cli list --catalog apps/checkout-cli/catalog.example.toml
//!
//! # Quote an order with two bumps and a coupon
//! checkout-cli quote --checkout chk_01 --bump prod_02 --bump prod_03 --coupon promo20
//!
//! # Human-readable summary
//! CHECKOUT_OUTPUT=text checkout-cli quote --checkout chk_01
//! ```

use std::process::ExitCode;

use checkout_cli::args::Cli;
use checkout_cli::config::CliConfig;
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    checkout_cli::init_tracing(&config);

    match checkout_cli::run(cli, config) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "checkout-cli failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
