//! Command-line parsing.
//!
//! ## Usage
//! ```bash
//! checkout-cli list
//! checkout-cli quote --checkout chk_01 --bump prod_02 --bump prod_03 --coupon promo20
//! checkout-cli quote --checkout chk_01 --format text --catalog ./catalog.toml
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::quote::QuoteRequest;

#[derive(Debug, Parser)]
#[command(name = "checkout-cli")]
#[command(about = "Checkout order quoting", version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Catalog file [default: $CHECKOUT_CATALOG or ./catalog.toml]
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format [default: $CHECKOUT_OUTPUT or json]
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List active checkouts and the bumps they offer
    List,
    /// Calculate an order for a checkout
    Quote(QuoteArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct QuoteArgs {
    /// Checkout to quote
    #[arg(short = 'k', long)]
    pub checkout: String,

    /// Select an order bump (repeatable, kept in order)
    #[arg(short, long = "bump", value_name = "ID", action = ArgAction::Append)]
    pub bumps: Vec<String>,

    /// Apply a coupon code once
    #[arg(short, long, value_name = "CODE")]
    pub coupon: Option<String>,
}

impl From<QuoteArgs> for QuoteRequest {
    fn from(args: QuoteArgs) -> Self {
        QuoteRequest {
            checkout_id: args.checkout,
            bumps: args.bumps,
            coupon: args.coupon,
        }
    }
}
