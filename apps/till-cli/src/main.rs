//! # till
//!
//! Settles one cash sale against a drawer built from `register.toml`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args ──► RegisterConfig::load ──► stderr_subscriber                    │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  opening drawer + --tender units ──► CashRegister::perform_transaction  │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                               Receipt (text or --json)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```text
//! $ till --price 758 --tender TEN_EURO
//! Price:   €7.58
//! Paid:    €10.00
//! Change:  €2.42
//!     1 x TWO_EURO
//!     2 x TWENTY_CENT
//!     1 x TWO_CENT
//! Drawer:  €...
//! ```
//!
//! The drawer is rebuilt from config on every run; nothing is written back.

mod config;
mod error;
mod receipt;
mod tender;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn, Level, Subscriber};
use tracing_subscriber::EnvFilter;

use till_core::{CashRegister, Denomination, Money, TransactionError, TransactionMode};

use crate::config::{LoggingSettings, RegisterConfig};
use crate::receipt::Receipt;
use crate::tender::{build_payment, parse_tender};

/// Settle a cash sale: check the payment, hand out exact change.
#[derive(Debug, Parser)]
#[command(name = "till", version)]
struct Cli {
    /// Price in cents.
    #[arg(long, allow_negative_numbers = true)]
    price: i64,

    /// Tendered units as NAME[=COUNT], e.g. TEN_EURO or TWENTY_CENT=3. Repeatable.
    #[arg(
        long = "tender",
        value_name = "NAME[=COUNT]",
        required = true,
        value_parser = parse_tender
    )]
    tenders: Vec<(Denomination, u32)>,

    /// Compute change without updating the drawer.
    #[arg(long)]
    dry_run: bool,

    /// Print the receipt as JSON.
    #[arg(long)]
    json: bool,

    /// Path to register.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config decides the log filter, so loading logs through a scoped default.
    let bootstrap = stderr_subscriber(&LoggingSettings::default().filter);
    let config = tracing::subscriber::with_default(bootstrap, || {
        RegisterConfig::load(cli.config.clone())
    })
    .context("loading register config")?;

    tracing::subscriber::set_global_default(stderr_subscriber(&config.logging.filter))
        .context("installing tracing subscriber")?;
    debug!(?config, "Configuration loaded");

    let receipt = match run(&cli, &config) {
        Ok(receipt) => receipt,
        Err(err) => {
            let message = format!("{err:#}");
            if failure_level(&err) == Level::WARN {
                warn!(error = %message, "Sale not settled");
            } else {
                error!(error = %message, "Transaction failed");
            }
            return Err(err);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        print!("{}", receipt.render());
    }

    Ok(())
}

fn run(cli: &Cli, config: &RegisterConfig) -> anyhow::Result<Receipt> {
    let mode = if cli.dry_run {
        TransactionMode::Simulate
    } else {
        config.mode()
    };
    let price = Money::from_minor(cli.price);
    let payment = build_payment(&cli.tenders).context("building payment")?;

    let mut drawer = config.drawer.opening_drawer();
    info!(drawer_total = %drawer.total(), %mode, "Register open");

    let mut register = CashRegister::new(&mut drawer);
    let change = register
        .perform_transaction(price, &payment, mode)
        .with_context(|| format!("cannot settle {} paid with {}", price, payment))?;

    Ok(Receipt::new(mode, price, &payment, change, register.drawer()))
}

/// Cashier-side outcomes (short payment, no exact change) are warnings;
/// invalid requests and drawer bookkeeping failures are errors.
fn failure_level(err: &anyhow::Error) -> Level {
    match err.downcast_ref::<TransactionError>() {
        Some(cause) if cause.is_recoverable() => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Builds the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_core=trace` - Show every greedy step
/// - Default: `default_filter` (the `[logging] filter` from config)
///
/// Logs go to stderr so `--json` output stays clean.
fn stderr_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{Bill, Change, Coin, LedgerError};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["till"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_args() {
        let cli = cli(&[
            "--price",
            "758",
            "--tender",
            "TEN_EURO",
            "--tender",
            "TWENTY_CENT=2",
            "--dry-run",
        ]);
        assert_eq!(cli.price, 758);
        let expected: Vec<(Denomination, u32)> =
            vec![(Bill::TenEuro.into(), 1), (Coin::TwentyCent.into(), 2)];
        assert_eq!(cli.tenders, expected);
        assert!(cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn test_tender_is_required() {
        assert!(Cli::try_parse_from(["till", "--price", "100"]).is_err());
        assert!(Cli::try_parse_from(["till", "--price", "100", "--tender", "PESO"]).is_err());
    }

    #[test]
    fn test_run_commit() {
        let config = RegisterConfig::default();
        let receipt = run(&cli(&["--price", "758", "--tender", "TEN_EURO"]), &config).unwrap();

        assert_eq!(receipt.mode, TransactionMode::Commit);
        assert_eq!(receipt.change_total, Money::from_minor(242));
        let opening = config.drawer.opening_drawer().total();
        assert_eq!(receipt.drawer_total, opening + Money::from_minor(758));
    }

    #[test]
    fn test_run_dry_run_from_flag_or_config() {
        let mut config = RegisterConfig::default();
        let opening = config.drawer.opening_drawer().total();

        let args = cli(&["--price", "758", "--tender", "TEN_EURO", "--dry-run"]);
        let receipt = run(&args, &config).unwrap();
        assert_eq!(receipt.mode, TransactionMode::Simulate);
        assert_eq!(receipt.drawer_total, opening);

        config.transaction.dry_run = true;
        let receipt = run(&cli(&["--price", "758", "--tender", "TEN_EURO"]), &config).unwrap();
        assert_eq!(receipt.mode, TransactionMode::Simulate);
    }

    #[test]
    fn test_run_reports_typed_failure() {
        let config = RegisterConfig::from_toml("[drawer]\nopening_float = {}\n").unwrap();
        let err = run(&cli(&["--price", "450", "--tender", "FIVE_EURO"]), &config).unwrap_err();

        let cause = err.downcast_ref::<TransactionError>().unwrap();
        assert!(matches!(cause, TransactionError::InsufficientChange { .. }));
        assert_eq!(failure_level(&err), Level::WARN);
    }

    #[test]
    fn test_run_with_unlimited_drawer() {
        let config = RegisterConfig::from_toml("[drawer]\nunlimited = true\n").unwrap();
        let full = Change::max().total();

        let args = cli(&["--price", "758", "--tender", "TEN_EURO", "--dry-run"]);
        let receipt = run(&args, &config).unwrap();
        assert_eq!(receipt.change_total, Money::from_minor(242));
        assert_eq!(receipt.change.count(Coin::TwoEuro), 1);
        assert_eq!(receipt.drawer_total, full);

        let receipt = run(&cli(&["--price", "0", "--tender", "TEN_EURO"]), &config).unwrap();
        assert_eq!(receipt.mode, TransactionMode::Commit);
        assert_eq!(receipt.change.count(Bill::TenEuro), 1);
        assert_eq!(receipt.drawer_total, full);
    }

    #[test]
    fn test_unlimited_drawer_cannot_keep_a_payment() {
        let config = RegisterConfig::from_toml("[drawer]\nunlimited = true\n").unwrap();
        let err = run(&cli(&["--price", "758", "--tender", "TEN_EURO"]), &config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TransactionError>(),
            Some(TransactionError::Ledger(LedgerError::CountOverflow { .. }))
        ));
        assert_eq!(failure_level(&err), Level::ERROR);
    }

    #[test]
    fn test_negative_price_parses_and_is_rejected() {
        let config = RegisterConfig::default();
        let err = run(&cli(&["--price", "-5", "--tender", "TEN_EURO"]), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TransactionError>(),
            Some(TransactionError::Validation(_))
        ));
        assert_eq!(failure_level(&err), Level::ERROR);
    }
}
