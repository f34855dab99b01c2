//! # till-core: Pure Settlement Logic for Till
//!
//! This crate is the **heart** of Till. It decides whether a cash sale can
//! be completed, which coins and bills go back to the customer, and what the
//! drawer holds afterwards. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/till-cli                                │   │
//! │  │    config (register.toml + env) ──► tracing ──► args            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌───────────┐  ┌───────────┐               │   │
//! │  │   │ denomination │  │  change   │  │ register  │               │   │
//! │  │   │  Coin, Bill  │  │  ledger   │  │  engine   │               │   │
//! │  │   └──────────────┘  └───────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The euro coin and bill catalog
//! - [`change`] - Ledger of units per denomination with a cached total
//! - [`register`] - The transaction engine and greedy change-making
//! - [`error`] - Domain error types
//! - [`validation`] - Request validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Bill, CashRegister, Change, Coin, Money, TransactionError};
//!
//! let mut drawer = Change::new();
//! let mut register = CashRegister::new(&mut drawer);
//!
//! // An empty drawer cannot break a five.
//! let paid = Change::from([(Bill::FiveEuro.into(), 1)]);
//! let err = register.settle(Money::from_minor(450), &paid).unwrap_err();
//! assert!(matches!(err, TransactionError::InsufficientChange { .. }));
//! assert!(register.drawer().is_empty());
//!
//! // Exact payment always works.
//! let paid = Change::from([(Coin::TwoEuro.into(), 2)]);
//! let change = register.settle(Money::from_minor(400), &paid).unwrap();
//! assert!(change.is_empty());
//! assert_eq!(register.drawer().total(), Money::from_minor(400));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod denomination;
pub mod error;
pub mod money;
pub mod register;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::Change;
pub use denomination::{Bill, Coin, Denomination};
pub use error::{LedgerError, TransactionError, TransactionResult, ValidationError};
pub use money::Money;
pub use register::{make_change, CashRegister, TransactionMode};
