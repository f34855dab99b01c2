//! # Cash Register
//!
//! Settles a sale against a drawer: checks the payment, finds exact change,
//! and updates the drawer.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  perform_transaction(price, payment, mode)                              │
//! │       │                                                                 │
//! │       ├── price < 0?                 → Validation error                 │
//! │       ├── paid < price?              → InsufficientPayment              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  available = drawer + payment        (per denomination, saturating)     │
//! │       │                                                                 │
//! │       ├── paid == price              → change = {}                      │
//! │       └── greedy search              → change, or InsufficientChange    │
//! │       │                                                                 │
//! │       ├── Simulate: drawer untouched                                    │
//! │       └── Commit:   copy = drawer - change + payment                    │
//! │                      ├── count > u32::MAX → Ledger error                │
//! │                      └── drawer = copy  (single write)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed transaction never writes the drawer, so afterwards it is
//! indistinguishable from one that was never attempted.
//!
//! ## Concurrency
//! The register holds `&mut Change` for its whole lifetime, so one drawer
//! can only run one transaction at a time. Share a drawer across threads by
//! putting it behind a `Mutex` and building a register per locked access.
//!
//! ## Example
//! ```rust
//! use till_core::change::Change;
//! use till_core::denomination::{Bill, Coin};
//! use till_core::money::Money;
//! use till_core::register::CashRegister;
//!
//! let mut drawer = Change::from([
//!     (Coin::TwoEuro.into(), 5),
//!     (Coin::TwentyCent.into(), 5),
//!     (Coin::TwoCent.into(), 5),
//! ]);
//! let mut register = CashRegister::new(&mut drawer);
//!
//! let paid = Change::from([(Bill::TenEuro.into(), 1)]);
//! let change = register.settle(Money::from_minor(758), &paid)?;
//!
//! assert_eq!(change.total().minor(), 242);
//! assert_eq!(change.count(Coin::TwoEuro), 1);
//! assert_eq!(register.drawer().count(Bill::TenEuro), 1);
//! # Ok::<(), till_core::error::TransactionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, trace, warn};

use crate::change::Change;
use crate::denomination::Denomination;
use crate::error::{LedgerError, TransactionError, TransactionResult};
use crate::money::Money;
use crate::validation::validate_price;

// =============================================================================
// Transaction Mode
// =============================================================================

/// Whether a transaction writes the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    /// Apply the payment and dispense the change.
    #[default]
    Commit,

    /// Dry run: compute the change, leave the drawer alone.
    Simulate,
}

impl TransactionMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            TransactionMode::Simulate
        } else {
            TransactionMode::Commit
        }
    }

    pub fn is_simulate(&self) -> bool {
        matches!(self, TransactionMode::Simulate)
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionMode::Commit => write!(f, "commit"),
            TransactionMode::Simulate => write!(f, "simulate"),
        }
    }
}

// =============================================================================
// Cash Register
// =============================================================================

/// The transaction engine for one drawer.
#[derive(Debug)]
pub struct CashRegister<'d> {
    drawer: &'d mut Change,
}

impl<'d> CashRegister<'d> {
    /// Wraps the drawer of record. The drawer stays owned by the caller.
    pub fn new(drawer: &'d mut Change) -> Self {
        CashRegister { drawer }
    }

    /// Current drawer contents.
    pub fn drawer(&self) -> &Change {
        self.drawer
    }

    /// Performs a transaction for `price`, paid with `payment`.
    ///
    /// Returns the change for the customer. In [`TransactionMode::Simulate`]
    /// the same change is returned but the drawer is not modified.
    ///
    /// ## Errors
    /// - [`TransactionError::Validation`] if `price` is negative
    /// - [`TransactionError::InsufficientPayment`] if `payment` is worth less than `price`
    /// - [`TransactionError::InsufficientChange`] if exact change cannot be made
    /// - [`TransactionError::Ledger`] on commit, if a count would end above `u32::MAX`
    ///
    /// The drawer is unchanged whenever an error is returned.
    pub fn perform_transaction(
        &mut self,
        price: Money,
        payment: &Change,
        mode: TransactionMode,
    ) -> TransactionResult<Change> {
        let change = self.plan(price, payment)?;

        match mode {
            TransactionMode::Commit => {
                let drawer_after =
                    settled_drawer(self.drawer(), payment, &change).map_err(|err| {
                        warn!(%price, error = %err, "Rejected: drawer cannot hold the payment");
                        err
                    })?;
                *self.drawer = drawer_after;
                info!(
                    %price,
                    paid = %payment.total(),
                    change = %change.total(),
                    drawer_total = %self.drawer.total(),
                    "Transaction committed"
                );
            }
            TransactionMode::Simulate => {
                debug!(
                    %price,
                    paid = %payment.total(),
                    change = %change.total(),
                    "Transaction simulated, drawer untouched"
                );
            }
        }

        Ok(change)
    }

    /// Commit-mode shorthand for [`perform_transaction`](Self::perform_transaction).
    pub fn settle(&mut self, price: Money, payment: &Change) -> TransactionResult<Change> {
        self.perform_transaction(price, payment, TransactionMode::Commit)
    }

    /// Dry run: the change a commit would hand out right now.
    ///
    /// Capacity is not checked, so a dry run against a full drawer can succeed
    /// where the commit fails with [`TransactionError::Ledger`].
    pub fn simulate(&self, price: Money, payment: &Change) -> TransactionResult<Change> {
        self.plan(price, payment)
    }

    /// Validates the sale and picks the change. Writes nothing.
    fn plan(&self, price: Money, payment: &Change) -> TransactionResult<Change> {
        validate_price(price)?;

        let paid = payment.total();
        if paid < price {
            warn!(%price, %paid, "Rejected: insufficient payment");
            return Err(TransactionError::InsufficientPayment { price, paid });
        }

        let change_due = paid - price;
        if change_due.is_zero() {
            return Ok(Change::none());
        }

        // The payment is in the drawer before change is counted out.
        let available = |d: Denomination| self.drawer.count(d).saturating_add(payment.count(d));
        match greedy(change_due, available) {
            Some(change) => Ok(change),
            None => {
                warn!(%price, %paid, %change_due, "Rejected: insufficient change");
                Err(TransactionError::InsufficientChange { change_due })
            }
        }
    }
}

/// `drawer + payment - change`, built on a copy.
///
/// Units are counted out of the drawer first and whatever is still owed
/// comes back out of the payment, so a count only overflows when its final
/// value is above `u32::MAX`. `change` must fit in `drawer + payment`.
fn settled_drawer(
    drawer: &Change,
    payment: &Change,
    change: &Change,
) -> Result<Change, LedgerError> {
    let mut after = drawer.clone();
    for denomination in Denomination::ALL {
        let handed_out = change.count(denomination);
        let from_drawer = handed_out.min(after.count(denomination));
        let kept = payment.count(denomination).saturating_sub(handed_out - from_drawer);

        after.remove(denomination, from_drawer)?;
        after.add(denomination, kept)?;
    }
    Ok(after)
}

// =============================================================================
// Change-Making
// =============================================================================

/// Greedy change-making over the units in `inventory`.
///
/// Walks the catalog once from the largest denomination down, taking as many
/// units of each as fit in what is still owed and are available. Returns
/// `None` unless the amount comes out exact.
///
/// There is no backtracking. With an inventory like `{ FIFTY_CENT: 1,
/// TWENTY_CENT: 3 }` and 60 owed, the walk takes the 50 and then cannot make
/// 10, although three 20s would have worked.
///
/// ## Example
/// ```rust
/// use till_core::change::Change;
/// use till_core::denomination::Coin;
/// use till_core::money::Money;
/// use till_core::register::make_change;
///
/// let inventory = Change::from([(Coin::FiftyCent.into(), 1), (Coin::TenCent.into(), 5)]);
/// let change = make_change(&inventory, Money::from_minor(70)).unwrap();
/// assert_eq!(change.count(Coin::FiftyCent), 1);
/// assert_eq!(change.count(Coin::TenCent), 2);
///
/// assert!(make_change(&inventory, Money::from_minor(5)).is_none());
/// ```
pub fn make_change(inventory: &Change, amount: Money) -> Option<Change> {
    greedy(amount, |d| inventory.count(d))
}

/// The descending walk, with availability per denomination supplied by the caller.
fn greedy(amount: Money, available: impl Fn(Denomination) -> u32) -> Option<Change> {
    let mut remaining = amount.minor();
    let mut picked = BTreeMap::new();

    for denomination in Denomination::descending() {
        if remaining <= 0 {
            break;
        }

        let value = denomination.minor_value();
        let held = available(denomination);
        if held == 0 {
            continue;
        }

        let max_needed = u32::try_from(remaining / value).unwrap_or(u32::MAX);
        let used = max_needed.min(held);
        if used > 0 {
            picked.insert(denomination, used);
            remaining -= value * i64::from(used);
            trace!(%denomination, used, remaining, "Took units");
        }
    }

    if remaining == 0 {
        Some(Change::from(picked))
    } else {
        debug!(%amount, remaining, "Greedy pass left an unpaid remainder");
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
