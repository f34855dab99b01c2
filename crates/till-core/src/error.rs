//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  TransactionError   - What perform_transaction returns                 │
//! │  ├── Validation     - Bad request (negative price)                     │
//! │  ├── Ledger         - Count overflow / underflow in a ledger           │
//! │  ├── InsufficientPayment { price, paid }                               │
//! │  └── InsufficientChange  { change_due }                                │
//! │                                                                         │
//! │  LedgerError        - Change::add / Change::remove failures            │
//! │  ValidationError    - Input validation failures                        │
//! │                                                                         │
//! │  Every variant leaves the drawer exactly as it was.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, denomination)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::denomination::Denomination;
use crate::money::Money;

// =============================================================================
// Transaction Error
// =============================================================================

/// Failures of [`CashRegister::perform_transaction`](crate::register::CashRegister::perform_transaction).
///
/// ## User Workflow
/// ```text
/// Customer hands over €10.00 for a €7.58 item
///      │
///      ▼
/// perform_transaction(758, { TEN_EURO: 1 })
///      │
///      ├── paid < price?      → InsufficientPayment { price, paid }
///      │
///      ├── no exact change?   → InsufficientChange { change_due: 242 }
///      │
///      └── OK → change handed back, drawer updated
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// The request itself is invalid (e.g. negative price).
    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationError),

    /// A ledger mutation would overflow or underflow a count.
    #[error("Drawer bookkeeping failed: {0}")]
    Ledger(#[from] LedgerError),

    /// The tendered amount is below the price.
    #[error("Insufficient payment. Price: {price}, Paid: {paid}")]
    InsufficientPayment { price: Money, paid: Money },

    /// The drawer plus payment cannot make the exact change in one greedy pass.
    #[error("Insufficient change. Change due: {change_due}")]
    InsufficientChange { change_due: Money },
}

impl TransactionError {
    /// True for outcomes a cashier resolves at the counter (ask for more
    /// money, ask for a different tender). False for invalid requests and
    /// bookkeeping failures.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TransactionError::InsufficientPayment { .. }
                | TransactionError::InsufficientChange { .. }
        )
    }
}

// =============================================================================
// Ledger Error
// =============================================================================

/// Invalid count modification on a [`Change`](crate::change::Change).
///
/// The register only removes units it has already seen in its scratch
/// drawer, so `CountUnderflow` reaching a caller of the register means a
/// broken invariant, not bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error(
        "Invalid count modification for {denomination}: adding {added} to {current} exceeds {max}",
        max = u32::MAX
    )]
    CountOverflow {
        denomination: Denomination,
        current: u32,
        added: u32,
    },

    #[error("Invalid count modification for {denomination}: removing {requested} from {current}")]
    CountUnderflow {
        denomination: Denomination,
        current: u32,
        requested: u32,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any ledger is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Name is not in the denomination catalog.
    #[error("Unknown denomination: '{name}'")]
    UnknownDenomination { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with TransactionError.
pub type TransactionResult<T> = Result<T, TransactionError>;

// =============================================================================
// Unit Tests
// =============================================================================
