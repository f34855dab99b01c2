//! # Change Ledger
//!
//! A count of physical units per [`Denomination`], with a cached total.
//!
//! The same type serves as the live drawer, the customer's payment, and the
//! change handed back.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. No stored count is zero           (absent == 0)                     │
//! │  2. No count exceeds u32::MAX                                           │
//! │  3. total == Σ count × minor_value     (kept in lock-step by modify)   │
//! │  4. total >= 0                                                          │
//! │                                                                         │
//! │  add() ────┐                                                            │
//! │            ├──► modify() ──► counts + total updated together           │
//! │  remove() ─┘                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::change::Change;
//! use till_core::denomination::{Bill, Coin};
//!
//! let mut drawer = Change::new();
//! drawer.add(Bill::TenEuro, 2)?.add(Coin::TwentyCent, 5)?;
//! assert_eq!(drawer.total().minor(), 2_100);
//!
//! drawer.remove(Coin::TwentyCent, 5)?;
//! assert_eq!(drawer.count(Coin::TwentyCent), 0);
//! assert_eq!(drawer.len(), 1);
//! # Ok::<(), till_core::error::LedgerError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::denomination::Denomination;
use crate::error::LedgerError;
use crate::money::Money;

// =============================================================================
// Change
// =============================================================================

/// Units held per denomination.
///
/// Equality, hashing and display only look at the non-zero entries.
/// Serialized as a `{ "TEN_EURO": 1 }` map; deserializing rebuilds the total
/// and drops zero entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Denomination, u32>",
    from = "BTreeMap<Denomination, u32>"
)]
pub struct Change {
    counts: BTreeMap<Denomination, u32>,
    total: Money,
}

impl Change {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ledger. Reads better than `new()` as a "no change due" result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every denomination at the maximum count.
    ///
    /// Useful when drawer capacity should never be the reason a transaction
    /// fails.
    pub fn max() -> Self {
        let mut change = Self::default();
        for denomination in Denomination::ALL {
            change.counts.insert(denomination, u32::MAX);
            change.total += denomination.value().times(u32::MAX);
        }
        change
    }

    /// Adds `count` units. Adding zero is a no-op.
    ///
    /// Fails without modifying the ledger if the count would pass `u32::MAX`.
    pub fn add(
        &mut self,
        denomination: impl Into<Denomination>,
        count: u32,
    ) -> Result<&mut Self, LedgerError> {
        self.modify(denomination.into(), i64::from(count))
    }

    /// Removes `count` units.
    ///
    /// Fails without modifying the ledger if fewer than `count` are held.
    pub fn remove(
        &mut self,
        denomination: impl Into<Denomination>,
        count: u32,
    ) -> Result<&mut Self, LedgerError> {
        self.modify(denomination.into(), -i64::from(count))
    }

    /// The only place counts and total change.
    fn modify(
        &mut self,
        denomination: Denomination,
        delta: i64,
    ) -> Result<&mut Self, LedgerError> {
        let current = self.count(denomination);
        let sum = i64::from(current) + delta;

        if sum < 0 {
            return Err(LedgerError::CountUnderflow {
                denomination,
                current,
                requested: delta.unsigned_abs() as u32,
            });
        }
        if sum > i64::from(u32::MAX) {
            return Err(LedgerError::CountOverflow {
                denomination,
                current,
                added: delta as u32,
            });
        }

        let updated = sum as u32;
        if updated == 0 {
            self.counts.remove(&denomination);
        } else {
            self.counts.insert(denomination, updated);
        }
        self.total += Money::from_minor(denomination.minor_value() * delta);

        Ok(self)
    }

    /// Adds every entry of `other`. All-or-nothing: on error `self` is unchanged.
    pub fn add_all(&mut self, other: &Change) -> Result<(), LedgerError> {
        let mut merged = self.clone();
        for (denomination, count) in other.iter() {
            merged.add(denomination, count)?;
        }
        *self = merged;
        Ok(())
    }

    /// Removes every entry of `other`. All-or-nothing: on error `self` is unchanged.
    pub fn remove_all(&mut self, other: &Change) -> Result<(), LedgerError> {
        let mut remaining = self.clone();
        for (denomination, count) in other.iter() {
            remaining.remove(denomination, count)?;
        }
        *self = remaining;
        Ok(())
    }

    /// Units held of `denomination`, 0 if absent.
    #[inline]
    pub fn count(&self, denomination: impl Into<Denomination>) -> u32 {
        self.counts.get(&denomination.into()).copied().unwrap_or(0)
    }

    /// Denominations present, ascending by value.
    pub fn elements(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.counts.keys().copied()
    }

    /// `(denomination, count)` pairs, ascending by value.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    /// Cached total value.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of distinct denominations present.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total rebuilt from the entries, ignoring the cache.
    #[cfg(test)]
    pub(crate) fn recomputed_total(&self) -> Money {
        self.iter()
            .map(|(d, c)| d.value().times(c))
            .fold(Money::zero(), |acc, v| acc + v)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for Change {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for Change {}

impl Hash for Change {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}

/// `{TWENTY_CENT=2, TWO_EURO=1}`, ascending by value.
impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", denomination, count)?;
        }
        f.write_str("}")
    }
}

impl From<BTreeMap<Denomination, u32>> for Change {
    fn from(counts: BTreeMap<Denomination, u32>) -> Self {
        let counts: BTreeMap<_, _> = counts.into_iter().filter(|(_, c)| *c > 0).collect();
        let total = counts
            .iter()
            .map(|(d, c)| d.value().times(*c))
            .fold(Money::zero(), |acc, v| acc + v);
        Change { counts, total }
    }
}

/// Later duplicates win, as with `BTreeMap::from`.
impl<const N: usize> From<[(Denomination, u32); N]> for Change {
    fn from(entries: [(Denomination, u32); N]) -> Self {
        Change::from(BTreeMap::from(entries))
    }
}

impl From<Change> for BTreeMap<Denomination, u32> {
    fn from(change: Change) -> Self {
        change.counts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
