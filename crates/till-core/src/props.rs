//! Property-based tests for the change ledger and the register.
//!
//! - Cached total always matches the entries
//! - add then remove restores the ledger
//! - Failed transactions leave the drawer untouched
//! - Simulate never writes; commit with the same inputs hands out the same change

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::change::Change;
use crate::denomination::Denomination;
use crate::money::Money;
use crate::register::{CashRegister, TransactionMode};

/// Any catalog denomination.
fn denomination() -> impl Strategy<Value = Denomination> {
    (0..Denomination::ALL.len()).prop_map(|i| Denomination::ALL[i])
}

/// A ledger with a handful of entries and modest counts.
fn ledger() -> impl Strategy<Value = Change> {
    prop::collection::btree_map(denomination(), 0u32..60, 0..8)
        .prop_map(|counts: BTreeMap<Denomination, u32>| Change::from(counts))
}

/// Ledger mutations: (denomination, count, is_add).
fn mutations() -> impl Strategy<Value = Vec<(Denomination, u32, bool)>> {
    prop::collection::vec((denomination(), 0u32..40, any::<bool>()), 0..40)
}

/// Prices up to €200.00.
fn price() -> impl Strategy<Value = Money> {
    (0i64..20_000).prop_map(Money::from_minor)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Cached total equals Σ count × value after every accepted or rejected mutation.
    #[test]
    fn prop_total_tracks_entries(start in ledger(), ops in mutations()) {
        let mut change = start;
        for (denomination, count, is_add) in ops {
            let _ = if is_add {
                change.add(denomination, count).map(|_| ())
            } else {
                change.remove(denomination, count).map(|_| ())
            };
            prop_assert_eq!(change.total(), change.recomputed_total());
            prop_assert!(!change.total().is_negative());
            prop_assert!(change.iter().all(|(_, c)| c > 0));
        }
    }

    /// add(d, n) followed by remove(d, n) is the identity.
    #[test]
    fn prop_add_remove_round_trip(start in ledger(), d in denomination(), n in 0u32..1_000) {
        let mut change = start.clone();
        change.add(d, n).unwrap();
        change.remove(d, n).unwrap();
        prop_assert_eq!(&change, &start);
        prop_assert_eq!(change.total(), start.total());
    }

    /// Whatever the outcome, a failed transaction leaves the drawer as it was,
    /// and a committed one moves exactly `price` into it.
    #[test]
    fn prop_drawer_conservation(start in ledger(), payment in ledger(), price in price()) {
        let mut drawer = start.clone();
        let mut register = CashRegister::new(&mut drawer);

        match register.settle(price, &payment) {
            Ok(change) => {
                prop_assert_eq!(change.total(), payment.total() - price);
                prop_assert_eq!(register.drawer().total(), start.total() + price);
                prop_assert_eq!(register.drawer().total(), register.drawer().recomputed_total());
            }
            Err(_) => {
                prop_assert_eq!(register.drawer(), &start);
                prop_assert_eq!(register.drawer().total(), start.total());
            }
        }
    }

    /// Simulate is repeatable and side-effect free; commit agrees with it.
    #[test]
    fn prop_simulate_matches_commit(start in ledger(), payment in ledger(), price in price()) {
        let mut drawer = start.clone();
        let mut register = CashRegister::new(&mut drawer);

        let first = register.perform_transaction(price, &payment, TransactionMode::Simulate);
        let second = register.perform_transaction(price, &payment, TransactionMode::Simulate);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(register.drawer(), &start);

        let committed = register.perform_transaction(price, &payment, TransactionMode::Commit);
        prop_assert_eq!(&committed, &first);
    }
}
