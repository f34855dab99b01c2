//! # Denomination Catalog
//!
//! The closed set of euro coins and bills a drawer can hold.
//!
//! ## Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Coins (minor units)            │  Bills (minor units)                  │
//! │  ─────────────────────          │  ─────────────────────                │
//! │  ONE_CENT        1              │  FIVE_EURO              500           │
//! │  TWO_CENT        2              │  TEN_EURO             1_000           │
//! │  FIVE_CENT       5              │  TWENTY_EURO          2_000           │
//! │  TEN_CENT       10              │  FIFTY_EURO           5_000           │
//! │  TWENTY_CENT    20              │  ONE_HUNDRED_EURO    10_000           │
//! │  FIFTY_CENT     50              │  TWO_HUNDRED_EURO    20_000           │
//! │  ONE_EURO      100              │  FIVE_HUNDRED_EURO   50_000           │
//! │  TWO_EURO      200              │                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Denominations order by face value. A coin and a bill with the same face
//! value would still be different keys; on a tie the coin sorts first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Coins
// =============================================================================

/// Euro coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    OneCent,
    TwoCent,
    FiveCent,
    TenCent,
    TwentyCent,
    FiftyCent,
    OneEuro,
    TwoEuro,
}

impl Coin {
    /// Every coin, ascending by value.
    pub const ALL: [Coin; 8] = [
        Coin::OneCent,
        Coin::TwoCent,
        Coin::FiveCent,
        Coin::TenCent,
        Coin::TwentyCent,
        Coin::FiftyCent,
        Coin::OneEuro,
        Coin::TwoEuro,
    ];

    /// Face value in minor units.
    pub const fn minor_value(self) -> i64 {
        match self {
            Coin::OneCent => 1,
            Coin::TwoCent => 2,
            Coin::FiveCent => 5,
            Coin::TenCent => 10,
            Coin::TwentyCent => 20,
            Coin::FiftyCent => 50,
            Coin::OneEuro => 100,
            Coin::TwoEuro => 200,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Coin::OneCent => "ONE_CENT",
            Coin::TwoCent => "TWO_CENT",
            Coin::FiveCent => "FIVE_CENT",
            Coin::TenCent => "TEN_CENT",
            Coin::TwentyCent => "TWENTY_CENT",
            Coin::FiftyCent => "FIFTY_CENT",
            Coin::OneEuro => "ONE_EURO",
            Coin::TwoEuro => "TWO_EURO",
        }
    }
}

// =============================================================================
// Bills
// =============================================================================

/// Euro banknotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bill {
    FiveEuro,
    TenEuro,
    TwentyEuro,
    FiftyEuro,
    OneHundredEuro,
    TwoHundredEuro,
    FiveHundredEuro,
}

impl Bill {
    /// Every bill, ascending by value.
    pub const ALL: [Bill; 7] = [
        Bill::FiveEuro,
        Bill::TenEuro,
        Bill::TwentyEuro,
        Bill::FiftyEuro,
        Bill::OneHundredEuro,
        Bill::TwoHundredEuro,
        Bill::FiveHundredEuro,
    ];

    /// Face value in minor units.
    pub const fn minor_value(self) -> i64 {
        match self {
            Bill::FiveEuro => 500,
            Bill::TenEuro => 1_000,
            Bill::TwentyEuro => 2_000,
            Bill::FiftyEuro => 5_000,
            Bill::OneHundredEuro => 10_000,
            Bill::TwoHundredEuro => 20_000,
            Bill::FiveHundredEuro => 50_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Bill::FiveEuro => "FIVE_EURO",
            Bill::TenEuro => "TEN_EURO",
            Bill::TwentyEuro => "TWENTY_EURO",
            Bill::FiftyEuro => "FIFTY_EURO",
            Bill::OneHundredEuro => "ONE_HUNDRED_EURO",
            Bill::TwoHundredEuro => "TWO_HUNDRED_EURO",
            Bill::FiveHundredEuro => "FIVE_HUNDRED_EURO",
        }
    }
}

// =============================================================================
// Denomination
// =============================================================================

/// One kind of physical currency unit: a coin or a bill.
///
/// This is the ledger key. Serialized by name (`"TEN_EURO"`), so a change
/// ledger reads as `{ "TWO_EURO": 1, "TWENTY_CENT": 2 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Denomination {
    Coin(Coin),
    Bill(Bill),
}

impl Denomination {
    /// The full catalog, ascending by value.
    pub const ALL: [Denomination; 15] = [
        Denomination::Coin(Coin::OneCent),
        Denomination::Coin(Coin::TwoCent),
        Denomination::Coin(Coin::FiveCent),
        Denomination::Coin(Coin::TenCent),
        Denomination::Coin(Coin::TwentyCent),
        Denomination::Coin(Coin::FiftyCent),
        Denomination::Coin(Coin::OneEuro),
        Denomination::Coin(Coin::TwoEuro),
        Denomination::Bill(Bill::FiveEuro),
        Denomination::Bill(Bill::TenEuro),
        Denomination::Bill(Bill::TwentyEuro),
        Denomination::Bill(Bill::FiftyEuro),
        Denomination::Bill(Bill::OneHundredEuro),
        Denomination::Bill(Bill::TwoHundredEuro),
        Denomination::Bill(Bill::FiveHundredEuro),
    ];

    /// The catalog in strictly descending order, the walk order of the
    /// change search.
    pub fn descending() -> impl Iterator<Item = Denomination> {
        Self::ALL.into_iter().rev()
    }

    /// Face value in minor units.
    #[inline]
    pub const fn minor_value(self) -> i64 {
        match self {
            Denomination::Coin(coin) => coin.minor_value(),
            Denomination::Bill(bill) => bill.minor_value(),
        }
    }

    /// Face value as [`Money`].
    #[inline]
    pub const fn value(self) -> Money {
        Money::from_minor(self.minor_value())
    }

    /// Catalog name, e.g. `TEN_EURO`.
    pub const fn name(self) -> &'static str {
        match self {
            Denomination::Coin(coin) => coin.name(),
            Denomination::Bill(bill) => bill.name(),
        }
    }

    // Tie-breaker for equal face values.
    const fn kind_rank(self) -> u8 {
        match self {
            Denomination::Coin(_) => 0,
            Denomination::Bill(_) => 1,
        }
    }
}

impl Ord for Denomination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minor_value()
            .cmp(&other.minor_value())
            .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
    }
}

impl PartialOrd for Denomination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Coin> for Denomination {
    fn from(coin: Coin) -> Self {
        Denomination::Coin(coin)
    }
}

impl From<Bill> for Denomination {
    fn from(bill: Bill) -> Self {
        Denomination::Bill(bill)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = ValidationError;

    /// Parses a catalog name. Case-insensitive, `-` accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ValidationError::UnknownDenomination {
                name: s.to_string(),
            })
    }
}

impl From<Denomination> for String {
    fn from(denomination: Denomination) -> Self {
        denomination.name().to_string()
    }
}

impl TryFrom<String> for Denomination {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
