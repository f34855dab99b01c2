//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A drawer that counts in floats slowly loses (or invents) cents.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    €7.58 is stored as 758. Every coin and bill has an exact value.     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::from_minor(758); // €7.58
//! let paid = Money::from_minor(1000); // €10.00
//!
//! assert_eq!((paid - price).minor(), 242);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: A negative price must be representable so it can be
///   rejected by validation instead of being silently unrepresentable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  price ──┐                                                              │
/// │          ├──► change_due = paid - price ──► greedy search              │
/// │  paid ───┘        ▲                                                     │
/// │                   │                                                     │
/// │  Change.total ────┘  (cached, updated on every add/remove)              │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // Represents €10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euro) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).minor_part(), 99);
    /// assert_eq!(Money::from_minor(-550).minor_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Value of `count` physical units each worth `self`.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let twenty_cent = Money::from_minor(20);
    /// assert_eq!(twenty_cent.times(2).minor(), 40);
    /// ```
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as euros, e.g. `€7.58`.
///
/// ## Note
/// Intended for logs and the CLI; no localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(758).to_string(), "€7.58");
        assert_eq!(Money::from_minor(500).to_string(), "€5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-€5.50");
        assert_eq!(Money::zero().to_string(), "€0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(758);

        assert_eq!((a - b).minor(), 242);
        assert_eq!((a + b).minor(), 1758);
        assert_eq!(b.times(3).minor(), 2274);

        let mut c = a;
        c -= b;
        c += Money::from_minor(8);
        assert_eq!(c.minor(), 250);
    }

    #[test]
    fn test_times_large_count_does_not_overflow() {
        let bill = Money::from_minor(50_000);
        assert_eq!(bill.times(u32::MAX).minor(), 50_000 * u32::MAX as i64);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_minor(-1).is_negative());
        assert!(!Money::from_minor(-1).is_zero());
    }

    #[test]
    fn test_serde_is_a_bare_integer() {
        let json = serde_json::to_string(&Money::from_minor(242)).unwrap();
        assert_eq!(json, "242");
        let back: Money = serde_json::from_str("242").unwrap();
        assert_eq!(back, Money::from_minor(242));
    }
}
