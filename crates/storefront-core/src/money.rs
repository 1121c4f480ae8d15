//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                │
//! │                                                            │
//! │  In floating point:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!              │
//! │                                                            │
//! │  OUR SOLUTION: integer minor units (bani)                  │
//! │    500 lei = 50000 bani, and sums of carts stay exact      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! // Whole-unit prices (catalog entries are whole lei)
//! let price = Money::from_major(500);
//!
//! // Arithmetic operations
//! let total = price + Money::from_bani(2550); // 525.50
//! assert_eq!(total.bani(), 52550);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (bani).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds and adjustments
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Total ordering**: the recommendation scan compares prices directly
///
/// Every monetary value in the system flows through this type: product base
/// prices, effective prices, and cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from bani (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_bani(1099); // 10.99
    /// assert_eq!(price.bani(), 1099);
    /// ```
    #[inline]
    pub const fn from_bani(bani: i64) -> Self {
        Money(bani)
    }

    /// Creates a Money value from whole major units (lei).
    ///
    /// Catalog prices are whole amounts, so this is the constructor the
    /// seeding code uses.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in bani (smallest currency unit).
    #[inline]
    pub const fn bani(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
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
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders `major.minor` with two decimals, no currency symbol:
/// `500.00`, `-5.50`. Menu output interpolates this directly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Default money is zero.
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

/// Summation for cart totals: an empty cart sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bani() {
        let money = Money::from_bani(1099);
        assert_eq!(money.bani(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(500).bani(), 50000);
        assert_eq!(Money::from_major(0), Money::zero());
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).bani(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).bani(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_bani(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_major(500)), "500.00");
        assert_eq!(format!("{}", Money::from_bani(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_bani(1000);
        let b = Money::from_bani(500);

        assert_eq!((a + b).bani(), 1500);
        assert_eq!((a - b).bani(), 500);

        let mut acc = a;
        acc += b;
        assert_eq!(acc.bani(), 1500);
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_major(2100) > Money::from_major(2000));
        assert!(Money::from_bani(-1) < Money::zero());
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(500), Money::from_major(2000)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(2500));
    }
}
