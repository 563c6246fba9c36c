//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A receipt total that is off by one unit is a customer dispute.        │
//! │                                                                         │
//! │  OUR SOLUTION: whole integer currency units (i64)                       │
//! │    Menu prices are whole units (Fries = 250), line totals are          │
//! │    qty × price, and the printed receipt shows plain integers.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use junction_core::money::Money;
//!
//! let price = Money::from_units(250);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.units(), 500);
//!
//! // Display renders exactly what the receipt prints:
//! assert_eq!(line_total.to_string(), "500");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serializes as a bare integer so the
///   UI's `{name, qty, price}` payloads round-trip unchanged
///
/// ## Where Money is Used
/// ```text
/// ReceiptLine.unit_price ──► line_total (qty × price) ──► document total
///
/// The declared total is VALIDATED against the line sum, never recomputed
/// and trusted (see ReceiptError::TotalMismatch).
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use junction_core::money::Money;
    ///
    /// let price = Money::from_units(250);
    /// assert_eq!(price.units(), 250);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use junction_core::money::Money;
    ///
    /// let unit_price = Money::from_units(250);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.units(), 500);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Order line: 2 x Fries @ 250
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Receipt line: "2 x Fries ..... 500"
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the bare integer, exactly as printed on receipts.
///
/// ## Note
/// The deployed receipts carry no decimal point and no currency symbol
/// (`"Total: 500"`), so Display must not add either.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when summing line totals.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Sum over line totals (`lines.iter().map(..).sum()`).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
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
    fn test_from_units() {
        let money = Money::from_units(500);
        assert_eq!(money.units(), 500);
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(format!("{}", Money::from_units(500)), "500");
        assert_eq!(format!("{}", Money::from_units(0)), "0");
        assert_eq!(format!("{}", Money::from_units(-250)), "-250");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!(a.multiply_quantity(3).units(), 3000);
    }

    #[test]
    fn test_sum_of_line_totals() {
        let lines = [Money::from_units(500), Money::from_units(550)];
        let total: Money = lines.iter().copied().sum();
        assert_eq!(total.units(), 1050);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_units(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        // The UI sends {name, qty, price: 250}; Money must round-trip that
        // shape without a wrapper object.
        let json = serde_json::to_string(&Money::from_units(250)).unwrap();
        assert_eq!(json, "250");

        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back, Money::from_units(250));
    }
}
