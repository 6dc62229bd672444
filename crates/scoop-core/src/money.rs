//! # Money Module
//!
//! Integer-cent money used for order cost estimates.
//!
//! ## Why Integer Money?
//! Floating-point sums of prices drift (`0.1 + 0.2 != 0.3`).
//! Cents in an `i64` never do.
//!
//! ## Usage
//! ```rust
//! use scoop_core::money::Money;
//!
//! let per_line = Money::from_cents(2599);
//! let estimate = per_line * 3usize;
//! assert_eq!(estimate.cents(), 7797);
//! assert_eq!(estimate.to_string(), "$77.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use ts_rs::TS;

/// A monetary value in the smallest currency unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar part (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents part (always positive).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Fixed `$d.cc` rendering for logs and tests. User-facing amounts go
/// through the dashboard's configured currency format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

/// Multiplication by a line count.
impl Mul<usize> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: usize) -> Self {
        Money(self.0 * count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2599);
        assert_eq!(money.cents(), 2599);
        assert_eq!(money.dollars(), 25);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2599).to_string(), "$25.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_line_count_multiplication() {
        let per_line = Money::from_cents(2599);
        assert_eq!((per_line * 0usize).cents(), 0);
        assert_eq!((per_line * 4usize).cents(), 10396);
        assert_eq!((per_line + per_line).cents(), 5198);
    }
}
