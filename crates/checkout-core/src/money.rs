//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point reais:                                             │
//! │    497.0 + 394.0 - 39.4 = 851.6000000000001                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    49700 + 39400 - 3940 = 85160  (R$ 851,60, exactly)                   │
//! │    Percentages are basis points, rounded once per calculation          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let course = Money::from_cents(49700); // R$ 497,00
//! let ebook = Money::from_cents(9700);   // R$ 97,00
//!
//! let total = course + ebook;
//! assert_eq!(total.cents(), 59400);
//! assert_eq!(total.to_string(), "R$ 594,00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Basis points in 100%.
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest BRL unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: malformed carts with negative prices still produce a
///   number instead of a failure
/// - **Single field tuple struct**: serializes as a plain integer
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price_cents ──► CartLineItem.price() ──┬──► subtotal          │
/// │                                                 └──► bump_total        │
/// │                                                                         │
/// │  bump_total ──► bundle discount ──► coupon discount ──► final_total    │
/// │                                                                         │
/// │  final_total ──► installment options ──► "12x de R$ 70,97"             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(9790); // R$ 97,90
    /// assert_eq!(price.cents(), 9790);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion (truncated toward zero).
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `bps` basis points of this amount, rounded half away from zero
    /// to the nearest centavo.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000` for non-negative
    /// amounts, mirrored for negative ones. `i128` keeps large carts from
    /// overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let bumps = Money::from_cents(39400); // R$ 394,00
    /// assert_eq!(bumps.percentage(1000).cents(), 3940); // 10% = R$ 39,40
    ///
    /// let odd = Money::from_cents(59612);
    /// assert_eq!(odd.percentage(3000).cents(), 17884); // 178.836 rounds up
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let scale = BPS_SCALE as i128;
        let product = self.0 as i128 * bps as i128;
        let rounded = if product >= 0 {
            (product + scale / 2) / scale
        } else {
            (product - scale / 2) / scale
        };
        Money::from_cents(rounded as i64)
    }

    /// Splits the amount into `parts` equal shares, each rounded half away
    /// from zero to the nearest centavo.
    ///
    /// Returns `None` when `parts` is zero. The shares need not add back up
    /// to the amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let total = Money::from_cents(1000);
    /// assert_eq!(total.split(3), Some(Money::from_cents(333)));
    /// assert_eq!(total.split(6), Some(Money::from_cents(167))); // 166.67
    /// assert_eq!(total.split(0), None);
    /// ```
    pub fn split(&self, parts: u32) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        let parts = parts as i128;
        let doubled = self.0 as i128 * 2;
        let rounded = if doubled >= 0 {
            (doubled + parts) / (parts * 2)
        } else {
            (doubled - parts) / (parts * 2)
        };
        Some(Money::from_cents(rounded as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Brazilian Real formatting: `R$ 1.234,56`, negatives as `-R$ 5,50`.
///
/// ## Note
/// Matches the checkout page's `pt-BR` currency format so logs and CLI output
/// read the same as what the buyer sees.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let reais = self.reais().unsigned_abs().to_string();

        // Group thousands with '.'
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        write!(f, "{}R$ {},{:02}", sign, grouped, self.centavos_part())
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

/// Summing an empty iterator yields zero, which is what an empty partition
/// of the cart needs.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
