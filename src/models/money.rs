//! Money type for representing Rupiah amounts
//!
//! Amounts are whole Rupiah stored as i64. The Rupiah has no subunit in day to
//! day use, so there is no fractional part to carry around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Currency symbol followed by a non-breaking space, as the id-ID locale prints it
pub const RUPIAH_PREFIX: &str = "Rp\u{a0}";

/// A monetary amount in whole Rupiah
///
/// Arithmetic saturates at the `i64` bounds, so totals over a ledger loaded
/// from disk never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction may carry (one trillion Rupiah)
    pub const MAX_AMOUNT: Money = Money(1_000_000_000_000);

    /// Create a Money amount from whole Rupiah
    ///
    /// # Examples
    /// ```
    /// use toko_ledger::models::Money;
    /// let amount = Money::from_rupiah(25_000);
    /// assert_eq!(amount.rupiah(), 25_000);
    /// ```
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Self(rupiah)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole Rupiah
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts "100000", "100.000", "Rp 100.000" and "Rp100000". Dots are
    /// thousands separators in the Indonesian convention, so they are dropped.
    /// A comma would introduce a fractional part, which Rupiah amounts never have.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let rest = rest
            .strip_prefix("Rp")
            .or_else(|| rest.strip_prefix("rp"))
            .unwrap_or(rest)
            .trim_start_matches(|c: char| c.is_whitespace());

        if rest.contains(',') {
            return Err(MoneyParseError::Fractional(trimmed.to_string()));
        }

        let digits: String = rest.chars().filter(|c| *c != '.').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Group the digits of a non-negative number in threes with `.`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            write!(f, "-{}{}", RUPIAH_PREFIX, grouped)
        } else {
            write!(f, "{}{}", RUPIAH_PREFIX, grouped)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    Fractional(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::Fractional(s) => {
                write!(f, "Rupiah amounts have no fractional part: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
