//! Fixed-point currency amounts.
//!
//! An [`Amount`] is a number of integer cents. Keeping money as `i64` cents
//! makes every sum exact and reproducible across platforms, while the JSON
//! representation stays a plain decimal number for compatibility with the
//! persisted document layout.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Smallest valid transaction amount: 0.01.
pub const MIN_TRANSACTION_CENTS: i64 = 1;

/// Largest valid transaction amount: 999999.99.
pub const MAX_TRANSACTION_CENTS: i64 = 99_999_999;

/// A currency amount in integer cents.
///
/// Transaction amounts are restricted to 0.01–999999.99 by
/// [`Amount::parse_transaction_amount`]; sums of amounts (balances) may be
/// negative and arbitrarily large.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Create an amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The number of cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// The amount as a decimal value (exact for any realistic magnitude).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_value(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a caller-supplied decimal value as a transaction amount.
    ///
    /// Rounds to the nearest cent and enforces the 0.01–999999.99 range.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message when the value is not a positive
    /// number within range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse_transaction_amount(value: f64) -> Result<Self, String> {
        if !value.is_finite() || value <= 0.0 {
            return Err("amount must be a positive number".into());
        }
        let cents = (value * 100.0).round() as i64;
        if !(MIN_TRANSACTION_CENTS..=MAX_TRANSACTION_CENTS).contains(&cents) {
            return Err("amount must be between 0.01 and 999999.99".into());
        }
        Ok(Self(cents))
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({self})")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_value())
    }
}

impl<'de> Deserialize<'de> for Amount {
    #[allow(clippy::cast_possible_truncation)]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value.abs() > 1.0e15 {
            return Err(serde::de::Error::custom("amount out of range"));
        }
        Ok(Self((value * 100.0).round() as i64))
    }
}
