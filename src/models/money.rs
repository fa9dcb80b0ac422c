//! Money type for representing expense amounts
//!
//! Amounts are exact decimals, so totals never drift the way binary floats
//! do and every digit the user entered is kept. Parsing accepts the decimal
//! text typed into the amount field as well as the exponent form (`1.0E7`)
//! found in older expense files.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Largest accepted magnitude, in whole units
///
/// Far above any real expense, and low enough that no number of records that
/// fits in memory can push a total past the range of [`Decimal`].
pub const MAX_UNITS: i64 = 1_000_000_000_000_000;

/// Highest power of ten a [`Decimal`] can scale by
const MAX_EXPONENT: u32 = 28;

/// A monetary amount as an exact decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_manager::models::Money;
    /// let amount = Money::from_cents(1250); // 12.50
    /// assert_eq!(amount.to_string(), "12.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from whole units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Parse a decimal amount
    ///
    /// Accepts `"12"`, `"12.5"`, `"0.125"`, `".5"`, `"12."`, a leading sign and
    /// an exponent (`"1.0E7"`, `"2.5e-3"`). Surrounding whitespace is ignored.
    /// Magnitudes above [`MAX_UNITS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(trimmed.to_string());

        let (mantissa, exponent) = match trimmed.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + 1..])),
            None => (trimmed, None),
        };

        let (sign, body) = match mantissa.as_bytes().first() {
            Some(b'-') => ("-", &mantissa[1..]),
            Some(b'+') => ("", &mantissa[1..]),
            _ => ("", mantissa),
        };

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (body, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let normalized = if fraction.is_empty() {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{}", sign, whole, fraction)
        };
        let mut value = Decimal::from_str(&normalized).map_err(|_| out_of_range())?;

        if let Some(exponent) = exponent {
            let digits = exponent.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exponent);
            if digits.is_empty() || !all_digits(digits) {
                return Err(invalid());
            }
            let power: i64 = exponent.parse().map_err(|_| out_of_range())?;
            value = scale_by_power_of_ten(value, power).ok_or_else(out_of_range)?;
        }

        if value.abs() > Decimal::from(MAX_UNITS) {
            return Err(out_of_range());
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, Money(self.0.abs()))
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `value * 10^power`, or `None` when the result leaves the decimal range
fn scale_by_power_of_ten(value: Decimal, power: i64) -> Option<Decimal> {
    let magnitude = u32::try_from(power.unsigned_abs()).ok()?;
    if magnitude > MAX_EXPONENT {
        return None;
    }

    if power >= 0 {
        let factor = Decimal::try_from_i128_with_scale(10i128.pow(magnitude), 0).ok()?;
        value.checked_mul(factor)
    } else {
        let factor = Decimal::try_from_i128_with_scale(1, magnitude).ok()?;
        value.checked_mul(factor)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal with at least two fractional digits, as written to the
/// expense file
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.normalize();
        if value.scale() < 2 {
            write!(f, "{:.2}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Serialized as the same text the expense file holds
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Money::parse(&text).map_err(serde::de::Error::custom)
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
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "'{}' is not a valid number", s),
            Self::OutOfRange(s) => write!(f, "'{}' is out of range", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
