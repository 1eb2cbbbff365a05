//! Money value object
//!
//! A non-negative amount with exactly two fractional digits.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_half_up;
use crate::error::DomainError;

/// Number of fractional digits carried by every amount
pub const MONEY_SCALE: u32 = 2;

/// A monetary amount, rounded half-up to two decimals on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Build an amount from a decimal value.
    ///
    /// Negative values are rejected before rounding, so `-0.001` fails even
    /// though it would round to zero.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid(format!(
                "Amount cannot be negative: {}",
                value
            )));
        }
        Ok(Self(round_half_up(value, MONEY_SCALE)))
    }

    /// Parse an amount from text, e.g. `"1500000.50"`
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::invalid(format!("Invalid amount format: '{}'", s)))?;
        Self::new(value)
    }

    pub fn zero() -> Self {
        Self(round_half_up(Decimal::ZERO, MONEY_SCALE))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    pub fn is_less_than(&self, other: &Money) -> bool {
        self.0 < other.0
    }

    pub fn is_equal_to(&self, other: &Money) -> bool {
        self.0 == other.0
    }

    /// Inclusive on both ends
    pub fn is_in_range(&self, min: &Money, max: &Money) -> bool {
        self.0 >= min.0 && self.0 <= max.0
    }

    /// Human-readable form with thousands separators. Whole amounts drop
    /// their cents: `1,000,000` and `1,000,000.50`.
    pub fn grouped(&self) -> String {
        let text = self.0.to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let digits: Vec<char> = int_part.chars().collect();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(*c);
        }

        if frac_part.trim_end_matches('0').is_empty() {
            out
        } else {
            format!("{}.{}", out, frac_part)
        }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
