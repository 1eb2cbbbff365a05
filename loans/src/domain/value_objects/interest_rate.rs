//! Annual interest rate, expressed as a percentage

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_half_up;
use crate::error::DomainError;

const RATE_SCALE: u32 = 2;
const DERIVED_SCALE: u32 = 6;

/// Annual percentage rate, `0 < rate <= 100`, two decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        let rounded = round_half_up(value, RATE_SCALE);
        if rounded <= Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "Interest rate must be greater than zero, got {}",
                value
            )));
        }
        if rounded > Decimal::ONE_HUNDRED {
            return Err(DomainError::invalid(format!(
                "Interest rate cannot exceed 100%, got {}",
                value
            )));
        }
        Ok(Self(rounded))
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let value = Decimal::from_str(s.trim()).map_err(|_| {
            DomainError::invalid(format!("Invalid interest rate format: '{}'", s))
        })?;
        Self::new(value)
    }

    /// Annual percentage, e.g. `15.50`
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Monthly percentage (annual / 12)
    pub fn monthly_rate(&self) -> Decimal {
        round_half_up(self.0 / Decimal::from(12), DERIVED_SCALE)
    }

    /// Annual rate as a fraction (annual / 100)
    pub fn as_fraction(&self) -> Decimal {
        round_half_up(self.0 / Decimal::ONE_HUNDRED, DERIVED_SCALE)
    }

    /// Periodic monthly rate as a fraction (annual / 1200), the `r` of the
    /// annuity formula
    pub fn monthly_fraction(&self) -> Decimal {
        round_half_up(self.0 / Decimal::from(1200), DERIVED_SCALE)
    }

    pub fn is_greater_than(&self, other: &InterestRate) -> bool {
        self.0 > other.0
    }

    pub fn is_less_than(&self, other: &InterestRate) -> bool {
        self.0 < other.0
    }

    pub fn is_equal_to(&self, other: &InterestRate) -> bool {
        self.0 == other.0
    }
}

impl TryFrom<Decimal> for InterestRate {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterestRate> for Decimal {
    fn from(rate: InterestRate) -> Self {
        rate.0
    }
}

impl FromStr for InterestRate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
