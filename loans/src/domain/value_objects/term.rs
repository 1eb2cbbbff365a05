//! Loan term in months

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MIN_TERM_MONTHS: i64 = 1;
/// Ten years
pub const MAX_TERM_MONTHS: i64 = 120;

/// Repayment term, between 1 and 120 months inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Term(u32);

impl Term {
    pub fn new(months: i64) -> Result<Self, DomainError> {
        if months < MIN_TERM_MONTHS {
            return Err(DomainError::invalid(format!(
                "Term must be at least {} month, got {}",
                MIN_TERM_MONTHS, months
            )));
        }
        if months > MAX_TERM_MONTHS {
            return Err(DomainError::invalid(format!(
                "Term cannot exceed {} months, got {}",
                MAX_TERM_MONTHS, months
            )));
        }
        u32::try_from(months)
            .map(Self)
            .map_err(|_| DomainError::invalid(format!("Term out of range: {}", months)))
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let months = s
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::invalid(format!("Invalid term format: '{}'", s)))?;
        Self::new(months)
    }

    pub fn months(&self) -> u32 {
        self.0
    }

    /// Under a year
    pub fn is_short(&self) -> bool {
        self.0 < 12
    }

    /// Over five years
    pub fn is_long(&self) -> bool {
        self.0 > 60
    }

    pub fn years(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(12)
    }
}

impl TryFrom<i64> for Term {
    type Error = DomainError;

    fn try_from(months: i64) -> Result<Self, Self::Error> {
        Self::new(months)
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl FromStr for Term {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}
