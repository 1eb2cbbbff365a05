//! Loan type domain entity
//!
//! A loan product: the amount range it accepts, its annual rate and whether
//! applications for it are validated automatically.

use rust_decimal::Decimal;
use serde::Serialize;

use super::identifier::uuid_identifier;
use crate::domain::value_objects::{InterestRate, Money, Name};
use crate::error::DomainError;

uuid_identifier!(
    /// Unique identifier for a loan type
    LoanTypeId
);

/// A loan product configuration (aggregate root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanType {
    id: LoanTypeId,
    name: Name,
    min_amount: Money,
    max_amount: Money,
    interest_rate: InterestRate,
    requires_auto_validation: bool,
    version: u64,
}

impl LoanType {
    /// Create a new, unpersisted loan type (version 0)
    pub fn create(
        id: LoanTypeId,
        name: Name,
        min_amount: Money,
        max_amount: Money,
        interest_rate: InterestRate,
        requires_auto_validation: bool,
    ) -> Result<Self, DomainError> {
        Self::reconstruct(
            id,
            name,
            min_amount,
            max_amount,
            interest_rate,
            requires_auto_validation,
            0,
        )
    }

    /// Rebuild a loan type loaded from storage
    pub fn reconstruct(
        id: LoanTypeId,
        name: Name,
        min_amount: Money,
        max_amount: Money,
        interest_rate: InterestRate,
        requires_auto_validation: bool,
        version: u64,
    ) -> Result<Self, DomainError> {
        if min_amount.is_greater_than(&max_amount) {
            return Err(DomainError::invalid(format!(
                "Minimum amount {} cannot be greater than maximum amount {}",
                min_amount, max_amount
            )));
        }
        Ok(Self {
            id,
            name,
            min_amount,
            max_amount,
            interest_rate,
            requires_auto_validation,
            version,
        })
    }

    pub fn id(&self) -> LoanTypeId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn min_amount(&self) -> Money {
        self.min_amount
    }

    pub fn max_amount(&self) -> Money {
        self.max_amount
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    pub fn requires_auto_validation(&self) -> bool {
        self.requires_auto_validation
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether `amount` lies within `[min_amount, max_amount]`
    pub fn is_amount_valid(&self, amount: &Money) -> bool {
        amount.is_in_range(&self.min_amount, &self.max_amount)
    }

    /// Permitted range as text, e.g. `1,000,000–10,000,000`
    pub fn amount_range(&self) -> String {
        format!(
            "{}–{}",
            self.min_amount.grouped(),
            self.max_amount.grouped()
        )
    }

    /// Fixed monthly payment for an amortized loan:
    ///
    /// `P · r · (1+r)^n / ((1+r)^n − 1)`
    ///
    /// where `r` is the monthly rate as a fraction (six decimals) and `n` the
    /// number of months. The result is rounded half-up to cents.
    ///
    /// `r` comes from `InterestRate::monthly_fraction` (annual / 1200), not
    /// `monthly_rate`, which is still a percentage.
    pub fn compute_monthly_installment(
        &self,
        amount: &Money,
        term_months: i64,
    ) -> Result<Money, DomainError> {
        if !self.is_amount_valid(amount) {
            return Err(DomainError::invalid(format!(
                "Amount {} is outside the permitted range for this loan type ({})",
                amount.grouped(),
                self.amount_range()
            )));
        }
        if term_months <= 0 {
            return Err(DomainError::invalid(format!(
                "Term must be greater than 0 months, got {}",
                term_months
            )));
        }

        let overflow = || DomainError::invalid("Installment computation overflowed");
        let principal = amount.value();
        let rate = self.interest_rate.monthly_fraction();

        let growth = checked_pow(Decimal::ONE + rate, term_months).ok_or_else(overflow)?;
        let denominator = growth - Decimal::ONE;

        let installment = if denominator.is_zero() {
            principal
                .checked_div(Decimal::from(term_months))
                .ok_or_else(overflow)?
        } else {
            principal
                .checked_mul(rate)
                .and_then(|v| v.checked_mul(growth))
                .and_then(|v| v.checked_div(denominator))
                .ok_or_else(overflow)?
        };

        Money::new(installment)
    }

    /// Acknowledge a successful write. The new version must move forward.
    pub fn mark_persisted(&self, new_version: u64) -> Result<Self, DomainError> {
        if new_version <= self.version {
            return Err(DomainError::invalid(format!(
                "New version {} must be greater than current version {}",
                new_version, self.version
            )));
        }
        Ok(Self {
            version: new_version,
            ..self.clone()
        })
    }
}

/// Exponentiation by squaring with overflow checks
fn checked_pow(base: Decimal, exponent: i64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(factor)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.checked_mul(factor)?;
        }
    }
    Some(result)
}
