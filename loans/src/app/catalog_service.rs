//! Catalog service
//!
//! Administers the reference data applications depend on: loan types and
//! statuses. Also quotes the monthly installment for a prospective loan.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{out_of_range, store_failure};
use crate::domain::entities::{LoanType, LoanTypeId, Status, StatusId};
use crate::domain::ports::{IdGenerator, LoanTypeRepository, StatusRepository};
use crate::domain::value_objects::{InterestRate, Money, Name};
use crate::error::AppError;

/// Input for registering a loan type
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterLoanTypeRequest {
    pub name: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub interest_rate: Decimal,
    #[serde(default)]
    pub requires_auto_validation: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Reference data loaded at start-up
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub statuses: Vec<StatusSeed>,
    #[serde(default)]
    pub loan_types: Vec<RegisterLoanTypeRequest>,
}

/// Service for loan type and status administration
pub struct CatalogService<LR, SR>
where
    LR: LoanTypeRepository,
    SR: StatusRepository,
{
    loan_types: Arc<LR>,
    statuses: Arc<SR>,
    ids: Arc<dyn IdGenerator>,
}

impl<LR, SR> CatalogService<LR, SR>
where
    LR: LoanTypeRepository,
    SR: StatusRepository,
{
    pub fn new(loan_types: Arc<LR>, statuses: Arc<SR>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            loan_types,
            statuses,
            ids,
        }
    }

    /// Register a new loan type. Names are trimmed and unique.
    ///
    /// The lookup rejects known duplicates early; the repository's `save`
    /// enforces uniqueness atomically for concurrent registrations.
    pub async fn register_loan_type(
        &self,
        request: &RegisterLoanTypeRequest,
    ) -> Result<LoanType, AppError> {
        let name = Name::parse(request.name.trim())?;
        let min_amount = Money::new(request.min_amount)?;
        let max_amount = Money::new(request.max_amount)?;
        let interest_rate = InterestRate::new(request.interest_rate)?;

        if self
            .loan_types
            .find_by_name(name.as_str())
            .await
            .map_err(store_failure)?
            .is_some()
        {
            return Err(AppError::BusinessRuleViolation(format!(
                "Loan type '{}' already exists",
                name
            )));
        }

        let id = LoanTypeId::generate(self.ids.as_ref())
            .map_err(|e| AppError::ConfigurationError(e.to_string()))?;
        let loan_type = LoanType::create(
            id,
            name,
            min_amount,
            max_amount,
            interest_rate,
            request.requires_auto_validation,
        )?;

        let saved = self
            .loan_types
            .save(&loan_type)
            .await
            .map_err(store_failure)?;

        tracing::info!(
            loan_type_id = %saved.id(),
            name = %saved.name(),
            range = %saved.amount_range(),
            "Loan type registered"
        );
        Ok(saved)
    }

    /// Register a new status. Names are trimmed and unique, ignoring case.
    pub async fn register_status(&self, name: &str, description: &str) -> Result<Status, AppError> {
        let id = StatusId::generate(self.ids.as_ref())
            .map_err(|e| AppError::ConfigurationError(e.to_string()))?;
        let status = Status::create(id, name.trim(), description)?;

        if self
            .statuses
            .find_by_name(status.name())
            .await
            .map_err(store_failure)?
            .is_some()
        {
            return Err(AppError::BusinessRuleViolation(format!(
                "Status '{}' already exists",
                status.name()
            )));
        }

        let saved = self.statuses.save(&status).await.map_err(store_failure)?;

        tracing::info!(status_id = %saved.id(), name = %saved.name(), "Status registered");
        Ok(saved)
    }

    /// Replace a status description
    ///
    /// `expected_version` is the version the caller last read; the update is
    /// rejected with `VersionConflict` if the stored status has moved on.
    pub async fn update_status_description(
        &self,
        id: &str,
        expected_version: u64,
        description: &str,
    ) -> Result<Status, AppError> {
        let id = StatusId::parse(id)?;
        let current = self
            .statuses
            .find_by_id(&id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| AppError::ReferenceNotFound(format!("Status {} does not exist", id)))?;

        if current.version() != expected_version {
            tracing::warn!(
                status_id = %id,
                expected = expected_version,
                found = current.version(),
                "Stale status update rejected"
            );
            return Err(AppError::VersionConflict(format!(
                "Status {} is at version {}, not {}",
                id,
                current.version(),
                expected_version
            )));
        }

        let updated = self
            .statuses
            .update(&current.with_description(description))
            .await
            .map_err(store_failure)?;

        tracing::info!(status_id = %id, version = updated.version(), "Status description updated");
        Ok(updated)
    }

    /// Statuses whose description mentions `text`. Blank text lists all.
    pub async fn search_statuses(&self, text: &str) -> Result<Vec<Status>, AppError> {
        let result = if text.trim().is_empty() {
            self.statuses.find_all().await
        } else {
            self.statuses.find_by_description_containing(text).await
        };
        result.map_err(store_failure)
    }

    /// Monthly installment for borrowing `amount` over `term_months`
    pub async fn quote_installment(
        &self,
        loan_type_id: &str,
        amount: Decimal,
        term_months: i64,
    ) -> Result<Money, AppError> {
        let id = LoanTypeId::parse(loan_type_id)?;
        let amount = Money::new(amount)?;

        let loan_type = self
            .loan_types
            .find_by_id(&id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Loan type {} does not exist", id))
            })?;

        if !loan_type.is_amount_valid(&amount) {
            return Err(out_of_range(&loan_type, &amount));
        }

        Ok(loan_type.compute_monthly_installment(&amount, term_months)?)
    }

    /// Register everything in `seed` that is not already present
    pub async fn seed(&self, seed: &CatalogSeed) -> Result<(), AppError> {
        for status in &seed.statuses {
            match self.register_status(&status.name, &status.description).await {
                Ok(_) => {}
                Err(AppError::BusinessRuleViolation(msg)) => {
                    tracing::debug!(reason = %msg, "Skipping seeded status");
                }
                Err(e) => return Err(e),
            }
        }
        for loan_type in &seed.loan_types {
            match self.register_loan_type(loan_type).await {
                Ok(_) => {}
                Err(AppError::BusinessRuleViolation(msg)) => {
                    tracing::debug!(reason = %msg, "Skipping seeded loan type");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
