//! Loan application service
//!
//! Turns raw applicant input into a persisted `LoanApplication`. Every step
//! short-circuits on failure, and nothing is written until all checks pass:
//!
//! 1. Structural validation of the request (no I/O)
//! 2. Loan type resolution
//! 3. Amount range check against the resolved loan type
//! 4. Initial status resolution
//! 5. Aggregate construction with a freshly generated id
//! 6. Persistence

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{out_of_range, store_failure};
use crate::domain::entities::{ApplicationId, LoanApplication, LoanTypeId, Status};
use crate::domain::ports::{
    ApplicationRepository, IdGenerator, LoanTypeRepository, StatusRepository,
};
use crate::domain::value_objects::{Email, Money, Term};
use crate::error::AppError;

/// Raw applicant input, as received from a transport layer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateApplicationRequest {
    pub amount: Option<Decimal>,
    pub term_months: Option<i64>,
    pub email: Option<String>,
    pub loan_type_id: Option<String>,
}

impl CreateApplicationRequest {
    pub fn new(
        amount: Decimal,
        term_months: i64,
        email: impl Into<String>,
        loan_type_id: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            term_months: Some(term_months),
            email: Some(email.into()),
            loan_type_id: Some(loan_type_id.into()),
        }
    }
}

/// Typed values extracted from a request that passed structural validation
struct ValidatedRequest {
    amount: Money,
    term: Term,
    email: Email,
    loan_type_id: LoanTypeId,
}

impl ValidatedRequest {
    fn from_request(request: &CreateApplicationRequest) -> Result<Self, AppError> {
        let amount = match request.amount {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => {
                return Err(AppError::InvalidInput(
                    "Amount is required and must be greater than zero".to_string(),
                ))
            }
        };
        let term_months = match request.term_months {
            Some(months) if months > 0 => months,
            _ => {
                return Err(AppError::InvalidInput(
                    "Term is required and must be greater than zero".to_string(),
                ))
            }
        };
        let email = match request.email.as_deref() {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(AppError::InvalidInput("Email is required".to_string())),
        };
        let loan_type_id = match request.loan_type_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(AppError::InvalidInput("Loan type is required".to_string())),
        };

        let amount = Money::new(amount)?;
        if amount.is_zero() {
            return Err(AppError::InvalidInput(
                "Amount is required and must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            amount,
            term: Term::new(term_months)?,
            email: Email::parse(email)?,
            loan_type_id: LoanTypeId::parse(loan_type_id)?,
        })
    }
}

/// Service for creating and listing loan applications
pub struct LoanApplicationService<LR, SR, AR>
where
    LR: LoanTypeRepository,
    SR: StatusRepository,
    AR: ApplicationRepository,
{
    loan_types: Arc<LR>,
    statuses: Arc<SR>,
    applications: Arc<AR>,
    ids: Arc<dyn IdGenerator>,
    initial_status_name: String,
}

impl<LR, SR, AR> LoanApplicationService<LR, SR, AR>
where
    LR: LoanTypeRepository,
    SR: StatusRepository,
    AR: ApplicationRepository,
{
    pub fn new(
        loan_types: Arc<LR>,
        statuses: Arc<SR>,
        applications: Arc<AR>,
        ids: Arc<dyn IdGenerator>,
        initial_status_name: impl Into<String>,
    ) -> Self {
        Self {
            loan_types,
            statuses,
            applications,
            ids,
            initial_status_name: initial_status_name.into(),
        }
    }

    /// Create a loan application
    ///
    /// Returns the aggregate as handed back by the repository.
    pub async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<LoanApplication, AppError> {
        let input = ValidatedRequest::from_request(request).map_err(|e| {
            tracing::warn!(error = %e, "Rejected loan application request");
            e
        })?;

        let loan_type = self
            .loan_types
            .find_by_id(&input.loan_type_id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| {
                tracing::warn!(loan_type_id = %input.loan_type_id, "Loan type not found");
                AppError::ReferenceNotFound(format!(
                    "Loan type {} does not exist",
                    input.loan_type_id
                ))
            })?;

        if !loan_type.is_amount_valid(&input.amount) {
            tracing::warn!(
                loan_type = %loan_type.name(),
                amount = %input.amount,
                "Amount outside loan type range"
            );
            return Err(out_of_range(&loan_type, &input.amount));
        }

        let status = self.initial_status().await?;

        let id = ApplicationId::generate(self.ids.as_ref()).map_err(|e| {
            tracing::error!(error = %e, "Identifier generator returned an empty id");
            AppError::ConfigurationError(e.to_string())
        })?;

        let application = LoanApplication::create(
            id,
            input.amount,
            input.term,
            input.email,
            status.id(),
            loan_type.id(),
        );

        let saved = self
            .applications
            .save(&application)
            .await
            .map_err(store_failure)?;

        tracing::info!(
            application_id = %saved.id(),
            loan_type_id = %saved.loan_type_id(),
            amount = %saved.amount(),
            "Loan application created"
        );

        Ok(saved)
    }

    /// Applications still awaiting review
    pub async fn list_pending(&self) -> Result<Vec<LoanApplication>, AppError> {
        let status = self.initial_status().await?;
        self.applications
            .find_by_status_id(&status.id())
            .await
            .map_err(store_failure)
    }

    async fn initial_status(&self) -> Result<Status, AppError> {
        self.statuses
            .find_by_name(&self.initial_status_name)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| {
                tracing::error!(
                    status = %self.initial_status_name,
                    "Initial status is not configured"
                );
                AppError::ConfigurationError(format!(
                    "Initial status '{}' is not configured",
                    self.initial_status_name
                ))
            })
    }
}
