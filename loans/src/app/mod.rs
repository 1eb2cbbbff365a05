//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod application_service;
pub mod catalog_service;

pub use application_service::{CreateApplicationRequest, LoanApplicationService};
pub use catalog_service::{CatalogSeed, CatalogService, RegisterLoanTypeRequest, StatusSeed};

use crate::domain::entities::LoanType;
use crate::domain::value_objects::Money;
use crate::error::{AppError, DomainError};

/// Classify a repository failure. Anything other than a version conflict
/// or a uniqueness clash is opaque to callers.
pub(crate) fn store_failure(e: DomainError) -> AppError {
    match e {
        e @ (DomainError::VersionConflict { .. } | DomainError::AlreadyExists(_)) => {
            AppError::from(e)
        }
        e => AppError::PersistenceError(e.to_string()),
    }
}

pub(crate) fn out_of_range(loan_type: &LoanType, amount: &Money) -> AppError {
    AppError::BusinessRuleViolation(format!(
        "Amount {} is outside the permitted range for {}: {}",
        amount.grouped(),
        loan_type.name(),
        loan_type.amount_range()
    ))
}
