//! Loan application domain entity
//!
//! The aggregate root of the core: one applicant's request for a loan of a
//! given type, tracked through a workflow status.

use serde::Serialize;

use super::identifier::uuid_identifier;
use super::loan_type::LoanTypeId;
use super::status::StatusId;
use crate::domain::value_objects::{Email, Money, Term};
use crate::error::DomainError;

uuid_identifier!(
    /// Unique identifier for a loan application
    ApplicationId
);

/// A loan application (aggregate root)
///
/// Version 0 means the application has not been written yet; a stored
/// application carries the version of its backing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanApplication {
    id: ApplicationId,
    amount: Money,
    term: Term,
    applicant_email: Email,
    status_id: StatusId,
    loan_type_id: LoanTypeId,
    version: u64,
}

impl LoanApplication {
    /// Create a new, unpersisted application
    pub fn create(
        id: ApplicationId,
        amount: Money,
        term: Term,
        applicant_email: Email,
        status_id: StatusId,
        loan_type_id: LoanTypeId,
    ) -> Self {
        Self::reconstruct(id, amount, term, applicant_email, status_id, loan_type_id, 0)
    }

    /// Rebuild an application loaded from storage
    pub fn reconstruct(
        id: ApplicationId,
        amount: Money,
        term: Term,
        applicant_email: Email,
        status_id: StatusId,
        loan_type_id: LoanTypeId,
        version: u64,
    ) -> Self {
        Self {
            id,
            amount,
            term,
            applicant_email,
            status_id,
            loan_type_id,
            version,
        }
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn applicant_email(&self) -> &Email {
        &self.applicant_email
    }

    pub fn status_id(&self) -> StatusId {
        self.status_id
    }

    pub fn loan_type_id(&self) -> LoanTypeId {
        self.loan_type_id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    /// Acknowledge a successful write at `new_version`.
    ///
    /// This only keeps an in-memory instance from moving backwards; the
    /// storage adapter performs the actual compare-and-swap.
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
