//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).
//!
//! Write contract shared by every repository:
//! - `save` stores a version-0 aggregate and returns it at version 1.
//! - `update` replaces the stored row only when its version equals the
//!   incoming aggregate's version, and returns the aggregate at version + 1.
//!   A mismatch is `DomainError::VersionConflict`.
//! - Loan type names are unique, and status names are unique ignoring case.
//!   `save` reports a clash as `DomainError::AlreadyExists`.

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationId, LoanApplication, LoanType, LoanTypeId, Status, StatusId,
};
use crate::error::DomainError;

/// Repository for LoanType aggregates
#[async_trait]
pub trait LoanTypeRepository: Send + Sync {
    /// Store a new loan type
    async fn save(&self, loan_type: &LoanType) -> Result<LoanType, DomainError>;

    /// Replace an existing loan type (optimistic)
    async fn update(&self, loan_type: &LoanType) -> Result<LoanType, DomainError>;

    /// Find a loan type by ID
    async fn find_by_id(&self, id: &LoanTypeId) -> Result<Option<LoanType>, DomainError>;

    /// Find a loan type by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<LoanType>, DomainError>;

    /// All loan types, ordered by name
    async fn find_all(&self) -> Result<Vec<LoanType>, DomainError>;
}

/// Repository for Status aggregates
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Store a new status
    async fn save(&self, status: &Status) -> Result<Status, DomainError>;

    /// Replace an existing status (optimistic)
    async fn update(&self, status: &Status) -> Result<Status, DomainError>;

    /// Find a status by ID
    async fn find_by_id(&self, id: &StatusId) -> Result<Option<Status>, DomainError>;

    /// Find a status by name, ignoring case
    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError>;

    /// Statuses whose description contains `text`, ignoring case
    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Status>, DomainError>;

    /// All statuses, ordered by name
    async fn find_all(&self) -> Result<Vec<Status>, DomainError>;
}

/// Repository for LoanApplication aggregates
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Store a new application
    async fn save(&self, application: &LoanApplication) -> Result<LoanApplication, DomainError>;

    /// Replace an existing application (optimistic)
    async fn update(&self, application: &LoanApplication)
        -> Result<LoanApplication, DomainError>;

    /// Find an application by ID
    async fn find_by_id(&self, id: &ApplicationId)
        -> Result<Option<LoanApplication>, DomainError>;

    /// Applications currently in the given status
    async fn find_by_status_id(
        &self,
        status_id: &StatusId,
    ) -> Result<Vec<LoanApplication>, DomainError>;
}
