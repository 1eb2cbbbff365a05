//! Unified error types for the loan application core
//!
//! This module defines error types for each layer:
//! - `DomainError`: Value object, entity and repository port errors
//! - `AppError`: Classified errors returned by the application services

use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by value objects, aggregates and ports
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Version conflict: expected version {expected}, found {found}")]
    VersionConflict { expected: u64, found: u64 },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }
}

/// Application layer errors - the classified outcome of a use case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Caller-supplied data is structurally wrong
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A syntactically valid identifier does not resolve to an aggregate
    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    /// Resolved data fails a domain rule
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// A required system-level record is missing
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Version conflict: {0}")]
    VersionConflict(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidArgument(msg) => AppError::InvalidInput(msg),
            DomainError::NotFound(msg) => AppError::ReferenceNotFound(msg),
            DomainError::AlreadyExists(msg) => AppError::BusinessRuleViolation(msg),
            e @ DomainError::VersionConflict { .. } => AppError::VersionConflict(e.to_string()),
            DomainError::Database(msg) => AppError::PersistenceError(msg),
        }
    }
}

/// Error body handed to transport layers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::ReferenceNotFound(_) => "reference_not_found",
            AppError::BusinessRuleViolation(_) => "business_rule_violation",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::VersionConflict(_) => "version_conflict",
            AppError::PersistenceError(_) => "persistence_error",
        }
    }

    /// HTTP status a transport layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::BusinessRuleViolation(_) => 400,
            AppError::ReferenceNotFound(_) => 404,
            AppError::VersionConflict(_) => 409,
            AppError::ConfigurationError(_) | AppError::PersistenceError(_) => 500,
        }
    }

    /// Message safe to show to a caller. Server-side failures are logged and
    /// replaced with a generic text.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::ReferenceNotFound(msg)
            | AppError::BusinessRuleViolation(msg)
            | AppError::VersionConflict(msg) => msg.clone(),
            AppError::ConfigurationError(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::PersistenceError(msg) => {
                tracing::error!("Persistence error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code(),
            error: self.kind(),
            message: self.public_message(),
        }
    }
}
