//! In-memory adapters
//!
//! Process-local implementations of the repository ports. Each table keeps
//! one row per aggregate id and enforces the optimistic write contract of
//! the ports with a compare-and-swap on the stored version.

pub mod application_repo;
pub mod loan_type_repo;
pub mod status_repo;

pub use application_repo::InMemoryApplicationRepository;
pub use loan_type_repo::InMemoryLoanTypeRepository;
pub use status_repo::InMemoryStatusRepository;

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::domain::entities::{
    ApplicationId, LoanApplication, LoanType, LoanTypeId, Status, StatusId,
};
use crate::error::DomainError;

/// An aggregate stored with an optimistic version column
pub(crate) trait Versioned: Clone + Send + Sync {
    type Id: Copy + Eq + Hash + std::fmt::Display + Send + Sync;

    fn key(&self) -> Self::Id;
    fn current_version(&self) -> u64;
    fn with_version(&self, version: u64) -> Result<Self, DomainError>;
}

impl Versioned for LoanType {
    type Id = LoanTypeId;

    fn key(&self) -> LoanTypeId {
        self.id()
    }

    fn current_version(&self) -> u64 {
        self.version()
    }

    fn with_version(&self, version: u64) -> Result<Self, DomainError> {
        self.mark_persisted(version)
    }
}

impl Versioned for Status {
    type Id = StatusId;

    fn key(&self) -> StatusId {
        self.id()
    }

    fn current_version(&self) -> u64 {
        self.version()
    }

    fn with_version(&self, version: u64) -> Result<Self, DomainError> {
        self.mark_persisted(version)
    }
}

impl Versioned for LoanApplication {
    type Id = ApplicationId;

    fn key(&self) -> ApplicationId {
        self.id()
    }

    fn current_version(&self) -> u64 {
        self.version()
    }

    fn with_version(&self, version: u64) -> Result<Self, DomainError> {
        self.mark_persisted(version)
    }
}

/// A table of versioned rows keyed by aggregate id
pub(crate) struct VersionedTable<T: Versioned> {
    rows: RwLock<HashMap<T::Id, T>>,
}

impl<T: Versioned> Default for VersionedTable<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Versioned> VersionedTable<T> {
    /// Insert a row as-is, bypassing the write contract
    pub(crate) fn seeded(rows: impl IntoIterator<Item = T>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(|r| (r.key(), r)).collect()),
        }
    }

    pub(crate) async fn insert(&self, row: &T) -> Result<T, DomainError> {
        self.insert_unique(row, |_| None).await
    }

    /// Insert unless `clash` reports an existing row that may not coexist
    /// with `row`. The check and the write happen under one lock.
    pub(crate) async fn insert_unique(
        &self,
        row: &T,
        clash: impl Fn(&T) -> Option<String>,
    ) -> Result<T, DomainError> {
        if row.current_version() != 0 {
            return Err(DomainError::invalid(format!(
                "Cannot save {} at version {}: new rows start at version 0",
                row.key(),
                row.current_version()
            )));
        }

        let mut rows = self.rows.write().await;
        if let Some(existing) = rows.get(&row.key()) {
            return Err(DomainError::VersionConflict {
                expected: 0,
                found: existing.current_version(),
            });
        }
        if let Some(reason) = rows.values().find_map(|existing| clash(existing)) {
            return Err(DomainError::AlreadyExists(reason));
        }

        let stored = row.with_version(1)?;
        rows.insert(stored.key(), stored.clone());
        tracing::debug!(id = %stored.key(), version = 1, "Row inserted");
        Ok(stored)
    }

    pub(crate) async fn replace(&self, row: &T) -> Result<T, DomainError> {
        let mut rows = self.rows.write().await;
        let existing = rows
            .get(&row.key())
            .ok_or_else(|| DomainError::NotFound(format!("Row {} not found", row.key())))?;

        if existing.current_version() != row.current_version() {
            tracing::debug!(
                id = %row.key(),
                expected = row.current_version(),
                found = existing.current_version(),
                "Version conflict on update"
            );
            return Err(DomainError::VersionConflict {
                expected: row.current_version(),
                found: existing.current_version(),
            });
        }

        let next = row.current_version() + 1;
        let stored = row.with_version(next)?;
        rows.insert(stored.key(), stored.clone());
        tracing::debug!(id = %stored.key(), version = next, "Row updated");
        Ok(stored)
    }

    pub(crate) async fn get(&self, id: &T::Id) -> Option<T> {
        self.rows.read().await.get(id).cloned()
    }

    pub(crate) async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.values().find(|r| predicate(r)).cloned()
    }

    pub(crate) async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}
