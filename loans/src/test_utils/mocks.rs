//! Mock implementations of port traits
//!
//! In-memory doubles that count calls and can be configured to fail.
//! `save` follows the port contract and hands back version 1. The
//! application double also keeps the aggregates it received, so tests can
//! inspect exactly what the service built.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::entities::{
    ApplicationId, LoanApplication, LoanType, LoanTypeId, Status, StatusId,
};
use crate::domain::ports::{ApplicationRepository, LoanTypeRepository, StatusRepository};
use crate::error::DomainError;

fn store_down() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

// ============================================================================
// Loan Type Repository
// ============================================================================

#[derive(Default)]
pub struct MockLoanTypeRepository {
    loan_types: RwLock<HashMap<LoanTypeId, LoanType>>,
    lookups: AtomicUsize,
    should_fail: bool,
}

impl MockLoanTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_loan_type(self, loan_type: LoanType) -> Self {
        self.loan_types
            .write()
            .unwrap()
            .insert(loan_type.id(), loan_type);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(store_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LoanTypeRepository for MockLoanTypeRepository {
    async fn save(&self, loan_type: &LoanType) -> Result<LoanType, DomainError> {
        self.check()?;
        let saved = loan_type.mark_persisted(1)?;
        self.loan_types
            .write()
            .unwrap()
            .insert(saved.id(), saved.clone());
        Ok(saved)
    }

    async fn update(&self, loan_type: &LoanType) -> Result<LoanType, DomainError> {
        self.check()?;
        let updated = loan_type.mark_persisted(loan_type.version() + 1)?;
        self.loan_types
            .write()
            .unwrap()
            .insert(updated.id(), updated.clone());
        Ok(updated)
    }

    async fn find_by_id(&self, id: &LoanTypeId) -> Result<Option<LoanType>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.loan_types.read().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LoanType>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .loan_types
            .read()
            .unwrap()
            .values()
            .find(|lt| lt.name().as_str() == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<LoanType>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.loan_types.read().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// Status Repository
// ============================================================================

#[derive(Default)]
pub struct MockStatusRepository {
    statuses: RwLock<HashMap<StatusId, Status>>,
    lookups: AtomicUsize,
    should_fail: bool,
}

impl MockStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        self.statuses.write().unwrap().insert(status.id(), status);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(store_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StatusRepository for MockStatusRepository {
    async fn save(&self, status: &Status) -> Result<Status, DomainError> {
        self.check()?;
        let saved = status.mark_persisted(1)?;
        self.statuses
            .write()
            .unwrap()
            .insert(saved.id(), saved.clone());
        Ok(saved)
    }

    async fn update(&self, status: &Status) -> Result<Status, DomainError> {
        self.check()?;
        let mut statuses = self.statuses.write().unwrap();
        let stored = statuses
            .get(&status.id())
            .ok_or_else(|| DomainError::NotFound(status.id().to_string()))?;
        if stored.version() != status.version() {
            return Err(DomainError::VersionConflict {
                expected: status.version(),
                found: stored.version(),
            });
        }
        let updated = status.mark_persisted(status.version() + 1)?;
        statuses.insert(updated.id(), updated.clone());
        Ok(updated)
    }

    async fn find_by_id(&self, id: &StatusId) -> Result<Option<Status>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.statuses.read().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .statuses
            .read()
            .unwrap()
            .values()
            .find(|s| s.has_name(name))
            .cloned())
    }

    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Status>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .statuses
            .read()
            .unwrap()
            .values()
            .filter(|s| s.description_contains(text))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Status>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.statuses.read().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// Application Repository
// ============================================================================

#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum SaveMode {
    #[default]
    Echo,
    Fail,
    Conflict,
}

#[derive(Default)]
pub struct MockApplicationRepository {
    saved: RwLock<Vec<LoanApplication>>,
    save_calls: AtomicUsize,
    mode: SaveMode,
}

impl MockApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the store were unreachable
    pub fn failing() -> Self {
        Self {
            mode: SaveMode::Fail,
            ..Self::default()
        }
    }

    /// `save` reports a concurrent writer got there first
    pub fn conflicting() -> Self {
        Self {
            mode: SaveMode::Conflict,
            ..Self::default()
        }
    }

    pub fn with_application(self, application: LoanApplication) -> Self {
        self.saved.write().unwrap().push(application);
        self
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Aggregates as they were passed to `save`
    pub fn saved(&self) -> Vec<LoanApplication> {
        self.saved.read().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.mode {
            SaveMode::Fail => Err(store_down()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ApplicationRepository for MockApplicationRepository {
    async fn save(&self, application: &LoanApplication) -> Result<LoanApplication, DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        if self.mode == SaveMode::Conflict {
            return Err(DomainError::VersionConflict {
                expected: 0,
                found: 1,
            });
        }
        self.saved.write().unwrap().push(application.clone());
        application.mark_persisted(1)
    }

    async fn update(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplication, DomainError> {
        self.check()?;
        application.mark_persisted(application.version() + 1)
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<LoanApplication>, DomainError> {
        self.check()?;
        Ok(self
            .saved
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id() == *id)
            .cloned())
    }

    async fn find_by_status_id(
        &self,
        status_id: &StatusId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        self.check()?;
        Ok(self
            .saved
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.status_id() == *status_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Id Generator
// ============================================================================

/// Generator that always hands out the same token
pub fn fixed_ids(n: u128) -> impl Fn() -> Uuid + Send + Sync {
    move || Uuid::from_u128(n)
}
