use async_trait::async_trait;

use super::VersionedTable;
use crate::domain::entities::{ApplicationId, LoanApplication, StatusId};
use crate::domain::ports::ApplicationRepository;
use crate::error::DomainError;

/// Loan applications held in process memory
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    table: VersionedTable<LoanApplication>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn save(&self, application: &LoanApplication) -> Result<LoanApplication, DomainError> {
        self.table.insert(application).await
    }

    async fn update(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplication, DomainError> {
        self.table.replace(application).await
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<LoanApplication>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn find_by_status_id(
        &self,
        status_id: &StatusId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        Ok(self
            .table
            .filter(|a| a.status_id() == *status_id)
            .await)
    }
}
