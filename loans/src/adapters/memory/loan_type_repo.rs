use async_trait::async_trait;

use super::VersionedTable;
use crate::domain::entities::{LoanType, LoanTypeId};
use crate::domain::ports::LoanTypeRepository;
use crate::error::DomainError;

/// Loan type catalog held in process memory
#[derive(Default)]
pub struct InMemoryLoanTypeRepository {
    table: VersionedTable<LoanType>,
}

impl InMemoryLoanTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with rows already stored at their current versions
    pub fn with_loan_types(loan_types: impl IntoIterator<Item = LoanType>) -> Self {
        Self {
            table: VersionedTable::seeded(loan_types),
        }
    }
}

#[async_trait]
impl LoanTypeRepository for InMemoryLoanTypeRepository {
    async fn save(&self, loan_type: &LoanType) -> Result<LoanType, DomainError> {
        let name = loan_type.name().as_str();
        self.table
            .insert_unique(loan_type, |existing| {
                (existing.name().as_str() == name)
                    .then(|| format!("Loan type '{}' already exists", name))
            })
            .await
    }

    async fn update(&self, loan_type: &LoanType) -> Result<LoanType, DomainError> {
        self.table.replace(loan_type).await
    }

    async fn find_by_id(&self, id: &LoanTypeId) -> Result<Option<LoanType>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LoanType>, DomainError> {
        Ok(self.table.find(|lt| lt.name().as_str() == name).await)
    }

    async fn find_all(&self) -> Result<Vec<LoanType>, DomainError> {
        let mut all = self.table.filter(|_| true).await;
        all.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(all)
    }
}
