use async_trait::async_trait;

use super::VersionedTable;
use crate::domain::entities::{Status, StatusId};
use crate::domain::ports::StatusRepository;
use crate::error::DomainError;

/// Status catalog held in process memory
#[derive(Default)]
pub struct InMemoryStatusRepository {
    table: VersionedTable<Status>,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        Self {
            table: VersionedTable::seeded(statuses),
        }
    }
}

fn by_name(mut statuses: Vec<Status>) -> Vec<Status> {
    statuses.sort_by(|a, b| a.name().cmp(b.name()));
    statuses
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn save(&self, status: &Status) -> Result<Status, DomainError> {
        self.table
            .insert_unique(status, |existing| {
                existing
                    .has_name(status.name())
                    .then(|| format!("Status '{}' already exists", existing.name()))
            })
            .await
    }

    async fn update(&self, status: &Status) -> Result<Status, DomainError> {
        self.table.replace(status).await
    }

    async fn find_by_id(&self, id: &StatusId) -> Result<Option<Status>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError> {
        Ok(self.table.find(|s| s.has_name(name)).await)
    }

    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Status>, DomainError> {
        Ok(by_name(
            self.table.filter(|s| s.description_contains(text)).await,
        ))
    }

    async fn find_all(&self) -> Result<Vec<Status>, DomainError> {
        Ok(by_name(self.table.filter(|_| true).await))
    }
}
