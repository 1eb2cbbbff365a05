//! Status domain entity
//!
//! A workflow state a loan application can be in, looked up by name.

use serde::Serialize;

use super::identifier::uuid_identifier;
use crate::error::DomainError;

uuid_identifier!(
    /// Unique identifier for a status
    StatusId
);

/// A named workflow state. Two statuses are equal when their ids are.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    id: StatusId,
    name: String,
    description: String,
    version: u64,
}

impl Status {
    pub fn create(id: StatusId, name: &str, description: &str) -> Result<Self, DomainError> {
        Self::reconstruct(id, name, description, 0)
    }

    pub fn reconstruct(
        id: StatusId,
        name: &str,
        description: &str,
        version: u64,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Status name is required"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            version,
        })
    }

    pub fn id(&self) -> StatusId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Copy with a new description, same id and version
    pub fn with_description(&self, description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..self.clone()
        }
    }

    /// Copy with a new name, same id and version
    pub fn with_name(&self, name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Status name is required"));
        }
        Ok(Self {
            name: name.to_string(),
            ..self.clone()
        })
    }

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

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring search on the description
    pub fn description_contains(&self, text: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&text.to_lowercase())
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Status {}

impl std::hash::Hash for Status {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
