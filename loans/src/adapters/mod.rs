//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;

pub use memory::{
    InMemoryApplicationRepository, InMemoryLoanTypeRepository, InMemoryStatusRepository,
};

use uuid::Uuid;

use crate::domain::ports::IdGenerator;

/// Random (v4) identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
