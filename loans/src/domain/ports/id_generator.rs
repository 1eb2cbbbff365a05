//! Identifier generation port

use uuid::Uuid;

/// Source of fresh 128-bit tokens for new aggregates
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

impl<F> IdGenerator for F
where
    F: Fn() -> Uuid + Send + Sync,
{
    fn next_id(&self) -> Uuid {
        self()
    }
}
