//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `value_objects`: Self-validating wrappers (money, term, email, ...)
//! - `entities`: Aggregates and their identifiers
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
pub mod value_objects;
