//! Test utilities
//!
//! Fixtures and hand-written doubles for unit testing.
//!
//! The doubles record how often each port method is called so tests can
//! assert on pipeline ordering, and can be switched into a failing mode to
//! simulate an unavailable store.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
