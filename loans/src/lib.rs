//! Loan application core
//!
//! Validates and records loan applications against a catalogue of loan
//! types and statuses. Uses hexagonal (ports & adapters) architecture.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;
