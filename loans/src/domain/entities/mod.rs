//! Domain entities
//!
//! Aggregates of the loan application core. All of them are immutable:
//! transitions return a new instance.

mod identifier;
pub mod loan_application;
pub mod loan_type;
pub mod status;

pub use loan_application::{ApplicationId, LoanApplication};
pub use loan_type::{LoanType, LoanTypeId};
pub use status::{Status, StatusId};
