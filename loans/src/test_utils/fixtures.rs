//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Ids are derived from small integers so assertions stay readable.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::{
    ApplicationId, LoanApplication, LoanType, LoanTypeId, Status, StatusId,
};
use crate::domain::value_objects::{Email, InterestRate, Money, Name, Term};

pub fn loan_type_id(n: u128) -> LoanTypeId {
    LoanTypeId::new(Uuid::from_u128(n)).unwrap()
}

pub fn status_id(n: u128) -> StatusId {
    StatusId::new(Uuid::from_u128(n)).unwrap()
}

pub fn application_id(n: u128) -> ApplicationId {
    ApplicationId::new(Uuid::from_u128(n)).unwrap()
}

pub fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn money(s: &str) -> Money {
    Money::parse(s).unwrap()
}

/// "Préstamo Personal": 1,000,000 to 10,000,000 at 15.5% annual
pub fn personal_loan() -> LoanType {
    LoanType::create(
        loan_type_id(1),
        Name::parse("Préstamo Personal").unwrap(),
        money("1000000"),
        money("10000000"),
        InterestRate::new(decimal("15.5")).unwrap(),
        true,
    )
    .unwrap()
}

/// The initial review status, unpersisted
pub fn pending_status() -> Status {
    Status::create(status_id(1), "PENDIENTE", "Solicitud pendiente de revisión").unwrap()
}

/// A valid application for the personal loan, unpersisted
pub fn new_application() -> LoanApplication {
    LoanApplication::create(
        application_id(1),
        money("5000000"),
        Term::new(24).unwrap(),
        Email::parse("cliente@test.com").unwrap(),
        status_id(1),
        loan_type_id(1),
    )
}
