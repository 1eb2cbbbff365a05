//! Applicant email address

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid"));

/// An email address with a single `@` and a dotted domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid("Email must not be blank"));
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err(DomainError::invalid(format!(
                "Invalid email format: {}",
                value
            )));
        }
        if value.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::invalid(format!(
                "Email cannot be longer than {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }

    /// Everything before the `@`
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(l, _)| l).unwrap_or_default()
    }

    pub fn belongs_to_domain(&self, domain: &str) -> bool {
        self.domain().to_lowercase() == domain.to_lowercase()
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
