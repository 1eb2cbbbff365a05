//! Human-readable names made of letters and spaces

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MAX_NAME_LENGTH: usize = 100;

/// A name of 1 to 100 characters. Accented and other non-ASCII letters are
/// accepted; digits and punctuation are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid("Name must not be blank"));
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::invalid(format!(
                "Name cannot be longer than {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace())
        {
            return Err(DomainError::invalid(format!(
                "Name may only contain letters and spaces: {}",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// First letter upper-cased, the rest lower-cased
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    /// Case-insensitive substring match
    pub fn contains(&self, text: &str) -> bool {
        self.0.to_lowercase().contains(&text.to_lowercase())
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_accented_letters() {
        let name = Name::parse("Préstamo Personal").unwrap();
        assert_eq!(name.as_str(), "Préstamo Personal");
        assert!(Name::parse("Crédito Vehículo Ñandú").is_ok());
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert!(Name::parse("Plan 2024").is_err());
        assert!(Name::parse("Hipotecario!").is_err());
    }

    #[test]
    fn rejects_blank_and_too_long() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse("  ").is_err());
        assert!(Name::parse(&"a".repeat(101)).is_err());
        assert!(Name::parse(&"á".repeat(100)).is_ok());
    }

    #[test]
    fn case_helpers() {
        let name = Name::parse("préstamo PERSONAL").unwrap();
        assert_eq!(name.to_uppercase(), "PRÉSTAMO PERSONAL");
        assert_eq!(name.to_lowercase(), "préstamo personal");
        assert_eq!(name.capitalized(), "Préstamo personal");
        assert!(name.contains("Personal"));
        assert!(!name.contains("hipoteca"));
    }
}
