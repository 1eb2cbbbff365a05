//! UUID-backed identifiers
//!
//! Every aggregate id wraps a non-nil UUID. The nil UUID stands for an
//! absent token and is rejected.

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "::uuid::Uuid", into = "::uuid::Uuid")]
        pub struct $name(::uuid::Uuid);

        impl $name {
            pub fn new(value: ::uuid::Uuid) -> Result<Self, $crate::error::DomainError> {
                if value.is_nil() {
                    return Err($crate::error::DomainError::InvalidArgument(format!(
                        "UUID required for {}",
                        stringify!($name)
                    )));
                }
                Ok(Self(value))
            }

            /// Parse the hyphenated UUID form
            pub fn parse(s: &str) -> Result<Self, $crate::error::DomainError> {
                if s.trim().is_empty() {
                    return Err($crate::error::DomainError::InvalidArgument(format!(
                        "UUID string required for {}",
                        stringify!($name)
                    )));
                }
                let value = ::uuid::Uuid::parse_str(s.trim()).map_err(|_| {
                    $crate::error::DomainError::InvalidArgument(format!(
                        "Invalid UUID format for {}: {}",
                        stringify!($name),
                        s
                    ))
                })?;
                Self::new(value)
            }

            pub fn generate(
                generator: &dyn $crate::domain::ports::IdGenerator,
            ) -> Result<Self, $crate::error::DomainError> {
                Self::new(generator.next_id())
            }

            pub fn value(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl TryFrom<::uuid::Uuid> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(value: ::uuid::Uuid) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use uuid_identifier;
