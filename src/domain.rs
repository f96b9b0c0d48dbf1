//! Validated value types.
//!
//! Every type here is built through a fallible constructor and is immutable
//! afterwards, so holding one is proof that its rule was checked. Text types
//! deserialize through the same validation via `#[serde(try_from = "String")]`.

use thiserror::Error;

mod address;
mod card;
mod code;
mod date;
mod email;
mod money;
mod name;
mod numbers;
mod password;
mod phone;

pub use address::Address;
pub use card::Card;
pub use code::Code;
pub use date::Date;
pub use email::Email;
pub use money::Money;
pub use name::Name;
pub use numbers::{Capacity, Extension, RoomNumber};
pub use password::Password;
pub use phone::Phone;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} must have between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains invalid character {ch:?}")]
    InvalidChar { field: &'static str, ch: char },

    #[error("invalid {field}: {reason}")]
    Format {
        field: &'static str,
        reason: &'static str,
    },
}

pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

/// Conversions shared by the string backed value types. The type must provide
/// `fn validate(&str) -> Result<String, ValidationError>` returning the
/// normalised text.
macro_rules! text_value {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::domain::ValidationError> {
                Self::validate(&value.into()).map($name)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use text_value;
