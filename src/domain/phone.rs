use crate::domain::{ValidationError, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// International phone number: `+` and fifteen digits.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const DIGITS: usize = 15;

    fn validate(value: &str) -> Result<String, ValidationError> {
        let digits = value.strip_prefix('+').ok_or(ValidationError::Format {
            field: "phone",
            reason: "must start with '+'",
        })?;
        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::InvalidChar { field: "phone", ch });
        }
        if digits.len() != Self::DIGITS {
            return Err(ValidationError::Length {
                field: "phone digits",
                min: Self::DIGITS,
                max: Self::DIGITS,
                actual: digits.len(),
            });
        }
        Ok(value.to_string())
    }
}

text_value!(Phone);

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
