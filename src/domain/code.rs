use crate::domain::{ValidationError, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ten character alphanumeric identifier used as the key of hotels and
/// reservations.
#[derive(Debug, Clone, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    pub const LENGTH: usize = 10;

    fn validate(value: &str) -> Result<String, ValidationError> {
        if let Some(ch) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidChar { field: "code", ch });
        }
        if value.len() != Self::LENGTH {
            return Err(ValidationError::Length {
                field: "code",
                min: Self::LENGTH,
                max: Self::LENGTH,
                actual: value.len(),
            });
        }
        Ok(value.to_string())
    }
}

text_value!(Code);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code() {
        assert!(Code::new("hotel00001").is_ok());
        assert!(Code::new("HOTEL0000A").is_ok());
        assert!(Code::new("hotel0001").is_err());
        assert!(Code::new("hotel000001").is_err());
        assert_eq!(
            Err(ValidationError::InvalidChar {
                field: "code",
                ch: '-'
            }),
            Code::new("hotel-0001")
        );
    }
}
