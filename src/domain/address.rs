use crate::domain::{ValidationError, check_length, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 30;

    fn is_punctuation(c: char) -> bool {
        matches!(c, ',' | '.' | ' ')
    }

    fn validate(value: &str) -> Result<String, ValidationError> {
        const FIELD: &str = "address";
        check_length(FIELD, value, Self::MIN_LENGTH, Self::MAX_LENGTH)?;
        if let Some(ch) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || Self::is_punctuation(*c)))
        {
            return Err(ValidationError::InvalidChar { field: FIELD, ch });
        }

        let chars: Vec<char> = value.chars().collect();
        if Self::is_punctuation(chars[0]) || Self::is_punctuation(chars[chars.len() - 1]) {
            return Err(ValidationError::Format {
                field: FIELD,
                reason: "must start and end with a letter or digit",
            });
        }
        for pair in chars.windows(2) {
            match (pair[0], pair[1]) {
                (',' | '.', ',' | '.') => {
                    return Err(ValidationError::Format {
                        field: FIELD,
                        reason: "comma or period followed by comma or period",
                    });
                }
                (' ', next) if !next.is_ascii_alphanumeric() => {
                    return Err(ValidationError::Format {
                        field: FIELD,
                        reason: "space must be followed by a letter or digit",
                    });
                }
                _ => {}
            }
        }
        Ok(value.to_string())
    }
}

text_value!(Address);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(Address::new("Rua A, 10").is_ok());
        assert!(Address::new("Av. Brasil 1500").is_ok());
        assert!(Address::new("12345").is_ok());
    }

    #[test]
    fn test_rejects() {
        assert!(Address::new("Rua").is_err());
        assert!(Address::new("Rua das Flores numero 123456789").is_err());
        assert!(Address::new(" Rua A").is_err());
        assert!(Address::new("Rua A.").is_err());
        assert!(Address::new("Rua A,, 10").is_err());
        assert!(Address::new("Rua A., 10").is_err());
        assert!(Address::new("Rua  A 10").is_err());
        assert!(Address::new("Rua #10").is_err());
    }
}
