use crate::domain::{ValidationError, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Manager password.
///
/// Five characters taken from letters, digits and `!"#$%&?`, with at least one
/// of each class (lower case, upper case, digit, special). Two letters or two
/// digits may never be adjacent.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    pub const LENGTH: usize = 5;
    const SPECIALS: &'static str = "!\"#$%&?";

    fn validate(value: &str) -> Result<String, ValidationError> {
        const FIELD: &str = "password";
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != Self::LENGTH {
            return Err(ValidationError::Length {
                field: FIELD,
                min: Self::LENGTH,
                max: Self::LENGTH,
                actual: chars.len(),
            });
        }
        if let Some(ch) = chars
            .iter()
            .copied()
            .find(|c| !(c.is_ascii_alphanumeric() || Self::SPECIALS.contains(*c)))
        {
            return Err(ValidationError::InvalidChar { field: FIELD, ch });
        }

        let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
        let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
        let has_digit = chars.iter().any(|c| c.is_ascii_digit());
        let has_special = chars.iter().any(|c| Self::SPECIALS.contains(*c));
        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(ValidationError::Format {
                field: FIELD,
                reason: "needs a lower case letter, an upper case letter, a digit and one of !\"#$%&?",
            });
        }

        for pair in chars.windows(2) {
            if pair[0].is_ascii_alphabetic() && pair[1].is_ascii_alphabetic() {
                return Err(ValidationError::Format {
                    field: FIELD,
                    reason: "a letter cannot be followed by a letter",
                });
            }
            if pair[0].is_ascii_digit() && pair[1].is_ascii_digit() {
                return Err(ValidationError::Format {
                    field: FIELD,
                    reason: "a digit cannot be followed by a digit",
                });
            }
        }
        Ok(value.to_string())
    }
}

text_value!(Password);

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*****")
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}
