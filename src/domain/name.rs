use crate::domain::{ValidationError, check_length, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Person or hotel name: capitalised words separated by single spaces.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 20;

    fn validate(value: &str) -> Result<String, ValidationError> {
        const FIELD: &str = "name";
        check_length(FIELD, value, Self::MIN_LENGTH, Self::MAX_LENGTH)?;
        if let Some(ch) = value.chars().find(|c| !(c.is_ascii_alphabetic() || *c == ' ')) {
            return Err(ValidationError::InvalidChar { field: FIELD, ch });
        }
        if value.ends_with(' ') {
            return Err(ValidationError::Format {
                field: FIELD,
                reason: "must not end with a space",
            });
        }
        for word in value.split(' ') {
            match word.chars().next() {
                None => {
                    return Err(ValidationError::Format {
                        field: FIELD,
                        reason: "words are separated by a single space",
                    });
                }
                Some(first) if !first.is_ascii_uppercase() => {
                    return Err(ValidationError::Format {
                        field: FIELD,
                        reason: "every word starts with an upper case letter",
                    });
                }
                Some(_) => {}
            }
        }
        Ok(value.to_string())
    }
}

text_value!(Name);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
