use crate::domain::{ValidationError, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// E-mail address, the key of every person. Stored lower case.
#[derive(Debug, Clone, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LOCAL: usize = 64;
    pub const MAX_DOMAIN: usize = 255;

    fn validate_part(part: &str, max: usize, field: &'static str) -> Result<(), ValidationError> {
        if part.is_empty() || part.len() > max {
            return Err(ValidationError::Length {
                field,
                min: 1,
                max,
                actual: part.len(),
            });
        }
        let mut last_special = true;
        for ch in part.chars() {
            match ch {
                'a'..='z' | '0'..='9' => last_special = false,
                '.' | '-' if last_special => {
                    return Err(ValidationError::Format {
                        field,
                        reason: "cannot start with or repeat '.' or '-'",
                    });
                }
                '.' | '-' => last_special = true,
                _ => return Err(ValidationError::InvalidChar { field, ch }),
            }
        }
        if last_special {
            return Err(ValidationError::Format {
                field,
                reason: "cannot end with '.' or '-'",
            });
        }
        Ok(())
    }

    fn validate(value: &str) -> Result<String, ValidationError> {
        let lower = value.to_ascii_lowercase();
        let (local, domain) = lower.split_once('@').ok_or(ValidationError::Format {
            field: "email",
            reason: "missing '@'",
        })?;
        Self::validate_part(local, Self::MAX_LOCAL, "email local part")?;
        Self::validate_part(domain, Self::MAX_DOMAIN, "email domain")?;
        Ok(lower)
    }
}

text_value!(Email);

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
