use crate::domain::{ValidationError, text_value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment card number: sixteen digits with a valid Luhn check digit.
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(String);

impl Card {
    pub const DIGITS: usize = 16;

    pub(crate) fn luhn_valid(digits: &[u32]) -> bool {
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(i, d)| match (i % 2, d * 2) {
                (1, doubled) if doubled > 9 => doubled - 9,
                (1, doubled) => doubled,
                _ => *d,
            })
            .sum();
        sum % 10 == 0
    }

    fn validate(value: &str) -> Result<String, ValidationError> {
        if let Some(ch) = value.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::InvalidChar { field: "card", ch });
        }
        if value.len() != Self::DIGITS {
            return Err(ValidationError::Length {
                field: "card",
                min: Self::DIGITS,
                max: Self::DIGITS,
                actual: value.len(),
            });
        }
        let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
        if !Self::luhn_valid(&digits) {
            return Err(ValidationError::Format {
                field: "card",
                reason: "check digit does not match",
            });
        }
        Ok(value.to_string())
    }

    pub fn last_four(&self) -> &str {
        &self.0[Self::DIGITS - 4..]
    }
}

text_value!(Card);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** **** **** {}", self.last_four())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_card() {
        assert!(Card::new("4111111111111111").is_ok());
        assert!(Card::new("5555555555554444").is_ok());
        assert!(Card::new("4111111111111112").is_err());
        assert!(Card::new("411111111111111").is_err());
        assert!(Card::new("4111 1111 1111 1111").is_err());
    }

    #[test]
    fn test_masked() {
        let card = Card::new("4111111111111111").unwrap();
        assert_eq!("**** **** **** 1111", card.to_string());
        assert_eq!("4111111111111111", card.as_str());
    }

    proptest! {
        #[test]
        fn test_exactly_one_check_digit(body in prop::collection::vec(0u32..10, 15)) {
            let accepted = (0..10u32)
                .filter(|check| {
                    let number: String = body
                        .iter()
                        .chain(std::iter::once(check))
                        .map(|d| char::from_digit(*d, 10).unwrap())
                        .collect();
                    Card::new(number).is_ok()
                })
                .count();
            prop_assert_eq!(1, accepted);
        }
    }
}
