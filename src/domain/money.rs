use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount of money held in cents, written `1.234,56`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const MIN_CENTS: u64 = 1;
    pub const MAX_CENTS: u64 = 100_000_000;

    pub fn from_cents(cents: u64) -> Result<Self, ValidationError> {
        if !(Self::MIN_CENTS..=Self::MAX_CENTS).contains(&cents) {
            return Err(ValidationError::OutOfRange {
                field: "amount in cents",
                min: Self::MIN_CENTS as i64,
                max: Self::MAX_CENTS as i64,
                value: cents.min(i64::MAX as u64) as i64,
            });
        }
        Ok(Money(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Multiplies by a count, e.g. a nightly rate by a number of nights.
    pub fn times(&self, count: u64) -> Result<Self, ValidationError> {
        Money::from_cents(self.0.saturating_mul(count))
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELD: &str = "amount";
        let format = |reason| ValidationError::Format {
            field: FIELD,
            reason,
        };

        let (units, cents) = s
            .trim()
            .split_once(',')
            .ok_or(format("expected a comma before the cents, e.g. 1.234,56"))?;
        if cents.len() != 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
            return Err(format("cents must be exactly two digits"));
        }
        if units.is_empty() {
            return Err(format("missing the units before the comma"));
        }

        let groups: Vec<&str> = units.split('.').collect();
        if groups[0].is_empty() {
            return Err(format("cannot start with a thousands separator"));
        }
        if groups.iter().skip(1).any(|g| g.len() != 3) {
            return Err(format("thousands separators must group three digits"));
        }
        let mut digits = groups.concat();
        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::InvalidChar { field: FIELD, ch });
        }
        digits.push_str(cents);

        let total = digits
            .parse::<u64>()
            .map_err(|_| format("value is too large"))?;
        Money::from_cents(total)
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = (self.0 / 100).to_string();
        let mut grouped = String::new();
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{},{:02}", grouped, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(s: &str) -> Result<Money, ValidationError> {
        s.parse()
    }

    #[test]
    fn test_parse() {
        assert_eq!(1, money("0,01").unwrap().cents());
        assert_eq!(123_456, money("1.234,56").unwrap().cents());
        assert_eq!(123_456, money("1234,56").unwrap().cents());
        assert_eq!(100_000_000, money("1.000.000,00").unwrap().cents());
    }

    #[test]
    fn test_rejects() {
        assert!(money("0,00").is_err());
        assert!(money("1.000.000,01").is_err());
        assert!(money("12").is_err());
        assert!(money("12,5").is_err());
        assert!(money("12,50,00").is_err());
        assert!(money(",50").is_err());
        assert!(money(".123,00").is_err());
        assert!(money("1.23,00").is_err());
        assert!(money("12a,00").is_err());
        assert!(money("99999999999999999999999,00").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("0,01", Money::from_cents(1).unwrap().to_string());
        assert_eq!("450,00", Money::from_cents(45_000).unwrap().to_string());
        assert_eq!("1.234,56", Money::from_cents(123_456).unwrap().to_string());
        assert_eq!("1.000.000,00", Money::from_cents(100_000_000).unwrap().to_string());
    }

    #[test]
    fn test_times() {
        let rate = money("250,00").unwrap();
        assert_eq!(money("750,00").unwrap(), rate.times(3).unwrap());
        assert!(rate.times(0).is_err());
        assert!(rate.times(u64::MAX).is_err());
    }

    proptest! {
        #[test]
        fn test_display_parses_back(cents in Money::MIN_CENTS..=Money::MAX_CENTS) {
            let value = Money::from_cents(cents).unwrap();
            prop_assert_eq!(value, value.to_string().parse::<Money>().unwrap());
        }
    }
}
