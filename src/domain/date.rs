use crate::domain::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

const MONTHS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

/// Calendar day written as `DD-MMM-YYYY` with Portuguese month abbreviations.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    pub const MIN_YEAR: u16 = 2000;
    pub const MAX_YEAR: u16 = 2999;

    pub fn new(day: u8, month: &str, year: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ValidationError::OutOfRange {
                field: "year",
                min: Self::MIN_YEAR as i64,
                max: Self::MAX_YEAR as i64,
                value: year as i64,
            });
        }
        let upper = month.to_ascii_uppercase();
        let month_index = MONTHS
            .iter()
            .position(|m| *m == upper)
            .ok_or(ValidationError::Format {
                field: "month",
                reason: "use a three letter abbreviation: JAN FEV MAR ABR MAI JUN JUL AGO SET OUT NOV DEZ",
            })?;
        NaiveDate::from_ymd_opt(year as i32, month_index as u32 + 1, day as u32)
            .map(Date)
            .ok_or(ValidationError::Format {
                field: "day",
                reason: "day does not exist in that month",
            })
    }

    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    pub fn month(&self) -> &'static str {
        MONTHS[self.0.month0() as usize]
    }

    pub fn year(&self) -> u16 {
        self.0.year() as u16
    }

    pub(crate) fn is_overlapping(stay: &(Date, Date), other: &(Date, Date)) -> bool {
        stay.0 < other.1 && stay.1 > other.0
    }
}

impl FromStr for Date {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad_format = ValidationError::Format {
            field: "date",
            reason: "expected DD-MMM-YYYY, e.g. 05-JAN-2026",
        };
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(bad_format);
        }
        let day = parts[0].parse::<u8>().map_err(|_| bad_format.clone())?;
        let year = parts[2].parse::<u16>().map_err(|_| bad_format.clone())?;
        Date::new(day, parts[1], year)
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}-{}", self.day(), self.month(), self.year())
    }
}

/// Number of days between two dates.
impl Sub<Date> for Date {
    type Output = i64;

    fn sub(self, rhs: Date) -> Self::Output {
        (self.0 - rhs.0).num_days()
    }
}
