use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! bounded_integer {
    ($(#[$meta:meta])* $name:ident, $field:literal, $min:literal..=$max:literal, $width:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u16", into = "u16")]
        pub struct $name(u16);

        impl $name {
            pub const MIN: u16 = $min;
            pub const MAX: u16 = $max;

            pub fn new(value: u16) -> Result<Self, ValidationError> {
                if !(Self::MIN..=Self::MAX).contains(&value) {
                    return Err(ValidationError::OutOfRange {
                        field: $field,
                        min: Self::MIN as i64,
                        max: Self::MAX as i64,
                        value: value as i64,
                    });
                }
                Ok($name(value))
            }

            pub fn value(&self) -> u16 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<u16>().map_err(|_| ValidationError::Format {
                    field: $field,
                    reason: "not a whole number",
                })?;
                $name::new(value)
            }
        }

        impl TryFrom<u16> for $name {
            type Error = ValidationError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                $name::new(value)
            }
        }

        impl From<$name> for u16 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:0width$}", self.0, width = $width)
            }
        }
    };
}

bounded_integer!(
    /// Room number inside the hotel network, shown as `001`..`999`.
    RoomNumber, "room number", 1..=999, 3
);

bounded_integer!(
    /// How many people a room sleeps.
    Capacity, "capacity", 1..=4, 1
);

bounded_integer!(
    /// Internal phone extension.
    Extension, "extension", 0..=50, 1
);
