use crate::container::Keyed;
use crate::domain::{Address, Code, Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Hotel {
    pub code: Code,
    pub name: Name,
    pub address: Address,
    pub phone: Phone,
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl Keyed for Hotel {
    type Key = Code;
    const KIND: &'static str = "hotel";

    fn key(&self) -> &Code {
        &self.code
    }
}
