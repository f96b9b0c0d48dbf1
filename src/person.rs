use crate::container::Keyed;
use crate::domain::{Address, Card, Email, Extension, Name, Password};
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// Fields shared by every kind of person. The email is the key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct PersonInfo {
    #[tabled(rename = "email")]
    pub email: Email,
    #[tabled(rename = "name")]
    pub name: Name,
}

/// Staff member allowed to log in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Manager {
    #[serde(flatten)]
    #[tabled(inline)]
    pub info: PersonInfo,
    pub extension: Extension,
    #[tabled(skip)]
    pub password: Password,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Guest {
    #[serde(flatten)]
    #[tabled(inline)]
    pub info: PersonInfo,
    pub address: Address,
    pub card: Card,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Person {
    Manager(Manager),
    Guest(Guest),
}

impl Manager {
    pub fn new(name: Name, email: Email, extension: Extension, password: Password) -> Self {
        Manager {
            info: PersonInfo { email, name },
            extension,
            password,
        }
    }

    pub fn email(&self) -> &Email {
        &self.info.email
    }
}

impl Guest {
    pub fn new(name: Name, email: Email, address: Address, card: Card) -> Self {
        Guest {
            info: PersonInfo { email, name },
            address,
            card,
        }
    }

    pub fn email(&self) -> &Email {
        &self.info.email
    }
}

impl Person {
    pub fn info(&self) -> &PersonInfo {
        match self {
            Person::Manager(m) => &m.info,
            Person::Guest(g) => &g.info,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Person::Manager(_) => Manager::KIND,
            Person::Guest(_) => Guest::KIND,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.kind(), self.info().name, self.info().email)
    }
}

impl Keyed for Manager {
    type Key = Email;
    const KIND: &'static str = "manager";

    fn key(&self) -> &Email {
        &self.info.email
    }
}

impl Keyed for Guest {
    type Key = Email;
    const KIND: &'static str = "guest";

    fn key(&self) -> &Email {
        &self.info.email
    }
}
