use crate::container::Keyed;
use crate::domain::{Card, Code, Date, Email, Money, RoomNumber};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A guest's stay in one room from `arrival` to `departure`. The departure
/// day is free for the next arrival.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Reservation {
    pub code: Code,
    pub guest: Email,
    pub room: RoomNumber,
    pub arrival: Date,
    pub departure: Date,
    pub amount: Money,
    pub card: Card,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        self.departure - self.arrival
    }

    pub fn stay(&self) -> (Date, Date) {
        (self.arrival, self.departure)
    }

    pub fn overlaps(&self, other: &Reservation) -> bool {
        self.room == other.room && Date::is_overlapping(&self.stay(), &other.stay())
    }
}

impl Keyed for Reservation {
    type Key = Code;
    const KIND: &'static str = "reservation";

    fn key(&self) -> &Code {
        &self.code
    }
}
