use crate::container::Keyed;
use crate::domain::{Capacity, Code, Extension, Money, RoomNumber};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Room {
    pub number: RoomNumber,
    pub hotel: Code,
    pub capacity: Capacity,
    /// Nightly rate.
    pub rate: Money,
    pub extension: Extension,
}

impl Keyed for Room {
    type Key = RoomNumber;
    const KIND: &'static str = "room";

    fn key(&self) -> &RoomNumber {
        &self.number
    }
}
