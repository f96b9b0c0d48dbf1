//! Business rules over the containers.
//!
//! The console only ever sees the traits declared here; the controllers in
//! the submodules implement them on top of shared containers.

use crate::domain::{Code, Date, Email, Money, Password, RoomNumber, ValidationError};
use crate::hotel::Hotel;
use crate::person::{Guest, Manager, Person};
use crate::reservation::Reservation;
use crate::room::Room;
use thiserror::Error;

mod auth;
mod person;
mod reservation;

#[cfg(test)]
pub(crate) mod tests;

pub use auth::AuthController;
pub use person::PersonController;
pub use reservation::ReservationController;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{kind} {key} not found")]
    NotFound { kind: &'static str, key: String },

    #[error("{kind} {key} already exists")]
    AlreadyExists { kind: &'static str, key: String },

    #[error("{kind} {key} is still referenced by {by}")]
    InUse {
        kind: &'static str,
        key: String,
        by: String,
    },

    #[error("room {room} is already booked by reservation {existing} for part of that stay")]
    Conflict { room: RoomNumber, existing: Code },

    #[error("departure {departure} must be after arrival {arrival}")]
    InvalidStay { arrival: Date, departure: Date },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    pub(crate) fn not_found<K: ToString>(kind: &'static str, key: &K) -> Self {
        ServiceError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn already_exists<K: ToString>(kind: &'static str, key: &K) -> Self {
        ServiceError::AlreadyExists {
            kind,
            key: key.to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub trait AuthService {
    /// True when a manager with this email exists and the password matches.
    fn authenticate(&self, email: &Email, password: &Password) -> bool;
}

/// Managers and guests. An email identifies at most one person of either kind.
pub trait PersonService {
    fn create_manager(&self, manager: Manager) -> ServiceResult<()>;
    fn update_manager(&self, manager: Manager) -> ServiceResult<()>;
    fn read_manager(&self, email: &Email) -> ServiceResult<Manager>;
    fn delete_manager(&self, email: &Email) -> ServiceResult<()>;
    fn list_managers(&self) -> Vec<Manager>;

    fn create_guest(&self, guest: Guest) -> ServiceResult<()>;
    fn update_guest(&self, guest: Guest) -> ServiceResult<()>;
    fn read_guest(&self, email: &Email) -> ServiceResult<Guest>;
    /// Fails while the guest holds reservations.
    fn delete_guest(&self, email: &Email) -> ServiceResult<()>;
    fn list_guests(&self) -> Vec<Guest>;

    fn find_person(&self, email: &Email) -> ServiceResult<Person>;
}

/// Hotels, their rooms and the reservations made on those rooms.
pub trait ReservationService {
    fn create_hotel(&self, hotel: Hotel) -> ServiceResult<()>;
    fn update_hotel(&self, hotel: Hotel) -> ServiceResult<()>;
    fn read_hotel(&self, code: &Code) -> ServiceResult<Hotel>;
    /// Fails while the hotel has rooms.
    fn delete_hotel(&self, code: &Code) -> ServiceResult<()>;
    fn list_hotels(&self) -> Vec<Hotel>;

    fn create_room(&self, room: Room) -> ServiceResult<()>;
    fn update_room(&self, room: Room) -> ServiceResult<()>;
    fn read_room(&self, number: &RoomNumber) -> ServiceResult<Room>;
    /// Fails while the room has reservations.
    fn delete_room(&self, number: &RoomNumber) -> ServiceResult<()>;
    fn list_rooms(&self) -> Vec<Room>;
    fn list_rooms_of(&self, hotel: &Code) -> Vec<Room>;

    /// Rejects stays that overlap another reservation of the same room.
    fn create_reservation(&self, reservation: Reservation) -> ServiceResult<()>;
    fn update_reservation(&self, reservation: Reservation) -> ServiceResult<()>;
    fn read_reservation(&self, code: &Code) -> ServiceResult<Reservation>;
    fn delete_reservation(&self, code: &Code) -> ServiceResult<()>;
    fn list_reservations(&self) -> Vec<Reservation>;
    fn list_reservations_of(&self, guest: &Email) -> Vec<Reservation>;

    /// Price of a stay: the room's nightly rate times the number of nights.
    fn quote(&self, room: &RoomNumber, arrival: &Date, departure: &Date) -> ServiceResult<Money>;
}
