use crate::container::{
    GuestContainer, HotelContainer, Keyed, ReservationContainer, RoomContainer, Shared,
};
use crate::domain::{Code, Date, Email, Money, RoomNumber};
use crate::hotel::Hotel;
use crate::person::Guest;
use crate::reservation::Reservation;
use crate::room::Room;
use crate::service::{ReservationService, ServiceError, ServiceResult};
use tracing::debug;

pub struct ReservationController {
    hotels: Shared<HotelContainer>,
    rooms: Shared<RoomContainer>,
    reservations: Shared<ReservationContainer>,
    guests: Shared<GuestContainer>,
}

impl ReservationController {
    pub fn new(
        hotels: Shared<HotelContainer>,
        rooms: Shared<RoomContainer>,
        reservations: Shared<ReservationContainer>,
        guests: Shared<GuestContainer>,
    ) -> Self {
        ReservationController {
            hotels,
            rooms,
            reservations,
            guests,
        }
    }

    fn ensure_hotel(&self, code: &Code) -> ServiceResult<()> {
        if !self.hotels.borrow().contains(code) {
            return Err(ServiceError::not_found(Hotel::KIND, code));
        }
        Ok(())
    }

    fn nights(arrival: &Date, departure: &Date) -> ServiceResult<u64> {
        let nights = *departure - *arrival;
        if nights <= 0 {
            return Err(ServiceError::InvalidStay {
                arrival: *arrival,
                departure: *departure,
            });
        }
        Ok(nights as u64)
    }

    /// Checks everything a stored reservation relies on. The reservation with
    /// the same code is ignored when looking for conflicts, so updates can move
    /// a stay within its own dates.
    fn check_reservation(&self, reservation: &Reservation) -> ServiceResult<()> {
        Self::nights(&reservation.arrival, &reservation.departure)?;
        if !self.guests.borrow().contains(&reservation.guest) {
            return Err(ServiceError::not_found(Guest::KIND, &reservation.guest));
        }
        if !self.rooms.borrow().contains(&reservation.room) {
            return Err(ServiceError::not_found(Room::KIND, &reservation.room));
        }
        let reservations = self.reservations.borrow();
        let conflict = reservations
            .iter()
            .filter(|r| r.code != reservation.code)
            .find(|r| r.overlaps(reservation));
        if let Some(existing) = conflict {
            return Err(ServiceError::Conflict {
                room: reservation.room,
                existing: existing.code.clone(),
            });
        }
        Ok(())
    }
}

impl ReservationService for ReservationController {
    fn create_hotel(&self, hotel: Hotel) -> ServiceResult<()> {
        let code = hotel.code.clone();
        if !self.hotels.borrow_mut().include(hotel) {
            return Err(ServiceError::already_exists(Hotel::KIND, &code));
        }
        debug!(%code, "created hotel");
        Ok(())
    }

    fn update_hotel(&self, hotel: Hotel) -> ServiceResult<()> {
        let code = hotel.code.clone();
        if !self.hotels.borrow_mut().update(hotel) {
            return Err(ServiceError::not_found(Hotel::KIND, &code));
        }
        debug!(%code, "updated hotel");
        Ok(())
    }

    fn read_hotel(&self, code: &Code) -> ServiceResult<Hotel> {
        self.hotels
            .borrow()
            .find(code)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Hotel::KIND, code))
    }

    fn delete_hotel(&self, code: &Code) -> ServiceResult<()> {
        self.ensure_hotel(code)?;
        if let Some(room) = self.rooms.borrow().iter().find(|r| r.hotel == *code) {
            return Err(ServiceError::InUse {
                kind: Hotel::KIND,
                key: code.to_string(),
                by: format!("room {}", room.number),
            });
        }
        self.hotels.borrow_mut().remove(code);
        debug!(%code, "deleted hotel");
        Ok(())
    }

    fn list_hotels(&self) -> Vec<Hotel> {
        self.hotels.borrow().list()
    }

    fn create_room(&self, room: Room) -> ServiceResult<()> {
        self.ensure_hotel(&room.hotel)?;
        let number = room.number;
        if !self.rooms.borrow_mut().include(room) {
            return Err(ServiceError::already_exists(Room::KIND, &number));
        }
        debug!(%number, "created room");
        Ok(())
    }

    fn update_room(&self, room: Room) -> ServiceResult<()> {
        self.ensure_hotel(&room.hotel)?;
        let number = room.number;
        if !self.rooms.borrow_mut().update(room) {
            return Err(ServiceError::not_found(Room::KIND, &number));
        }
        debug!(%number, "updated room");
        Ok(())
    }

    fn read_room(&self, number: &RoomNumber) -> ServiceResult<Room> {
        self.rooms
            .borrow()
            .find(number)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Room::KIND, number))
    }

    fn delete_room(&self, number: &RoomNumber) -> ServiceResult<()> {
        if !self.rooms.borrow().contains(number) {
            return Err(ServiceError::not_found(Room::KIND, number));
        }
        if let Some(booking) = self.reservations.borrow().iter().find(|r| r.room == *number) {
            return Err(ServiceError::InUse {
                kind: Room::KIND,
                key: number.to_string(),
                by: format!("reservation {}", booking.code),
            });
        }
        self.rooms.borrow_mut().remove(number);
        debug!(%number, "deleted room");
        Ok(())
    }

    fn list_rooms(&self) -> Vec<Room> {
        self.rooms.borrow().list()
    }

    fn list_rooms_of(&self, hotel: &Code) -> Vec<Room> {
        self.rooms
            .borrow()
            .iter()
            .filter(|r| r.hotel == *hotel)
            .cloned()
            .collect()
    }

    fn create_reservation(&self, reservation: Reservation) -> ServiceResult<()> {
        if self.reservations.borrow().contains(&reservation.code) {
            return Err(ServiceError::already_exists(Reservation::KIND, &reservation.code));
        }
        self.check_reservation(&reservation)?;
        debug!(
            code = %reservation.code,
            room = %reservation.room,
            arrival = %reservation.arrival,
            departure = %reservation.departure,
            "created reservation"
        );
        self.reservations.borrow_mut().include(reservation);
        Ok(())
    }

    fn update_reservation(&self, reservation: Reservation) -> ServiceResult<()> {
        if !self.reservations.borrow().contains(&reservation.code) {
            return Err(ServiceError::not_found(Reservation::KIND, &reservation.code));
        }
        self.check_reservation(&reservation)?;
        debug!(code = %reservation.code, "updated reservation");
        self.reservations.borrow_mut().update(reservation);
        Ok(())
    }

    fn read_reservation(&self, code: &Code) -> ServiceResult<Reservation> {
        self.reservations
            .borrow()
            .find(code)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Reservation::KIND, code))
    }

    fn delete_reservation(&self, code: &Code) -> ServiceResult<()> {
        self.reservations
            .borrow_mut()
            .remove(code)
            .ok_or_else(|| ServiceError::not_found(Reservation::KIND, code))?;
        debug!(%code, "deleted reservation");
        Ok(())
    }

    fn list_reservations(&self) -> Vec<Reservation> {
        self.reservations.borrow().list()
    }

    fn list_reservations_of(&self, guest: &Email) -> Vec<Reservation> {
        self.reservations
            .borrow()
            .iter()
            .filter(|r| r.guest == *guest)
            .cloned()
            .collect()
    }

    fn quote(&self, room: &RoomNumber, arrival: &Date, departure: &Date) -> ServiceResult<Money> {
        let nights = Self::nights(arrival, departure)?;
        let rate = self.read_room(room)?.rate;
        Ok(rate.times(nights)?)
    }
}
