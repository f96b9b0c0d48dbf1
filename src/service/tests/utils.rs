use crate::container::{
    Container, GuestContainer, HotelContainer, Keyed, ManagerContainer, ReservationContainer,
    RoomContainer, Shared, shared,
};
use crate::domain::{
    Address, Capacity, Card, Code, Date, Email, Extension, Money, Name, Password, Phone,
    RoomNumber,
};
use crate::hotel::Hotel;
use crate::person::{Guest, Manager};
use crate::reservation::Reservation;
use crate::room::Room;
use crate::service::{AuthController, PersonController, ReservationController};
use proptest::prelude::Strategy;

pub const CARD: &str = "4111111111111111";

pub fn email(s: &str) -> Email {
    Email::new(s).unwrap()
}

pub fn code(s: &str) -> Code {
    Code::new(s).unwrap()
}

pub fn room_number(n: u16) -> RoomNumber {
    RoomNumber::new(n).unwrap()
}

pub fn date(s: &str) -> Date {
    s.parse().unwrap()
}

pub fn money(s: &str) -> Money {
    s.parse().unwrap()
}

pub fn manager(address: &str, password: &str) -> Manager {
    Manager::new(
        Name::new("Admin Hotel").unwrap(),
        email(address),
        Extension::new(10).unwrap(),
        Password::new(password).unwrap(),
    )
}

pub fn guest(address: &str) -> Guest {
    Guest::new(
        Name::new("Maria Silva").unwrap(),
        email(address),
        Address::new("Rua A, 10").unwrap(),
        Card::new(CARD).unwrap(),
    )
}

pub fn hotel(hotel_code: &str) -> Hotel {
    Hotel {
        code: code(hotel_code),
        name: Name::new("Hotel Central").unwrap(),
        address: Address::new("Av. Brasil 1500").unwrap(),
        phone: Phone::new("+551199999999999").unwrap(),
    }
}

pub fn room(number: u16, hotel_code: &str, rate: &str) -> Room {
    Room {
        number: room_number(number),
        hotel: code(hotel_code),
        capacity: Capacity::new(2).unwrap(),
        rate: money(rate),
        extension: Extension::new(5).unwrap(),
    }
}

pub fn reservation(
    reservation_code: &str,
    guest_email: &str,
    number: u16,
    arrival: &str,
    departure: &str,
) -> Reservation {
    Reservation {
        code: code(reservation_code),
        guest: email(guest_email),
        room: room_number(number),
        arrival: date(arrival),
        departure: date(departure),
        amount: money("500,00"),
        card: Card::new(CARD).unwrap(),
    }
}

/// Every container wired into every controller, as the binary does it.
pub struct Fixture {
    pub managers: Shared<ManagerContainer>,
    pub guests: Shared<GuestContainer>,
    pub hotels: Shared<HotelContainer>,
    pub rooms: Shared<RoomContainer>,
    pub reservations: Shared<ReservationContainer>,
    pub auth: AuthController,
    pub people: PersonController,
    pub bookings: ReservationController,
}

pub fn fixture() -> Fixture {
    let managers = shared(ManagerContainer::new());
    let guests = shared(GuestContainer::new());
    let hotels = shared(HotelContainer::new());
    let rooms = shared(RoomContainer::new());
    let reservations = shared(ReservationContainer::new());
    Fixture {
        auth: AuthController::new(managers.clone()),
        people: PersonController::new(managers.clone(), guests.clone(), reservations.clone()),
        bookings: ReservationController::new(
            hotels.clone(),
            rooms.clone(),
            reservations.clone(),
            guests.clone(),
        ),
        managers,
        guests,
        hotels,
        rooms,
        reservations,
    }
}

/// Checks that every stored entity is reachable through its key and returns
/// how many there are.
pub fn indexed_len<E>(container: &Shared<Container<E>>) -> usize
where
    E: Keyed + PartialEq + std::fmt::Debug,
{
    let container = container.borrow();
    for entity in container.iter() {
        assert_eq!(Some(entity), container.find(entity.key()));
    }
    assert_eq!(container.len(), container.list().len());
    container.len()
}

/// Fixture with one hotel, rooms 101 and 102 and guests ana@mail.com and
/// bia@mail.com.
pub fn stocked_fixture() -> Fixture {
    use crate::service::{PersonService, ReservationService};

    let f = fixture();
    f.bookings.create_hotel(hotel("hotel00001")).unwrap();
    f.bookings.create_room(room(101, "hotel00001", "200,00")).unwrap();
    f.bookings.create_room(room(102, "hotel00001", "350,00")).unwrap();
    f.people.create_guest(guest("ana@mail.com")).unwrap();
    f.people.create_guest(guest("bia@mail.com")).unwrap();
    f
}

/// Day offset from 01-JAN-2026 as a date.
pub fn day(offset: u32) -> Date {
    let mut current = date("01-JAN-2026");
    let months = [
        ("JAN", 31),
        ("FEV", 28),
        ("MAR", 31),
        ("ABR", 30),
        ("MAI", 31),
        ("JUN", 30),
    ];
    let mut remaining = offset;
    for (month, days) in months {
        if remaining < days {
            current = Date::new(remaining as u8 + 1, month, 2026).unwrap();
            break;
        }
        remaining -= days;
    }
    current
}

pub fn arb_stay() -> impl Strategy<Value = (u32, u32)> {
    (0..150u32, 1..10u32).prop_map(|(start, len)| (start, start + len))
}
