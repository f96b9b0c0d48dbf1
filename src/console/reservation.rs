use crate::console::{
    ConsoleError, FormError, FormResult, Terminal, argument, print_help, prompt, prompt_or_keep,
    read_command, report, show_rows,
};
use crate::container::Keyed;
use crate::domain::{Code, Date, Email, Money, RoomNumber};
use crate::hotel::Hotel;
use crate::person::{Guest, Person};
use crate::reservation::Reservation;
use crate::room::Room;
use crate::service::{PersonService, ReservationService, ServiceError};
use std::rc::Rc;
use tracing::debug;

const COMMANDS: [&str; 7] = ["hotel", "room", "guest", "reservation", "quote", "help", "back"];

/// Management of hotels, rooms, guests and reservations.
pub trait ReservationPresenter {
    fn run(&self, term: &mut dyn Terminal, manager: &Email) -> Result<(), ConsoleError>;
}

pub struct ReservationConsole {
    bookings: Rc<dyn ReservationService>,
    people: Rc<dyn PersonService>,
}

/// What a command left to say; listings print their own output.
type Outcome = FormResult<Option<String>>;

fn done(message: String) -> Outcome {
    Ok(Some(message))
}

impl ReservationConsole {
    pub fn new(bookings: Rc<dyn ReservationService>, people: Rc<dyn PersonService>) -> Self {
        ReservationConsole { bookings, people }
    }

    /// Looks an email up among all people so a manager's email is reported
    /// as such instead of as a missing guest.
    fn find_guest(&self, email: &Email) -> FormResult<Guest> {
        match self.people.find_person(email) {
            Ok(Person::Guest(guest)) => Ok(guest),
            Ok(other) => Err(FormError::WrongKind {
                email: other.info().email.clone(),
                kind: other.kind(),
            }),
            Err(_) => Err(ServiceError::not_found(Guest::KIND, email).into()),
        }
    }

    /// Asks for the amount to charge, offering the quote for the stay. A quote
    /// beyond the largest amount leaves the field without a default.
    fn ask_amount(
        &self,
        term: &mut dyn Terminal,
        room: &RoomNumber,
        arrival: &Date,
        departure: &Date,
    ) -> FormResult<Money> {
        match self.bookings.quote(room, arrival, departure) {
            Ok(quote) => prompt_or_keep(term, "amount", &quote),
            Err(ServiceError::Validation(_)) => prompt(term, "amount"),
            Err(err) => Err(err.into()),
        }
    }

    fn hotel(&self, term: &mut dyn Terminal, sub: Option<&str>, arg: Option<&String>) -> Outcome {
        const KEY: &str = "hotel show|edit|rm <code>";
        match sub {
            Some("ls") | None => {
                show_rows(term, &self.bookings.list_hotels(), "No hotels registered.")?;
                Ok(None)
            }
            Some("add") => {
                let hotel = Hotel {
                    code: prompt(term, "code")?,
                    name: prompt(term, "name")?,
                    address: prompt(term, "address")?,
                    phone: prompt(term, "phone")?,
                };
                let code = hotel.code.clone();
                self.bookings.create_hotel(hotel)?;
                done(format!("hotel {} created", code))
            }
            Some("show") => {
                let hotel = self.bookings.read_hotel(&argument(arg, KEY)?)?;
                show_rows(term, &[hotel], "")?;
                Ok(None)
            }
            Some("edit") => {
                let mut hotel = self.bookings.read_hotel(&argument(arg, KEY)?)?;
                hotel.name = prompt_or_keep(term, "name", &hotel.name)?;
                hotel.address = prompt_or_keep(term, "address", &hotel.address)?;
                hotel.phone = prompt_or_keep(term, "phone", &hotel.phone)?;
                let code = hotel.code.clone();
                self.bookings.update_hotel(hotel)?;
                done(format!("hotel {} updated", code))
            }
            Some("rm") => {
                let code: Code = argument(arg, KEY)?;
                self.bookings.delete_hotel(&code)?;
                done(format!("hotel {} deleted", code))
            }
            Some(_) => Err(FormError::Usage("hotel ls|add|show|edit|rm")),
        }
    }

    fn room(&self, term: &mut dyn Terminal, sub: Option<&str>, arg: Option<&String>) -> Outcome {
        const KEY: &str = "room show|edit|rm <number>";
        match sub {
            Some("ls") | None => {
                let rooms = match arg {
                    Some(_) => self.bookings.list_rooms_of(&argument(arg, "room ls [hotel code]")?),
                    None => self.bookings.list_rooms(),
                };
                show_rows(term, &rooms, "No rooms found.")?;
                Ok(None)
            }
            Some("add") => {
                let room = Room {
                    number: prompt(term, "number")?,
                    hotel: prompt(term, "hotel code")?,
                    capacity: prompt(term, "capacity")?,
                    rate: prompt(term, "nightly rate")?,
                    extension: prompt(term, "extension")?,
                };
                let number = room.number;
                self.bookings.create_room(room)?;
                done(format!("room {} created", number))
            }
            Some("show") => {
                let room = self.bookings.read_room(&argument(arg, KEY)?)?;
                show_rows(term, &[room], "")?;
                Ok(None)
            }
            Some("edit") => {
                let mut room = self.bookings.read_room(&argument(arg, KEY)?)?;
                room.hotel = prompt_or_keep(term, "hotel code", &room.hotel)?;
                room.capacity = prompt_or_keep(term, "capacity", &room.capacity)?;
                room.rate = prompt_or_keep(term, "nightly rate", &room.rate)?;
                room.extension = prompt_or_keep(term, "extension", &room.extension)?;
                let number = room.number;
                self.bookings.update_room(room)?;
                done(format!("room {} updated", number))
            }
            Some("rm") => {
                let number: RoomNumber = argument(arg, KEY)?;
                self.bookings.delete_room(&number)?;
                done(format!("room {} deleted", number))
            }
            Some(_) => Err(FormError::Usage("room ls|add|show|edit|rm")),
        }
    }

    fn guest(&self, term: &mut dyn Terminal, sub: Option<&str>, arg: Option<&String>) -> Outcome {
        const KEY: &str = "guest show|edit|rm <email>";
        match sub {
            Some("ls") | None => {
                show_rows(term, &self.people.list_guests(), "No guests registered.")?;
                Ok(None)
            }
            Some("add") => {
                let name = prompt(term, "name")?;
                let email: Email = prompt(term, "email")?;
                let address = prompt(term, "address")?;
                let card = prompt(term, "card")?;
                self.people
                    .create_guest(Guest::new(name, email.clone(), address, card))?;
                done(format!("guest {} created", email))
            }
            Some("show") => {
                let guest = self.find_guest(&argument(arg, KEY)?)?;
                show_rows(term, &[guest], "")?;
                Ok(None)
            }
            Some("edit") => {
                let mut guest = self.find_guest(&argument(arg, KEY)?)?;
                guest.info.name = prompt_or_keep(term, "name", &guest.info.name)?;
                guest.address = prompt_or_keep(term, "address", &guest.address)?;
                guest.card = prompt_or_keep(term, "card", &guest.card)?;
                let email = guest.email().clone();
                self.people.update_guest(guest)?;
                done(format!("guest {} updated", email))
            }
            Some("rm") => {
                let email: Email = argument(arg, KEY)?;
                self.people.delete_guest(&email)?;
                done(format!("guest {} deleted", email))
            }
            Some(_) => Err(FormError::Usage("guest ls|add|show|edit|rm")),
        }
    }

    fn reservation(&self, term: &mut dyn Terminal, sub: Option<&str>, arg: Option<&String>) -> Outcome {
        const KEY: &str = "reservation show|edit|rm <code>";
        match sub {
            Some("ls") | None => {
                let reservations = match arg {
                    Some(_) => self
                        .bookings
                        .list_reservations_of(&argument(arg, "reservation ls [guest email]")?),
                    None => self.bookings.list_reservations(),
                };
                show_rows(term, &reservations, "No reservations found.")?;
                Ok(None)
            }
            Some("add") => {
                let code: Code = prompt(term, "code")?;
                let guest = self.find_guest(&prompt(term, "guest email")?)?;
                let room: RoomNumber = prompt(term, "room")?;
                let arrival: Date = prompt(term, "arrival (DD-MMM-YYYY)")?;
                let departure: Date = prompt(term, "departure (DD-MMM-YYYY)")?;
                let reservation = Reservation {
                    amount: self.ask_amount(term, &room, &arrival, &departure)?,
                    card: prompt_or_keep(term, "card", &guest.card)?,
                    code: code.clone(),
                    guest: guest.info.email,
                    room,
                    arrival,
                    departure,
                };
                let nights = reservation.nights();
                self.bookings.create_reservation(reservation)?;
                done(format!("reservation {} created for {} nights", code, nights))
            }
            Some("show") => {
                let reservation = self.bookings.read_reservation(&argument(arg, KEY)?)?;
                show_rows(term, &[reservation], "")?;
                Ok(None)
            }
            Some("edit") => {
                let current = self.bookings.read_reservation(&argument(arg, KEY)?)?;
                let mut edited = current.clone();
                edited.guest = prompt_or_keep(term, "guest email", &current.guest)?;
                edited.room = prompt_or_keep(term, "room", &current.room)?;
                edited.arrival = prompt_or_keep(term, "arrival (DD-MMM-YYYY)", &current.arrival)?;
                edited.departure = prompt_or_keep(term, "departure (DD-MMM-YYYY)", &current.departure)?;
                edited.amount = if edited.room != current.room || edited.stay() != current.stay() {
                    self.ask_amount(term, &edited.room, &edited.arrival, &edited.departure)?
                } else {
                    prompt_or_keep(term, "amount", &current.amount)?
                };
                let card = if edited.guest != current.guest {
                    self.find_guest(&edited.guest)?.card
                } else {
                    current.card.clone()
                };
                edited.card = prompt_or_keep(term, "card", &card)?;
                let nights = edited.nights();
                self.bookings.update_reservation(edited)?;
                done(format!("reservation {} updated, {} nights", current.code, nights))
            }
            Some("rm") => {
                let code: Code = argument(arg, KEY)?;
                self.bookings.delete_reservation(&code)?;
                done(format!("reservation {} deleted", code))
            }
            Some(_) => Err(FormError::Usage("reservation ls|add|show|edit|rm")),
        }
    }

    fn quote(&self, args: &[String]) -> Outcome {
        const USAGE: &str = "quote <room> <arrival> <departure>";
        let room: RoomNumber = argument(args.first(), USAGE)?;
        let arrival: Date = argument(args.get(1), USAGE)?;
        let departure: Date = argument(args.get(2), USAGE)?;
        let total = self.bookings.quote(&room, &arrival, &departure)?;
        done(format!(
            "room {} from {} to {}: {} nights, total {}",
            room,
            arrival,
            departure,
            departure - arrival,
            total
        ))
    }
}

impl ReservationPresenter for ReservationConsole {
    fn run(&self, term: &mut dyn Terminal, manager: &Email) -> Result<(), ConsoleError> {
        debug!(%manager, "opened management console");
        loop {
            term.set_commands(&COMMANDS);
            let Some(parts) = read_command(term, "manage> ")? else {
                break;
            };
            let Some(cmd) = parts.first() else {
                continue;
            };
            let sub = parts.get(1).map(|s| s.as_str());
            let arg = parts.get(2);

            let outcome = match cmd.as_str() {
                "hotel" => self.hotel(term, sub, arg),
                "room" => self.room(term, sub, arg),
                "guest" => self.guest(term, sub, arg),
                "reservation" => self.reservation(term, sub, arg),
                "quote" => self.quote(&parts[1..]),
                "help" | "?" => {
                    print_help(
                        term,
                        &[
                            ("hotel ls", "List hotels"),
                            ("hotel add", "Register a hotel"),
                            ("hotel show|edit|rm <code>", "Show, change or delete a hotel"),
                            ("room ls [hotel]", "List rooms, optionally of one hotel"),
                            ("room add", "Register a room"),
                            ("room show|edit|rm <number>", "Show, change or delete a room"),
                            ("guest ls", "List guests"),
                            ("guest add", "Register a guest"),
                            ("guest show|edit|rm <email>", "Show, change or delete a guest"),
                            ("reservation ls [email]", "List reservations, optionally of one guest"),
                            ("reservation add", "Book a room"),
                            ("reservation show|edit|rm <code>", "Show, change or cancel a reservation"),
                            ("quote <room> <arrival> <departure>", "Price a stay, dates as DD-MMM-YYYY"),
                            ("help / ?", "Show this help menu"),
                            ("back", "Return to the main menu"),
                        ],
                    );
                    Ok(None)
                }
                "back" => break,
                other => {
                    term.print(&format!("Unknown command: {}", other));
                    Ok(None)
                }
            };

            match outcome {
                Ok(None) => {}
                Ok(Some(message)) => report(term, Ok(message))?,
                Err(err) => report(term, Err(err))?,
            }
        }
        Ok(())
    }
}
