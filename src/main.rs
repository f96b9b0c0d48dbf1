use crate::console::{
    AuthConsole, Integration, PersonnelConsole, ReservationConsole, RustylineTerminal,
};
use crate::container::{
    GuestContainer, HotelContainer, ManagerContainer, ReservationContainer, RoomContainer, shared,
};
use crate::service::{AuthController, PersonController, ReservationController};
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;

mod console;
mod container;
mod domain;
mod hotel;
mod logging;
mod person;
mod reservation;
mod room;
mod seed;
mod service;

#[derive(Parser)]
#[command(version, about = "Hotel reservation console")]
struct Args {
    /// Path to a JSON file with managers, guests, hotels, rooms and reservations to load at start-up
    #[arg(short, long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::setup_tracing(&args.log_level);

    let managers = shared(ManagerContainer::new());
    let guests = shared(GuestContainer::new());
    let hotels = shared(HotelContainer::new());
    let rooms = shared(RoomContainer::new());
    let reservations = shared(ReservationContainer::new());

    let auth = Rc::new(AuthController::new(managers.clone()));
    let people = Rc::new(PersonController::new(
        managers.clone(),
        guests.clone(),
        reservations.clone(),
    ));
    let bookings = Rc::new(ReservationController::new(hotels, rooms, reservations, guests));

    if let Some(path) = &args.seed {
        let summary = seed::load_from_file(path, people.as_ref(), bookings.as_ref())?;
        println!(
            "Loaded {} managers, {} guests, {} hotels, {} rooms and {} reservations from {}",
            summary.managers,
            summary.guests,
            summary.hotels,
            summary.rooms,
            summary.reservations,
            path.display()
        );
    }

    if managers.borrow().is_empty() {
        println!("No managers registered yet. Use 'signup' to create the first account.");
    }

    let integration = Integration::new(
        Box::new(AuthConsole::new(auth, people.clone())),
        Box::new(PersonnelConsole::new(people.clone())),
        Box::new(ReservationConsole::new(bookings, people)),
    );

    let mut terminal = RustylineTerminal::new()?;
    integration.run(&mut terminal)?;
    Ok(())
}
