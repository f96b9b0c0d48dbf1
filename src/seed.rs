//! Start-up data loaded from a JSON file.
//!
//! Records go through the services one by one, so a seed file is held to the
//! same rules as the console: a room must name a known hotel, a reservation a
//! known guest and room, and no two stays of a room may overlap.

use crate::container::Keyed;
use crate::hotel::Hotel;
use crate::person::{Guest, Manager};
use crate::reservation::Reservation;
use crate::room::Room;
use crate::service::{PersonService, ReservationService, ServiceError, ServiceResult};
use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} #{index} rejected: {source}")]
    Record {
        kind: &'static str,
        index: usize,
        source: ServiceError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SeedData {
    managers: Vec<Manager>,
    guests: Vec<Guest>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

/// Number of records of each kind that were loaded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub managers: usize,
    pub guests: usize,
    pub hotels: usize,
    pub rooms: usize,
    pub reservations: usize,
}

pub fn load_from_file(
    path: &Path,
    people: &dyn PersonService,
    bookings: &dyn ReservationService,
) -> Result<SeedSummary, SeedError> {
    let data = std::fs::read_to_string(path)?;
    let summary = load_from_str(&data, people, bookings)?;
    info!(path = %path.display(), ?summary, "loaded seed file");
    Ok(summary)
}

pub fn load_from_str(
    data: &str,
    people: &dyn PersonService,
    bookings: &dyn ReservationService,
) -> Result<SeedSummary, SeedError> {
    let raw: SeedData = serde_json::from_str(data)?;

    Ok(SeedSummary {
        managers: insert_all(raw.managers, |m| people.create_manager(m))?,
        guests: insert_all(raw.guests, |g| people.create_guest(g))?,
        hotels: insert_all(raw.hotels, |h| bookings.create_hotel(h))?,
        rooms: insert_all(raw.rooms, |r| bookings.create_room(r))?,
        reservations: insert_all(raw.reservations, |r| bookings.create_reservation(r))?,
    })
}

fn insert_all<E: Keyed>(
    records: Vec<E>,
    insert: impl Fn(E) -> ServiceResult<()>,
) -> Result<usize, SeedError> {
    let count = records.len();
    for (index, record) in records.into_iter().enumerate() {
        insert(record).map_err(|source| SeedError::Record {
            kind: E::KIND,
            index,
            source,
        })?;
    }
    Ok(count)
}
