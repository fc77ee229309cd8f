//! reservation.rs
//!
//! Сервис бронирования и отмены мест в схеме зала.
//!
//! Каждая операция читает весь документ, проверяет запрос, меняет один
//! непрерывный диапазон мест в одном ряду и записывает документ целиком.
//! При любом отказе (неверный запрос или занятое место) файл не трогается.

use clap::ValueEnum;
use thiserror::Error;
use tracing::{info, warn};

use crate::database::{ChartStore, StoreResult};
use crate::models::{SeatRange, SeatState, SeatingChart};

/// Why a request was rejected before touching any seat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("starting seat {0:?} must be a row letter followed by a seat number")]
    TooShort(String),

    #[error("seat number in {0:?} is not an integer")]
    InvalidSeatNumber(String),

    #[error("number of seats {num_seats} must be between 0 and {seats_per_row}")]
    NumSeatsOutOfRange { num_seats: i64, seats_per_row: usize },

    #[error("seat index {index} is outside 0..{seats_per_row}")]
    SeatIndexOutOfRange { index: i64, seats_per_row: usize },

    #[error("row {0} does not exist")]
    UnknownRow(char),

    #[error("{num_seats} seats from index {index} do not fit in a row of {seats_per_row}")]
    RangeOverflow {
        index: usize,
        num_seats: usize,
        seats_per_row: usize,
    },
}

/// Reservation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Book the seats (fails if any of them is already booked)
    #[value(name = "BOOK")]
    Book,
    /// Cancel the reservation of the seats
    #[value(name = "CANCEL")]
    Cancel,
}

/// Parses `starting_seat` ("A1": row letter plus zero-based seat index) and checks
/// that `num_seats` seats from there fit in one row of `chart`.
/// Seat availability is not checked here.
pub fn parse_request(
    chart: &SeatingChart,
    seats_per_row: usize,
    starting_seat: &str,
    num_seats: i64,
) -> Result<SeatRange, RequestError> {
    let mut chars = starting_seat.chars();
    let (first, suffix) = match chars.next() {
        Some(first) if !chars.as_str().is_empty() => (first, chars.as_str()),
        _ => return Err(RequestError::TooShort(starting_seat.to_string())),
    };

    let index: i64 = suffix
        .parse()
        .map_err(|_| RequestError::InvalidSeatNumber(starting_seat.to_string()))?;

    let num_seats = usize::try_from(num_seats)
        .ok()
        .filter(|&n| n <= seats_per_row)
        .ok_or(RequestError::NumSeatsOutOfRange {
            num_seats,
            seats_per_row,
        })?;

    let index = usize::try_from(index)
        .ok()
        .filter(|&i| i < seats_per_row)
        .ok_or(RequestError::SeatIndexOutOfRange {
            index,
            seats_per_row,
        })?;

    let row = first.to_ascii_uppercase();
    if !chart.contains_row(row) {
        return Err(RequestError::UnknownRow(row));
    }

    if index + num_seats > seats_per_row {
        return Err(RequestError::RangeOverflow {
            index,
            num_seats,
            seats_per_row,
        });
    }

    Ok(SeatRange {
        row,
        start: index,
        len: num_seats,
    })
}

pub fn validate_request(
    chart: &SeatingChart,
    seats_per_row: usize,
    starting_seat: &str,
    num_seats: i64,
) -> bool {
    parse_request(chart, seats_per_row, starting_seat, num_seats).is_ok()
}

pub struct ReservationEngine {
    store: ChartStore,
}

impl ReservationEngine {
    pub fn new(store: ChartStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    pub fn execute(&self, action: Action, starting_seat: &str, num_seats: i64) -> StoreResult<bool> {
        match action {
            Action::Book => self.book(starting_seat, num_seats),
            Action::Cancel => self.cancel(starting_seat, num_seats),
        }
    }

    /// Books the whole range or nothing.
    pub fn book(&self, starting_seat: &str, num_seats: i64) -> StoreResult<bool> {
        let mut chart = self.store.load_or_init()?;
        let Some(range) = self.checked_range(&chart, starting_seat, num_seats) else {
            return Ok(false);
        };

        if !chart.is_range_free(&range) {
            warn!("Booking {} rejected: seats already booked", range);
            return Ok(false);
        }

        chart.fill(&range, SeatState::Booked);
        self.store.save(&chart)?;
        info!("Booked {} seats in row {} from seat {}", range.len, range.row, range.start);
        Ok(true)
    }

    /// Frees the range. Cancelling seats that are already empty is a successful no-op.
    pub fn cancel(&self, starting_seat: &str, num_seats: i64) -> StoreResult<bool> {
        let mut chart = self.store.load_or_init()?;
        let Some(range) = self.checked_range(&chart, starting_seat, num_seats) else {
            return Ok(false);
        };

        chart.fill(&range, SeatState::Empty);
        self.store.save(&chart)?;
        info!("Cancelled {} seats in row {} from seat {}", range.len, range.row, range.start);
        Ok(true)
    }

    fn checked_range(&self, chart: &SeatingChart, starting_seat: &str, num_seats: i64) -> Option<SeatRange> {
        let seats_per_row = self.store.layout().seats_per_row;
        match parse_request(chart, seats_per_row, starting_seat, num_seats) {
            Ok(range) => Some(range),
            Err(e) => {
                warn!("Invalid request {} x{}: {}", starting_seat, num_seats, e);
                None
            }
        }
    }
}
