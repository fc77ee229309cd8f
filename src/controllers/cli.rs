use clap::Parser;
use std::fmt;

use crate::database::StoreResult;
use crate::services::{Action, ReservationEngine};

/// Process plane seat reservations
#[derive(Debug, Parser)]
#[command(name = "reserve", version, about)]
pub struct Cli {
    /// BOOK = book the seats, CANCEL = cancel reservation(s)
    #[arg(value_enum, ignore_case = true)]
    pub action: Action,

    /// Starting seat position, e.g. A1
    pub starting_seat: String,

    /// Number of consecutive seats to book (or cancel), from starting seat
    #[arg(allow_negative_numbers = true)]
    pub num_seats: i64,
}

/// Result line printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

impl From<bool> for Outcome {
    fn from(ok: bool) -> Self {
        if ok {
            Outcome::Success
        } else {
            Outcome::Fail
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("SUCCESS"),
            Outcome::Fail => f.write_str("FAIL"),
        }
    }
}

impl Cli {
    pub fn run(&self, engine: &ReservationEngine) -> StoreResult<Outcome> {
        engine
            .execute(self.action, &self.starting_seat, self.num_seats)
            .map(Outcome::from)
    }
}
