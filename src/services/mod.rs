pub mod reservation;

pub use reservation::{parse_request, validate_request, Action, RequestError, ReservationEngine};
